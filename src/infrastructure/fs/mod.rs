//! File System Helpers
//!
//! Output-side file handling.

mod document_writer;

pub use document_writer::write_atomic;
