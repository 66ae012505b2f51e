//! CLI Argument Parsing
//!
//! Global flags (--json, --verbose, --config) are inherited by all subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Blueprint - declarative deployment compiler
#[derive(Parser, Debug)]
#[command(name = "blueprint")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit NDJSON events instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (defaults to ./blueprint.toml)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Tracing filter implied by `-v` count; `RUST_LOG` still wins
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compile a manifest into a deployment document
    Compile {
        /// Manifest file (.toml, .yaml, .yml or .json)
        manifest: PathBuf,

        /// Write the document here instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Single-line JSON output
        #[arg(long)]
        compact: bool,
    },

    /// Compile a manifest and report problems without writing anything
    Check {
        /// Manifest file
        manifest: PathBuf,
    },

    /// Summarise a previously compiled document
    Inspect {
        /// Compiled JSON document
        document: PathBuf,
    },

    /// Print the SSH keys registered for a GitHub user
    Keys {
        /// GitHub user name
        user: String,
    },
}
