//! Error types for Blueprint
//!
//! Uses `thiserror` for library errors. The binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Blueprint operations
pub type BlueprintResult<T> = Result<T, BlueprintError>;

/// Coarse classification of a [`BlueprintError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Caller misuse, raised at the offending call
    Usage,
    /// Graph inconsistency found while compiling
    Consistency,
    /// Failure reported by an external collaborator (key retrieval)
    Collaborator,
    /// Unreadable or malformed manifest, config, or document
    Input,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Usage => "usage",
            ErrorKind::Consistency => "consistency",
            ErrorKind::Collaborator => "collaborator",
            ErrorKind::Input => "input",
        }
    }
}

/// Main error type for Blueprint operations
#[derive(Error, Debug)]
pub enum BlueprintError {
    /// Port range with min above max
    #[error("invalid port range {min}-{max}: min port exceeds max port")]
    InvalidPortRange { min: u16, max: u16 },

    /// Public internet connections only accept single ports
    #[error("public internet cannot connect on port ranges ({min}-{max})")]
    PublicPortRange { min: u16, max: u16 },

    /// Container hostname requested but never set
    #[error("container running {image} has no hostname")]
    MissingHostname { image: String },

    /// Invariant built with the wrong number of nodes
    #[error("{form} invariant takes {expected} nodes, got {actual}")]
    InvariantArity {
        form: String,
        expected: usize,
        actual: usize,
    },

    /// Unrecognised invariant form name
    #[error("unknown invariant form '{0}'")]
    UnknownInvariantForm(String),

    /// Connection rule references a service that was never deployed
    #[error("{service} has a connection to undeployed service: {peer}")]
    UndeployedConnection { service: String, peer: String },

    /// Placement rule references a service that was never deployed
    #[error("{service} has a placement in terms of an undeployed service: {other}")]
    UndeployedPlacement { service: String, other: String },

    /// Floating IP requested for a replicated, publicly reachable service
    #[error("{service} has a floating IP and multiple containers; this is not supported")]
    FloatingIpConflict { service: String },

    /// Same image name built from different Dockerfiles
    #[error("{image} has differing Dockerfiles")]
    DockerfileConflict { image: String },

    /// Same explicit hostname declared by more than one container
    #[error("hostname \"{hostname}\" used for multiple containers")]
    DuplicateHostname { hostname: String },

    /// An assertion evaluated to something other than its target
    #[error("invariant failed: {invariant}")]
    InvariantFailed { invariant: String },

    /// Key retrieval returned a non-success status
    #[error("HTTP request for {user}'s keys failed with status {status}")]
    KeyFetchStatus { user: String, status: u16 },

    /// Key retrieval could not be performed at all
    #[error("HTTP request for {user}'s keys failed: {message}")]
    KeyFetch { user: String, message: String },

    /// HTTP client could not be initialised
    #[error("could not initialise HTTP client: {0}")]
    HttpClient(String),

    /// Manifest could not be interpreted
    #[error("invalid manifest {file}: {message}")]
    InvalidManifest { file: PathBuf, message: String },

    /// Configuration file could not be interpreted
    #[error("invalid config {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BlueprintError {
    /// Which part of the taxonomy this error belongs to
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidPortRange { .. }
            | Self::PublicPortRange { .. }
            | Self::MissingHostname { .. }
            | Self::InvariantArity { .. }
            | Self::UnknownInvariantForm(_) => ErrorKind::Usage,
            Self::UndeployedConnection { .. }
            | Self::UndeployedPlacement { .. }
            | Self::FloatingIpConflict { .. }
            | Self::DockerfileConflict { .. }
            | Self::DuplicateHostname { .. }
            | Self::InvariantFailed { .. } => ErrorKind::Consistency,
            Self::KeyFetchStatus { .. } | Self::KeyFetch { .. } | Self::HttpClient(_) => {
                ErrorKind::Collaborator
            }
            Self::InvalidManifest { .. }
            | Self::InvalidConfig { .. }
            | Self::Io(_)
            | Self::Json(_) => ErrorKind::Input,
        }
    }
}
