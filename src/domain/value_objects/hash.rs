//! Entity Identifier Value Object
//!
//! A content-derived identifier assigned to machines and containers at
//! compile time.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Entity identifier
///
/// Lowercase hex SHA-256 digest of an entity's content key followed by its
/// disambiguation rank.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    /// Length of the hex digest
    pub const HEX_LEN: usize = 64;

    /// Derive the identifier for `content_key` at position `rank`
    pub fn derive(content_key: &str, rank: usize) -> Self {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(content_key.as_bytes());
        hasher.update(rank.to_string().as_bytes());
        Self(format!("{:x}", hasher.finalize()))
    }

    /// Get the hex string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First `n` characters, for display
    pub fn short(&self, n: usize) -> &str {
        &self.0[..n.min(self.0.len())]
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for EntityId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for EntityId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
