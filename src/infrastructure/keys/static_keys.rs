//! In-memory key source

use std::collections::HashMap;

use crate::domain::ports::KeySource;
use crate::error::{BlueprintError, BlueprintResult};

/// [`KeySource`] answering from a fixed table
///
/// Unknown users fail the way a missing account does over HTTP (404).
#[derive(Debug, Clone, Default)]
pub struct StaticKeySource {
    keys: HashMap<String, Vec<String>>,
}

impl StaticKeySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user<I, S>(mut self, user: impl Into<String>, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keys
            .insert(user.into(), keys.into_iter().map(Into::into).collect());
        self
    }
}

impl KeySource for StaticKeySource {
    fn fetch_keys(&self, user: &str) -> BlueprintResult<Vec<String>> {
        self.keys
            .get(user)
            .cloned()
            .ok_or_else(|| BlueprintError::KeyFetchStatus {
                user: user.to_string(),
                status: 404,
            })
    }
}
