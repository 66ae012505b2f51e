//! KeySource port - abstraction for retrieving a user's public SSH keys
//!
//! The domain never performs network I/O itself. Lookups are cached per
//! [`Context`](crate::context::Context), so implementations do not need to
//! cache.

use crate::error::BlueprintResult;

/// Source of public keys for a named user
pub trait KeySource {
    /// Fetch every public key registered for `user`, one per entry
    ///
    /// A non-success response is a collaborator error. Implementations
    /// must not retry.
    fn fetch_keys(&self, user: &str) -> BlueprintResult<Vec<String>>;
}

impl<T: KeySource + ?Sized> KeySource for &T {
    fn fetch_keys(&self, user: &str) -> BlueprintResult<Vec<String>> {
        (**self).fetch_keys(user)
    }
}
