//! Process Context
//!
//! Holds the state that has to be shared by every entity built for one
//! deployment: the service-name dedup table and the key-retrieval cache.
//!
//! Instantiation tags come from a single process-wide counter that never
//! rewinds, so entities built before and after [`Context::reset`], or from
//! different contexts, stay distinct when they end up in one graph.
//!
//! Two graphs built from the same context share the name table, so deploying
//! a service named `db` in each yields `db` and `db2`. Use [`Context::new`]
//! (or [`Context::reset`]) when graphs must be compiled in isolation.

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

use crate::domain::entities::{Container, Image, Machine, MachineAttrs, Service};
use crate::domain::ports::KeySource;
use crate::domain::value_objects::InstanceTag;
use crate::error::BlueprintResult;

/// Shared construction state
///
/// Cheap to clone: clones share the same underlying counters.
#[derive(Clone, Default)]
pub struct Context {
    inner: Arc<ContextState>,
}

static NEXT_TAG: AtomicU64 = AtomicU64::new(0);

#[derive(Default)]
struct ContextState {
    service_names: Mutex<HashMap<String, usize>>,
    key_cache: Mutex<HashMap<String, Vec<String>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl Context {
    /// Create a context with an empty name table and key cache
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide context
    pub fn global() -> &'static Context {
        static GLOBAL: OnceLock<Context> = OnceLock::new();
        GLOBAL.get_or_init(Context::new)
    }

    /// Clear the name table and the key cache
    ///
    /// Tags keep counting up.
    pub fn reset(&self) {
        lock(&self.inner.service_names).clear();
        lock(&self.inner.key_cache).clear();
    }

    /// Allocate a fresh instantiation tag
    pub(crate) fn next_tag(&self) -> InstanceTag {
        InstanceTag::new(NEXT_TAG.fetch_add(1, Ordering::SeqCst))
    }

    /// Deduplicate a service name
    ///
    /// The first use of `base` returns it unchanged; the k-th use returns
    /// `base` followed by `k`.
    pub fn unique_service_name(&self, base: &str) -> String {
        let mut names = lock(&self.inner.service_names);
        let count = names.entry(base.to_string()).or_insert(0);
        *count += 1;
        if *count == 1 {
            base.to_string()
        } else {
            format!("{}{}", base, count)
        }
    }

    /// Fetch a user's public keys, consulting the cache first
    ///
    /// Successful lookups are cached for the lifetime of the context.
    /// Failures are not cached.
    pub fn keys_for_user(&self, source: &dyn KeySource, user: &str) -> BlueprintResult<Vec<String>> {
        if let Some(keys) = lock(&self.inner.key_cache).get(user) {
            tracing::debug!(user, "key cache hit");
            return Ok(keys.clone());
        }

        let keys = source.fetch_keys(user)?;
        lock(&self.inner.key_cache).insert(user.to_string(), keys.clone());
        Ok(keys)
    }

    /// Build a machine from (possibly partial) attributes
    pub fn machine(&self, attrs: MachineAttrs) -> Machine {
        Machine::new(self.clone(), attrs)
    }

    /// Build a container running `image` with no command
    pub fn container(&self, image: impl Into<Image>) -> Container {
        Container::new(self.clone(), image.into(), Vec::new())
    }

    /// Build a container running `image` with the given command
    pub fn container_with_command<I, S>(&self, image: impl Into<Image>, command: I) -> Container
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let command = command.into_iter().map(Into::into).collect();
        Container::new(self.clone(), image.into(), command)
    }

    /// Build a service, deduplicating its name against earlier services
    pub fn service(&self, name: &str, containers: Vec<Container>) -> Service {
        Service::new(self.unique_service_name(name), containers)
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("service_names", &lock(&self.inner.service_names).len())
            .field("cached_users", &lock(&self.inner.key_cache).len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Deployment;
    use crate::domain::services::assign_ids;
    use crate::error::BlueprintError;
    use std::cell::Cell;

    struct CountingSource {
        calls: Cell<usize>,
    }

    impl KeySource for CountingSource {
        fn fetch_keys(&self, user: &str) -> BlueprintResult<Vec<String>> {
            self.calls.set(self.calls.get() + 1);
            if user == "ghost" {
                return Err(BlueprintError::KeyFetchStatus {
                    user: user.to_string(),
                    status: 404,
                });
            }
            Ok(vec![format!("ssh-ed25519 AAAA {}", user)])
        }
    }

    #[test]
    fn unique_service_name_appends_count_after_first_use() {
        let ctx = Context::new();
        assert_eq!(ctx.unique_service_name("foo"), "foo");
        assert_eq!(ctx.unique_service_name("foo"), "foo2");
        assert_eq!(ctx.unique_service_name("foo"), "foo3");
        assert_eq!(ctx.unique_service_name("bar"), "bar");
    }

    #[test]
    fn reset_clears_names_but_not_tags() {
        let ctx = Context::new();
        ctx.unique_service_name("foo");
        let first = ctx.next_tag();
        ctx.reset();
        assert_eq!(ctx.unique_service_name("foo"), "foo");
        assert!(ctx.next_tag() > first);
    }

    #[test]
    fn containers_built_across_reset_stay_distinct() {
        let ctx = Context::new();
        let before = ctx.container("nginx");
        ctx.reset();
        let after = ctx.container("nginx");

        let ids = assign_ids([&before, &after]);
        assert_ne!(ids[0], ids[1]);

        let mut deployment = Deployment::default();
        deployment.deploy(ctx.service("web", vec![before, after])).unwrap();
        let document = deployment.compile().unwrap();
        assert_eq!(document.containers.len(), 2);
    }

    #[test]
    fn containers_from_different_contexts_stay_distinct() {
        let a = Context::new();
        let b = Context::new();
        let first = a.container("nginx");
        let second = b.container("nginx");

        let ids = assign_ids([&first, &second]);
        assert_ne!(ids[0], ids[1]);

        let mut deployment = Deployment::default();
        deployment.deploy(a.service("web", vec![first, second])).unwrap();
        let document = deployment.compile().unwrap();
        assert_eq!(document.containers.len(), 2);
    }

    #[test]
    fn tags_increase_monotonically() {
        let ctx = Context::new();
        let a = ctx.next_tag();
        let b = ctx.next_tag();
        assert!(a < b);
    }

    #[test]
    fn clones_share_state() {
        let ctx = Context::new();
        let other = ctx.clone();
        ctx.unique_service_name("web");
        assert_eq!(other.unique_service_name("web"), "web2");
    }

    #[test]
    fn separate_contexts_are_isolated() {
        let a = Context::new();
        let b = Context::new();
        a.unique_service_name("web");
        assert_eq!(b.unique_service_name("web"), "web");
    }

    #[test]
    fn keys_are_cached_per_user() {
        let ctx = Context::new();
        let source = CountingSource { calls: Cell::new(0) };

        let first = ctx.keys_for_user(&source, "alice").unwrap();
        let second = ctx.keys_for_user(&source, "alice").unwrap();
        assert_eq!(first, second);
        assert_eq!(source.calls.get(), 1);

        ctx.keys_for_user(&source, "bob").unwrap();
        assert_eq!(source.calls.get(), 2);
    }

    #[test]
    fn failed_key_lookups_are_not_cached() {
        let ctx = Context::new();
        let source = CountingSource { calls: Cell::new(0) };

        assert!(ctx.keys_for_user(&source, "ghost").is_err());
        assert!(ctx.keys_for_user(&source, "ghost").is_err());
        assert_eq!(source.calls.get(), 2);
    }
}
