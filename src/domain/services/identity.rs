//! Identity assignment
//!
//! Identifiers must be reproducible across compilations of the same graph,
//! yet two separately constructed entities with identical content must not
//! collide. Content alone can't tell them apart, so each content group is
//! ranked by instantiation tag and the rank is mixed into the digest:
//!
//! ```text
//! id = sha256(content_key + rank)
//! rank = index of tag in sorted(unique(tags sharing content_key))
//! ```
//!
//! A tag that shows up more than once (the same instance deployed twice)
//! is deduplicated before ranking, so it maps to a single identifier.

use std::collections::HashMap;

use crate::domain::value_objects::{EntityId, InstanceTag};

/// An entity that takes part in identity assignment
pub trait Identifiable {
    /// Tag issued when this instance was constructed
    fn instance_tag(&self) -> InstanceTag;

    /// Canonical serialization of every identity-relevant field
    ///
    /// Must use a fixed field order and sorted map keys.
    fn content_key(&self) -> String;
}

/// Assign identifiers to one universe of entities
///
/// Returns one identifier per input, in input order.
pub fn assign_ids<'a, T, I>(entities: I) -> Vec<EntityId>
where
    T: Identifiable + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let keyed: Vec<(String, InstanceTag)> = entities
        .into_iter()
        .map(|e| (e.content_key(), e.instance_tag()))
        .collect();

    let mut tags_by_key: HashMap<&str, Vec<InstanceTag>> = HashMap::new();
    for (key, tag) in &keyed {
        tags_by_key.entry(key.as_str()).or_default().push(*tag);
    }
    for tags in tags_by_key.values_mut() {
        tags.sort();
        tags.dedup();
    }

    keyed
        .iter()
        .map(|(key, tag)| {
            let rank = tags_by_key
                .get(key.as_str())
                .map(|tags| tags.binary_search(tag).unwrap_or_else(|i| i))
                .unwrap_or(0);
            EntityId::derive(key, rank)
        })
        .collect()
}
