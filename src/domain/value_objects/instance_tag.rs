//! Instantiation tag - distinguishes separately constructed entities

use std::fmt;

/// Marker issued once per construction (or duplication) of an entity
///
/// Two values carrying the same tag are the same logical instance, no matter
/// how many times they were copied around with `Clone`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InstanceTag(u64);

impl InstanceTag {
    pub(crate) fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for InstanceTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
