//! Resource range value object (machine CPU count, RAM size)

use serde::{Deserialize, Serialize};

/// Acceptable range for a machine attribute
///
/// A zero `max` means "no upper bound".
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ResourceRange {
    pub min: f64,
    pub max: f64,
}

impl ResourceRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Box a single value into `[value, value]`
    pub fn exact(value: f64) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    /// True if `x` lies within the range
    pub fn accepts(&self, x: f64) -> bool {
        self.min <= x && (self.max == 0.0 || x <= self.max)
    }
}

impl From<f64> for ResourceRange {
    fn from(value: f64) -> Self {
        Self::exact(value)
    }
}

impl From<(f64, f64)> for ResourceRange {
    fn from((min, max): (f64, f64)) -> Self {
        Self::new(min, max)
    }
}
