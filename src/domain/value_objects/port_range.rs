//! Port range value object
//!
//! Connection rules always carry a range. A bare port boxes to the
//! single-port range `[port, port]`.

use std::fmt;
use std::ops::RangeInclusive;

use crate::error::{BlueprintError, BlueprintResult};

/// Inclusive range of TCP ports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PortRange {
    min: u16,
    max: u16,
}

impl PortRange {
    /// Build a validated range
    pub fn new(min: u16, max: u16) -> BlueprintResult<Self> {
        Self { min, max }.validated()
    }

    /// Single-port range
    pub fn single(port: u16) -> Self {
        Self {
            min: port,
            max: port,
        }
    }

    pub fn min(&self) -> u16 {
        self.min
    }

    pub fn max(&self) -> u16 {
        self.max
    }

    /// True when the range covers exactly one port
    pub fn is_single(&self) -> bool {
        self.min == self.max
    }

    /// Reject ranges whose bounds are inverted
    pub fn validated(self) -> BlueprintResult<Self> {
        if self.min > self.max {
            return Err(BlueprintError::InvalidPortRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(self)
    }

    /// Reject anything but a single port (public internet rules)
    pub fn require_single(self) -> BlueprintResult<Self> {
        let range = self.validated()?;
        if !range.is_single() {
            return Err(BlueprintError::PublicPortRange {
                min: range.min,
                max: range.max,
            });
        }
        Ok(range)
    }
}

impl From<u16> for PortRange {
    fn from(port: u16) -> Self {
        Self::single(port)
    }
}

impl From<(u16, u16)> for PortRange {
    fn from((min, max): (u16, u16)) -> Self {
        Self { min, max }
    }
}

impl From<[u16; 2]> for PortRange {
    fn from([min, max]: [u16; 2]) -> Self {
        Self { min, max }
    }
}

impl From<RangeInclusive<u16>> for PortRange {
    fn from(range: RangeInclusive<u16>) -> Self {
        Self {
            min: *range.start(),
            max: *range.end(),
        }
    }
}

impl fmt::Display for PortRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_single() {
            write!(f, "{}", self.min)
        } else {
            write!(f, "{}-{}", self.min, self.max)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_port_boxes_to_single_range() {
        assert_eq!(PortRange::from(80), PortRange::new(80, 80).unwrap());
        assert_eq!(PortRange::from(80), PortRange::from([80, 80]));
    }

    #[test]
    fn inclusive_range_converts() {
        let range = PortRange::from(1000..=65535);
        assert_eq!(range.min(), 1000);
        assert_eq!(range.max(), 65535);
        assert!(!range.is_single());
    }

    #[test]
    fn inverted_range_is_rejected() {
        let err = PortRange::new(90, 80).unwrap_err();
        assert!(matches!(err, BlueprintError::InvalidPortRange { min: 90, max: 80 }));
    }

    #[test]
    fn require_single_rejects_ranges() {
        assert!(PortRange::from(443).require_single().is_ok());
        let err = PortRange::from((80, 81)).require_single().unwrap_err();
        assert!(matches!(err, BlueprintError::PublicPortRange { .. }));
    }

    #[test]
    fn display_formats() {
        assert_eq!(PortRange::from(80).to_string(), "80");
        assert_eq!(PortRange::from((1, 9)).to_string(), "1-9");
    }
}
