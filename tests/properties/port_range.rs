//! Property tests for port range validation.

use proptest::prelude::*;

use blueprint::{Context, Endpoint, ErrorKind, PortRange};

proptest! {
    /// PROPERTY: A range is valid exactly when its bounds are ordered.
    #[test]
    fn property_port_range_validation(min in any::<u16>(), max in any::<u16>()) {
        match PortRange::new(min, max) {
            Ok(range) => {
                prop_assert!(min <= max);
                prop_assert_eq!(range.min(), min);
                prop_assert_eq!(range.max(), max);
            }
            Err(err) => {
                prop_assert!(min > max);
                prop_assert_eq!(err.kind(), ErrorKind::Usage);
            }
        }
    }

    /// PROPERTY: Public traffic is accepted only on single ports.
    #[test]
    fn property_public_requires_single_port(min in any::<u16>(), max in any::<u16>()) {
        let ctx = Context::new();
        let mut web = ctx.service("web", vec![]);
        let result = web.allow_from(Endpoint::Public, (min, max));
        prop_assert_eq!(result.is_ok(), min == max);
        prop_assert_eq!(web.incoming_public().len(), usize::from(min == max));
    }
}
