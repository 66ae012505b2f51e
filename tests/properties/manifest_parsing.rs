//! Property tests for manifest parsing.

use std::path::Path;

use proptest::prelude::*;

use blueprint::manifest::{parse, ManifestFormat};
use blueprint::ErrorKind;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Arbitrary text never panics the parsers; failures are input errors.
    #[test]
    fn property_parsing_never_panics(content in "\\PC{0,200}") {
        for format in [ManifestFormat::Toml, ManifestFormat::Yaml, ManifestFormat::Json] {
            if let Err(err) = parse(&content, format, Path::new("fuzz")) {
                prop_assert_eq!(err.kind(), ErrorKind::Input);
            }
        }
    }
}
