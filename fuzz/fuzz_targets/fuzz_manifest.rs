#![no_main]

use std::path::Path;

use blueprint::manifest::{parse, ManifestFormat};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        for format in [ManifestFormat::Toml, ManifestFormat::Yaml, ManifestFormat::Json] {
            let _ = parse(content, format, Path::new("fuzz"));
        }
    }
});
