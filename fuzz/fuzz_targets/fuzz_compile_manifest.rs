#![no_main]

use std::path::Path;

use blueprint::application::{CompileOptions, CompileUseCase};
use blueprint::infrastructure::StaticKeySource;
use blueprint::manifest::{parse, ManifestFormat};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(content) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(manifest) = parse(content, ManifestFormat::Json, Path::new("fuzz.json")) else {
        return;
    };
    // Keep replica explosions out of the corpus
    let too_big = manifest.machines.iter().any(|m| m.count > 64)
        || manifest
            .services
            .iter()
            .flat_map(|s| &s.containers)
            .any(|c| c.replicas > 64);
    if too_big {
        return;
    }

    // Any outcome is fine as long as it is an error value, not a panic
    let _ = CompileUseCase::new(StaticKeySource::new()).compile(
        &manifest,
        Path::new("fuzz.json"),
        &CompileOptions::default(),
    );
});
