#![no_main]

use blueprint::Document;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        if let Ok(document) = Document::from_json(content) {
            // Whatever parses must serialize and parse back identically
            let json = document.to_json().expect("serialize");
            let again = Document::from_json(&json).expect("reparse");
            assert_eq!(serde_json::to_value(&document).ok(), serde_json::to_value(&again).ok());
        }
    }
});
