#![no_main]

use libfuzzer_sys::fuzz_target;
use mandex::index::{parse_filename, Section};

fuzz_target!(|data: &str| {
    // Parsing must never panic, and the name always stops before the first paren
    if let Ok(parsed) = parse_filename(data) {
        assert!(!parsed.name.contains('('));
        let _ = Section::classify(&parsed.section_code);
    }
});
