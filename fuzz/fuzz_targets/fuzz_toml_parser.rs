#![no_main]
use config_diff::parsers::{ConfigParser, TomlParser};
use libfuzzer_sys::fuzz_target;

/// Fuzz the TOML config parser.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = TomlParser.parse_str(s);
    }
});
