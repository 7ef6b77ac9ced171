#![no_main]
use config_diff::parsers::{ConfigParser, YamlParser};
use libfuzzer_sys::fuzz_target;

/// Fuzz the YAML config parser, including scalar-key stringification
/// and tagged-value handling.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = YamlParser.parse_str(s);
    }
});
