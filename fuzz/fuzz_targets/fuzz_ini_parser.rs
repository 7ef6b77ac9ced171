#![no_main]
use config_diff::parsers::{ConfigParser, IniParser};
use libfuzzer_sys::fuzz_target;

/// Fuzz the INI config parser.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = IniParser.parse_str(s);
    }
});
