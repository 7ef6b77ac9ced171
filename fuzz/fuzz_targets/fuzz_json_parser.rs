#![no_main]
use config_diff::parsers::{ConfigParser, JsonParser};
use libfuzzer_sys::fuzz_target;

const MAX_WRAPPED_INPUT_LEN: usize = 10_000;

/// Fuzz the JSON config parser.
///
/// Also wraps input as an object value so fragments that are not valid
/// documents on their own still reach the normalization code.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = JsonParser.parse_str(s);

        if s.len() < MAX_WRAPPED_INPUT_LEN {
            let wrapped = format!(r#"{{"value": {s}}}"#);
            let _ = JsonParser.parse_str(&wrapped);
        }
    }
});
