#![no_main]
use config_diff::parsers::{ConfigParser, JsonParser};
use config_diff::{DiffEngine, DiffOptions};
use libfuzzer_sys::fuzz_target;

/// Fuzz the diff engine with two parsed documents.
///
/// Splits the input in half and parses each side as JSON; whenever both
/// halves parse, both comparison modes run over the result. The engine
/// must never panic, only return a result or a depth error.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let mid = s.len() / 2;
        let (Some(left), Some(right)) = (s.get(..mid), s.get(mid..)) else {
            return;
        };
        if let (Ok(before), Ok(after)) = (JsonParser.parse_str(left), JsonParser.parse_str(right))
        {
            let _ = DiffEngine::new().compare(&before, &after);
            let _ = DiffEngine::with_options(DiffOptions::unordered()).compare(&before, &after);
        }
    }
});
