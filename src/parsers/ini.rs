//! INI config parser.

use super::traits::{ConfigParser, ParseError};
use crate::model::Value;
use configparser::ini::Ini;
use indexmap::IndexMap;

/// Parses INI files into a two-level tree: sections become top-level
/// objects, properties become string values. INI has no type system, so
/// every value stays a string; bare keys with no `=` become null. Section
/// and property names are lowercased, matching the usual INI convention
/// of case-insensitive lookups.
pub struct IniParser;

impl ConfigParser for IniParser {
    fn parse_str(&self, content: &str) -> Result<Value, ParseError> {
        let mut ini = Ini::new();
        let sections = ini
            .read(content.to_string())
            .map_err(|message| ParseError::Syntax {
                format: "ini",
                message,
            })?;

        let mut root = IndexMap::with_capacity(sections.len());
        for (section, properties) in sections {
            let mut object = IndexMap::with_capacity(properties.len());
            for (key, value) in properties {
                object.insert(key, value.map_or(Value::Null, Value::String));
            }
            root.insert(section, Value::Object(object));
        }
        Ok(Value::Object(root))
    }

    fn format_name(&self) -> &'static str {
        "ini"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &[".ini", ".cfg", ".conf"]
    }
}
