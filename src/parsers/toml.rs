//! TOML config parser.

use super::traits::{ConfigParser, ParseError};
use crate::model::Value;

pub struct TomlParser;

impl ConfigParser for TomlParser {
    fn parse_str(&self, content: &str) -> Result<Value, ParseError> {
        // A TOML document root is always a table.
        let table: toml::Table = content.parse().map_err(|e: toml::de::Error| {
            ParseError::Syntax {
                format: "toml",
                message: e.to_string(),
            }
        })?;
        Ok(convert(toml::Value::Table(table)))
    }

    fn format_name(&self) -> &'static str {
        "toml"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &[".toml"]
    }
}

fn convert(v: toml::Value) -> Value {
    match v {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::Int(i),
        toml::Value::Float(f) => Value::Float(f),
        toml::Value::Boolean(b) => Value::Bool(b),
        // Datetimes have no Value variant; their canonical text form
        // compares exactly and round-trips through every report format.
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(items) => Value::Array(items.into_iter().map(convert).collect()),
        toml::Value::Table(table) => {
            Value::Object(table.into_iter().map(|(k, v)| (k, convert(v))).collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_tables_and_arrays() {
        let value = TomlParser
            .parse_str(
                r#"
title = "demo"

[server]
port = 8080
ratio = 0.5
enabled = true

[[server.hosts]]
name = "a"
"#,
            )
            .unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj["title"], Value::String("demo".into()));
        let server = obj["server"].as_object().unwrap();
        assert_eq!(server["port"], Value::Int(8080));
        assert_eq!(server["ratio"], Value::Float(0.5));
        assert_eq!(server["enabled"], Value::Bool(true));
        assert_eq!(server["hosts"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_datetime_becomes_string() {
        let value = TomlParser
            .parse_str("created = 2024-01-15T10:00:00Z\n")
            .unwrap();
        assert_eq!(
            value.as_object().unwrap()["created"],
            Value::String("2024-01-15T10:00:00Z".into())
        );
    }

    #[test]
    fn test_preserves_key_order() {
        let value = TomlParser
            .parse_str("zeta = 1\nalpha = 2\nmid = 3\n")
            .unwrap();
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_rejects_malformed_toml() {
        let err = TomlParser.parse_str("key = ").unwrap_err();
        assert!(matches!(err, ParseError::Syntax { format: "toml", .. }));
    }
}
