//! JSON config parser.

use super::traits::{ConfigParser, ParseError};
use crate::model::Value;

pub struct JsonParser;

impl ConfigParser for JsonParser {
    fn parse_str(&self, content: &str) -> Result<Value, ParseError> {
        let data: serde_json::Value =
            serde_json::from_str(content).map_err(|e| ParseError::Syntax {
                format: "json",
                message: e.to_string(),
            })?;

        match data {
            serde_json::Value::Object(_) => Ok(Value::from(data)),
            other => Err(ParseError::InvalidRoot {
                format: "json",
                found: json_type_name(&other).to_string(),
            }),
        }
    }

    fn format_name(&self) -> &'static str {
        "json"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &[".json"]
    }
}

const fn json_type_name(v: &serde_json::Value) -> &'static str {
    match v {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
