//! YAML config parser.

use super::traits::{ConfigParser, ParseError};
use crate::model::Value;
use indexmap::IndexMap;

pub struct YamlParser;

impl ConfigParser for YamlParser {
    fn parse_str(&self, content: &str) -> Result<Value, ParseError> {
        let data: serde_yaml::Value =
            serde_yaml::from_str(content).map_err(|e| ParseError::Syntax {
                format: "yaml",
                message: e.to_string(),
            })?;

        match data {
            // An empty document is a valid (empty) config.
            serde_yaml::Value::Null => Ok(Value::Object(IndexMap::new())),
            serde_yaml::Value::Mapping(_) => convert(data),
            other => Err(ParseError::InvalidRoot {
                format: "yaml",
                found: yaml_type_name(&other).to_string(),
            }),
        }
    }

    fn format_name(&self) -> &'static str {
        "yaml"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &[".yaml", ".yml"]
    }
}

fn convert(v: serde_yaml::Value) -> Result<Value, ParseError> {
    Ok(match v {
        serde_yaml::Value::Null => Value::Null,
        serde_yaml::Value::Bool(b) => Value::Bool(b),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Int(i)
            } else {
                Value::Float(n.as_f64().unwrap_or(f64::NAN))
            }
        }
        serde_yaml::Value::String(s) => Value::String(s),
        serde_yaml::Value::Sequence(items) => {
            Value::Array(items.into_iter().map(convert).collect::<Result<_, _>>()?)
        }
        serde_yaml::Value::Mapping(map) => {
            let mut object = IndexMap::with_capacity(map.len());
            for (key, value) in map {
                object.insert(key_to_string(key)?, convert(value)?);
            }
            Value::Object(object)
        }
        // Custom tags carry no meaning for comparison; use the inner value.
        serde_yaml::Value::Tagged(tagged) => convert(tagged.value)?,
    })
}

/// Mapping keys must be strings in the normalized model. Scalar keys are
/// stringified the way YAML renders them; container keys are rejected.
fn key_to_string(key: serde_yaml::Value) -> Result<String, ParseError> {
    match key {
        serde_yaml::Value::String(s) => Ok(s),
        serde_yaml::Value::Bool(b) => Ok(b.to_string()),
        serde_yaml::Value::Number(n) => Ok(n.to_string()),
        serde_yaml::Value::Null => Ok("null".to_string()),
        other => Err(ParseError::InvalidStructure {
            format: "yaml",
            message: format!("mapping key must be a scalar, got {}", yaml_type_name(&other)),
        }),
    }
}

const fn yaml_type_name(v: &serde_yaml::Value) -> &'static str {
    match v {
        serde_yaml::Value::Null => "null",
        serde_yaml::Value::Bool(_) => "bool",
        serde_yaml::Value::Number(_) => "number",
        serde_yaml::Value::String(_) => "string",
        serde_yaml::Value::Sequence(_) => "sequence",
        serde_yaml::Value::Mapping(_) => "mapping",
        serde_yaml::Value::Tagged(_) => "tagged value",
    }
}
