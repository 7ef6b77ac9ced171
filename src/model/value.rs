//! Normalized configuration value tree.
//!
//! Every format parser produces a [`Value`] tree and everything downstream
//! (diff engine, reporters) consumes it, so format differences end at the
//! parser boundary.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A format-agnostic configuration value.
///
/// Objects preserve the insertion order of the source document so that
/// output stays stable across runs, but equality between objects is
/// order-independent: two objects are equal iff they hold the same keys
/// with equal values. Array equality is positional.
///
/// Trees are finite and acyclic by construction — parsers build them from
/// text and nothing ever links one node into another tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Array(Vec<Value>),
    Object(IndexMap<String, Value>),
}

impl Value {
    /// Short lowercase name of the runtime type, used in `type_changed`
    /// reporting and error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
        }
    }

    /// Whether two values share the same variant (e.g. both arrays).
    ///
    /// This is the "same runtime type" test the diff engine uses before it
    /// decides between `modified` and `type_changed`.
    #[must_use]
    pub fn same_variant(&self, other: &Self) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }

    /// Whether this value is a container (array or object).
    #[must_use]
    pub const fn is_container(&self) -> bool {
        matches!(self, Self::Array(_) | Self::Object(_))
    }

    /// Borrow the object map, if this value is an object.
    #[must_use]
    pub const fn as_object(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Self::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Borrow the array elements, if this value is an array.
    #[must_use]
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Render the value as compact JSON for human-readable output.
    ///
    /// Serialization of a `Value` cannot fail (no non-string keys, no
    /// recursion limit below serde's), so this is infallible.
    #[must_use]
    pub fn render(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| format!("{self:?}"))
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Self::Int(i)
                } else {
                    // u64 beyond i64::MAX or a true float
                    Self::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(items) => {
                Self::Array(items.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(map) => {
                Self::Object(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            }
        }
    }
}
