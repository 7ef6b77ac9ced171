//! Config document parsers.
//!
//! Each supported format gets a [`ConfigParser`] implementation that
//! normalizes its documents into the shared [`Value`] model. The
//! [`ParserRegistry`] maps format names and file extensions to parsers.
//!
//! [`Value`]: crate::model::Value

mod ini;
mod json;
mod registry;
mod toml;
mod traits;
mod yaml;

pub use ini::IniParser;
pub use json::JsonParser;
pub use registry::ParserRegistry;
pub use toml::TomlParser;
pub use traits::{ConfigParser, ParseError};
pub use yaml::YamlParser;

use crate::model::Value;
use std::path::Path;

/// Parse a config file, detecting its format from the file extension.
pub fn parse_config(path: &Path) -> Result<Value, ParseError> {
    let registry = ParserRegistry::with_builtins();
    registry.detect(path)?.parse(path)
}
