//! Parser trait definition and error types.

use crate::model::Value;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while turning a config file into a [`Value`] tree.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error reading {path}: {message}")]
    Io { path: String, message: String },

    #[error("invalid {format}: {message}")]
    Syntax { format: &'static str, message: String },

    #[error("expected a {format} mapping at the document root, got {found}")]
    InvalidRoot { format: &'static str, found: String },

    #[error("unsupported {format} structure: {message}")]
    InvalidStructure { format: &'static str, message: String },

    #[error("cannot detect format for '{path}': no file extension (supported extensions: {supported})")]
    NoExtension { path: String, supported: String },

    #[error("unsupported format or extension '{key}' (supported formats: {supported})")]
    UnknownFormat { key: String, supported: String },
}

/// Trait every config format parser implements.
///
/// Parsers declare a format name (`"json"`) and file extensions
/// (`[".json"]`), then implement [`parse_str`]. Every parser must return
/// [`Value::Object`] at the document root — the diff engine works on any
/// value, but a configuration document that isn't a mapping is almost
/// always an input mistake worth rejecting early.
///
/// [`parse_str`]: ConfigParser::parse_str
/// [`Value::Object`]: crate::model::Value::Object
pub trait ConfigParser {
    /// Parse a config file from a path.
    fn parse(&self, path: &Path) -> Result<Value, ParseError> {
        let content = std::fs::read_to_string(path).map_err(|e| ParseError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        self.parse_str(&content)
    }

    /// Parse a config document from string content.
    fn parse_str(&self, content: &str) -> Result<Value, ParseError>;

    /// Canonical format name, e.g. `"json"`.
    fn format_name(&self) -> &'static str;

    /// File extensions handled by this parser, with leading dot.
    fn extensions(&self) -> &'static [&'static str];
}
