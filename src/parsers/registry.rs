//! Parser registry and format detection.

use super::ini::IniParser;
use super::json::JsonParser;
use super::toml::TomlParser;
use super::traits::{ConfigParser, ParseError};
use super::yaml::YamlParser;
use std::path::Path;

/// Registry of available config parsers.
///
/// Lookups scan registrations in reverse, so a parser registered later
/// overrides an earlier one claiming the same format name or extension.
pub struct ParserRegistry {
    parsers: Vec<Box<dyn ConfigParser>>,
}

impl ParserRegistry {
    /// An empty registry with no parsers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            parsers: Vec::new(),
        }
    }

    /// A registry loaded with the built-in parsers.
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(JsonParser));
        registry.register(Box::new(YamlParser));
        registry.register(Box::new(TomlParser));
        registry.register(Box::new(IniParser));
        registry
    }

    pub fn register(&mut self, parser: Box<dyn ConfigParser>) {
        self.parsers.push(parser);
    }

    /// Look up a parser by canonical format name.
    pub fn by_format(&self, name: &str) -> Result<&dyn ConfigParser, ParseError> {
        let key = name.to_ascii_lowercase();
        self.parsers
            .iter()
            .rev()
            .find(|p| p.format_name() == key)
            .map(|p| p.as_ref())
            .ok_or_else(|| ParseError::UnknownFormat {
                key,
                supported: self.format_names().join(", "),
            })
    }

    /// Look up a parser by file extension (with or without leading dot).
    pub fn by_extension(&self, extension: &str) -> Result<&dyn ConfigParser, ParseError> {
        let key = if extension.starts_with('.') {
            extension.to_ascii_lowercase()
        } else {
            format!(".{}", extension.to_ascii_lowercase())
        };
        self.parsers
            .iter()
            .rev()
            .find(|p| p.extensions().contains(&key.as_str()))
            .map(|p| p.as_ref())
            .ok_or_else(|| ParseError::UnknownFormat {
                key,
                supported: self.extension_list().join(", "),
            })
    }

    /// Pick a parser for a file path from its extension.
    pub fn detect(&self, path: &Path) -> Result<&dyn ConfigParser, ParseError> {
        let extension =
            path.extension()
                .and_then(|e| e.to_str())
                .ok_or_else(|| ParseError::NoExtension {
                    path: path.display().to_string(),
                    supported: self.extension_list().join(", "),
                })?;
        self.by_extension(extension)
    }

    /// Format names in registration order, duplicates removed.
    #[must_use]
    pub fn format_names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = Vec::new();
        for parser in &self.parsers {
            if !names.contains(&parser.format_name()) {
                names.push(parser.format_name());
            }
        }
        names
    }

    fn extension_list(&self) -> Vec<&'static str> {
        let mut extensions: Vec<&'static str> = Vec::new();
        for parser in &self.parsers {
            for ext in parser.extensions() {
                if !extensions.contains(ext) {
                    extensions.push(ext);
                }
            }
        }
        extensions
    }
}

impl Default for ParserRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}
