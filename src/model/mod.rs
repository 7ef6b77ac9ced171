//! Normalized data model shared by parsers, the diff engine, and reporters.

mod path;
mod value;

pub use path::{Path, PathSegment};
pub use value::Value;
