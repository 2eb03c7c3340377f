//! XML reader and writer
//!
//! XML has no native sequences. Reading merges sibling elements that share
//! a tag into an array; writing emits one sibling element per array item.

pub mod bridge;
pub mod model;
pub mod parser;
pub mod writer;

pub use model::{Content, Document, Element};
pub use parser::Parser;

use crate::error::Result;
use crate::value::Value;

/// XML reading and writing options
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Maximum element nesting depth when reading (0 means unlimited)
    pub max_depth: u16,
    /// Emit `<?xml version="1.0" encoding="UTF-8"?>` before the root
    pub declaration: bool,
    /// Spaces per nesting level when writing
    pub indent: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_depth: 128,
            declaration: true,
            indent: 2,
        }
    }
}

impl Config {
    pub const fn new(max_depth: u16, declaration: bool, indent: usize) -> Self {
        Self {
            max_depth,
            declaration,
            indent,
        }
    }

    /// Default output settings with no depth limit
    pub const fn unlimited() -> Self {
        Self {
            max_depth: 0,
            declaration: true,
            indent: 2,
        }
    }
}

/// Parse XML into a document tree of the form `{ root_tag: root_value }`
pub fn from_xml_str(input: &str) -> Result<Value> {
    from_xml_str_with_config(input, Config::default())
}

pub fn from_xml_str_with_config(input: &str, config: Config) -> Result<Value> {
    let document = Parser::with_config(input, config).parse()?;
    Ok(bridge::document_to_value(&document))
}

/// Serialize a single-root document tree as pretty-printed XML
pub fn to_xml_string(value: &Value) -> Result<String> {
    to_xml_string_with_config(value, &Config::default())
}

pub fn to_xml_string_with_config(value: &Value, config: &Config) -> Result<String> {
    let document = bridge::value_to_document(value)?;
    writer::write_document(&document, config)
}
