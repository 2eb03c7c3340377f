//! dataconv - convert structured data between JSON, YAML and XML
//!
//! Every input is parsed into one generic document tree ([`Value`]) and
//! re-emitted in the target format.
//!
//! # Quick Start
//!
//! ```
//! use dataconv::{convert, Format};
//! # fn main() -> Result<(), dataconv::Error> {
//! let xml = "<root><item>1</item><item>2</item></root>";
//! let json = convert(xml, Format::Xml, Format::Json)?;
//! assert!(json.contains(r#""item": ["#));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub use error::{Error, ErrorKind, Pos, Result};

pub mod format;
pub use format::{detect_format_from_path, Format};

pub mod value;
pub use value::{Array, Number, Object, Value};

pub mod convert;
pub use convert::{
    convert, convert_file, convert_with_options, read_file, write_file, ConvertOptions,
};

pub mod json;
pub mod xml;
pub mod yaml;
pub use json::{from_json_str, to_json_string};
pub use xml::{from_xml_str, to_xml_string, Config as XmlConfig};
pub use yaml::{from_yaml_str, to_yaml_string};
