//! Format dispatch and file-level conversion

use std::fs;
use std::path::Path;

use tracing::{debug, info, instrument};

use crate::error::{Error, Result};
use crate::format::Format;
use crate::json::{from_json_str, to_json_string};
use crate::value::Value;
use crate::xml::{self, from_xml_str_with_config, to_xml_string_with_config};
use crate::yaml::{from_yaml_str, to_yaml_string};

/// Conversion options per format
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    pub xml: xml::Config,
}

impl Format {
    /// Parse text in this format into a document tree
    pub fn decode(self, input: &str, options: &ConvertOptions) -> Result<Value> {
        match self {
            Self::Json => from_json_str(input),
            Self::Yaml => from_yaml_str(input),
            Self::Xml => from_xml_str_with_config(input, options.xml),
        }
    }

    /// Serialize a document tree as text in this format
    pub fn encode(self, value: &Value, options: &ConvertOptions) -> Result<String> {
        match self {
            Self::Json => to_json_string(value),
            Self::Yaml => to_yaml_string(value),
            Self::Xml => to_xml_string_with_config(value, &options.xml),
        }
    }
}

/// Convert text between supported formats
pub fn convert(input: &str, from: Format, to: Format) -> Result<String> {
    convert_with_options(input, from, to, &ConvertOptions::default())
}

/// Convert text between supported formats with options.
///
/// Input always goes through the document tree, so same-format conversion
/// normalizes layout.
pub fn convert_with_options(
    input: &str,
    from: Format,
    to: Format,
    options: &ConvertOptions,
) -> Result<String> {
    let value = from.decode(input, options)?;
    debug!(%from, %to, "decoded input");
    to.encode(&value, options)
}

/// Read and parse a file, choosing the reader by extension
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn read_file(path: impl AsRef<Path>, options: &ConvertOptions) -> Result<Value> {
    let path = path.as_ref();
    let format = Format::from_path(path)?;
    let content = read_text(path, format)?;
    format.decode(&content, options)
}

/// Serialize and write a tree, choosing the writer by extension.
///
/// Nothing is written unless encoding succeeds.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn write_file(path: impl AsRef<Path>, value: &Value, options: &ConvertOptions) -> Result<()> {
    let path = path.as_ref();
    let format = Format::from_path(path)?;
    let output = format.encode(value, options)?;
    fs::write(path, output).map_err(|err| Error::io(path, &err))
}

/// Convert `input` into `output`, inferring both formats from extensions.
///
/// Both extensions are checked before any file is touched.
#[instrument(skip_all, fields(input = %input.as_ref().display(), output = %output.as_ref().display()))]
pub fn convert_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    options: &ConvertOptions,
) -> Result<()> {
    let (input, output) = (input.as_ref(), output.as_ref());
    let from = Format::from_path(input)?;
    let to = Format::from_path(output)?;

    let content = read_text(input, from)?;
    let rendered = convert_with_options(&content, from, to, options)?;
    fs::write(output, rendered).map_err(|err| Error::io(output, &err))?;

    info!(%from, %to, "conversion complete");
    Ok(())
}

/// Read a file as UTF-8; invalid encoding is a parse failure of `format`
fn read_text(path: &Path, format: Format) -> Result<String> {
    let bytes = fs::read(path).map_err(|err| Error::io(path, &err))?;
    debug!(bytes = bytes.len(), "read input");
    String::from_utf8(bytes)
        .map_err(|err| Error::parse(format, format!("input is not valid UTF-8: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_json_to_yaml() -> Result<()> {
        let output = convert(r#"{"name":"test","value":42}"#, Format::Json, Format::Yaml)?;
        assert_eq!(output, "name: test\nvalue: 42\n");
        Ok(())
    }

    #[test]
    fn test_yaml_to_xml() -> Result<()> {
        let output = convert("root:\n  tags:\n    - a\n    - b\n", Format::Yaml, Format::Xml)?;
        assert_eq!(
            output,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <root>\n  <tags>a</tags>\n  <tags>b</tags>\n</root>\n"
        );
        Ok(())
    }

    #[test]
    fn test_same_format_normalizes() -> Result<()> {
        let output = convert(r#"{ "a" :1 }"#, Format::Json, Format::Json)?;
        assert_eq!(output, "{\n  \"a\": 1\n}\n");
        Ok(())
    }

    #[test]
    fn test_options_reach_xml_writer() -> Result<()> {
        let options = ConvertOptions {
            xml: xml::Config {
                declaration: false,
                ..xml::Config::default()
            },
        };
        let output = convert_with_options(r#"{"r": 1}"#, Format::Json, Format::Xml, &options)?;
        assert_eq!(output, "<r>1</r>\n");
        Ok(())
    }

    #[test]
    fn test_large_float_to_xml_uses_exponent() -> Result<()> {
        let output = convert(r#"{"r": 1e300}"#, Format::Json, Format::Xml)?;
        assert!(output.ends_with("<r>1e300</r>\n"));
        Ok(())
    }

    #[test]
    fn test_multi_root_to_xml_is_structure_error() {
        let err = convert(r#"{"a": 1, "b": 2}"#, Format::Json, Format::Xml).err();
        assert_eq!(err.map(|e| e.kind().clone()), Some(ErrorKind::Structure));
    }
}
