//! Pretty-printing XML writer

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::error::{Error, ErrorKind, Result};
use crate::xml::model::{Content, Document, Element};
use crate::xml::Config;

/// Serialize a document: optional declaration, one element per line,
/// leaf text inline, empty elements self-closed.
pub fn write_document(document: &Document, config: &Config) -> Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', config.indent);

    if config.declaration {
        write_event(
            &mut writer,
            Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)),
        )?;
    }
    write_element(&mut writer, &document.root)?;

    let mut xml = String::from_utf8(writer.into_inner())
        .map_err(|err| Error::with_message(ErrorKind::Io, err.to_string()))?;
    xml.push('\n');
    Ok(xml)
}

fn write_element(writer: &mut Writer<Vec<u8>>, element: &Element) -> Result<()> {
    let name = element.name.as_str();
    if element.children.is_empty() {
        return write_event(writer, Event::Empty(BytesStart::new(name)));
    }

    write_event(writer, Event::Start(BytesStart::new(name)))?;
    for child in &element.children {
        match child {
            Content::Element(child) => write_element(writer, child)?,
            Content::Text(text) => write_event(writer, Event::Text(BytesText::new(text)))?,
        }
    }
    write_event(writer, Event::End(BytesEnd::new(name)))
}

fn write_event(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<()> {
    writer
        .write_event(event)
        .map_err(|err| Error::with_message(ErrorKind::Io, format!("cannot write XML: {err}")))
}
