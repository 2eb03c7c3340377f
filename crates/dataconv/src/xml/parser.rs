//! XML parser built on quick-xml's pull reader

use std::collections::HashMap;

use quick_xml::escape::unescape;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::{Error, Pos, Result};
use crate::format::Format;
use crate::xml::model::{is_valid_name, Content, Document, Element};
use crate::xml::Config;

/// XML parser
#[derive(Debug)]
pub struct Parser<'a> {
    input: &'a str,
    config: Config,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Self::with_config(input, Config::default())
    }

    pub const fn with_config(input: &'a str, config: Config) -> Self {
        Self { input, config }
    }

    /// Parse an XML document with exactly one root element
    pub fn parse(&mut self) -> Result<Document> {
        let mut reader = Reader::from_str(self.input);
        reader.trim_text(true);
        reader.check_end_names(true);

        let mut open: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;
        let mut entities: HashMap<String, String> = HashMap::new();

        loop {
            let offset = reader.buffer_position();
            let event = reader
                .read_event()
                .map_err(|err| self.error_at(reader.buffer_position(), err.to_string()))?;

            match event {
                Event::Start(start) => {
                    let element = self.start_element(&start, &open, root.as_ref(), offset)?;
                    open.push(element);
                }
                Event::Empty(start) => {
                    let element = self.start_element(&start, &open, root.as_ref(), offset)?;
                    Self::close_element(element, &mut open, &mut root);
                }
                Event::End(_) => {
                    let element = open
                        .pop()
                        .ok_or_else(|| self.error_at(offset, "unexpected closing tag"))?;
                    Self::close_element(element, &mut open, &mut root);
                }
                Event::Text(text) => {
                    let text = text
                        .unescape_with(|name| entities.get(name).map(String::as_str))
                        .map_err(|err| self.error_at(offset, err.to_string()))?;
                    self.push_text(&mut open, text.into_owned(), offset)?;
                }
                Event::CData(data) => {
                    let text = String::from_utf8(data.into_inner().into_owned())
                        .map_err(|err| self.error_at(offset, err.to_string()))?;
                    self.push_text(&mut open, text, offset)?;
                }
                Event::DocType(doctype) => {
                    let doctype = std::str::from_utf8(&doctype)
                        .map_err(|err| self.error_at(offset, err.to_string()))?;
                    entities = self.internal_entities(doctype, offset)?;
                }
                Event::Eof => break,
                Event::Decl(_) | Event::PI(_) | Event::Comment(_) => {}
            }
        }

        if let Some(element) = open.last() {
            return Err(self.error_at(
                self.input.len(),
                format!("unclosed tag <{}>", element.name),
            ));
        }

        root.map(|root| Document { root })
            .ok_or_else(|| self.error_at(self.input.len(), "no root element"))
    }

    fn start_element(
        &self,
        start: &BytesStart<'_>,
        open: &[Element],
        root: Option<&Element>,
        offset: usize,
    ) -> Result<Element> {
        let name = std::str::from_utf8(start.name().as_ref())
            .map_err(|err| self.error_at(offset, err.to_string()))?
            .to_string();

        if !is_valid_name(&name) {
            return Err(self.error_at(offset, format!("invalid element name <{name}>")));
        }

        if open.is_empty() && root.is_some() {
            return Err(self.error_at(offset, format!("multiple root elements: <{name}>")));
        }

        let max = usize::from(self.config.max_depth);
        if max != 0 && open.len() >= max {
            return Err(self.error_at(offset, format!("max depth exceeded: {max}")));
        }

        Ok(Element::new(name))
    }

    fn close_element(element: Element, open: &mut [Element], root: &mut Option<Element>) {
        match open.last_mut() {
            Some(parent) => parent.children.push(Content::Element(element)),
            None => *root = Some(element),
        }
    }

    fn push_text(&self, open: &mut [Element], text: String, offset: usize) -> Result<()> {
        match open.last_mut() {
            Some(parent) => {
                parent.children.push(Content::Text(text));
                Ok(())
            }
            None if text.trim().is_empty() => Ok(()),
            None => Err(self.error_at(offset, "text outside the root element")),
        }
    }

    /// Collect internal general entities declared in a DOCTYPE subset.
    ///
    /// Parameter and external entities are skipped, so references to them
    /// stay unresolved. The first declaration of a name wins.
    fn internal_entities(&self, doctype: &str, offset: usize) -> Result<HashMap<String, String>> {
        let mut entities = HashMap::new();
        for decl in doctype.split("<!ENTITY").skip(1) {
            let decl = decl.trim_start();
            if decl.starts_with('%') {
                continue;
            }
            let Some((name, rest)) = decl.split_once(char::is_whitespace) else {
                continue;
            };
            let mut chars = rest.trim_start().chars();
            let Some(quote @ ('"' | '\'')) = chars.next() else {
                continue;
            };
            let Some((value, _)) = chars.as_str().split_once(quote) else {
                let message = format!("unterminated entity declaration: {name}");
                return Err(self.error_at(offset, message));
            };
            let value = unescape(value).map_err(|err| self.error_at(offset, err.to_string()))?;
            entities
                .entry(name.to_string())
                .or_insert_with(|| value.into_owned());
        }
        Ok(entities)
    }

    fn error_at(&self, offset: usize, message: impl Into<String>) -> Error {
        Error::parse(Format::Xml, message).at(Pos::from_offset(self.input, offset))
    }
}
