//! Mapping between XML element structure and the document tree
//!
//! Reading: a leaf element becomes its trimmed text (`Null` when empty);
//! an element with children becomes an object keyed by child tag, where
//! repeated tags collect into a flat array in document order.
//!
//! Writing: the tree must be `{ root_tag: value }`. Object entries become
//! child elements, array items become sibling elements sharing the key's
//! tag, and scalars become element text.

use crate::error::{Error, Result};
use crate::value::{Array, Object, Value};
use crate::xml::model::{is_valid_name, Content, Document, Element};

/// Wrap the root element as `{ root_tag: root_value }`
pub fn document_to_value(document: &Document) -> Value {
    let mut root = Object::new();
    root.insert(document.root.name.as_str(), element_to_value(&document.root));
    Value::Object(root)
}

fn element_to_value(element: &Element) -> Value {
    let mut children = element.child_elements().peekable();
    if children.peek().is_none() {
        let text = element.text();
        let text = text.trim();
        return if text.is_empty() {
            Value::Null
        } else {
            Value::String(text.to_string())
        };
    }

    let mut obj = Object::new();
    for child in children {
        let value = element_to_value(child);
        match obj.get_mut(&child.name) {
            Some(Value::Array(items)) => items.push(value),
            Some(existing) => {
                let first = std::mem::take(existing);
                *existing = Value::Array(Array::from(vec![first, value]));
            }
            None => {
                obj.insert(child.name.as_str(), value);
            }
        }
    }
    Value::Object(obj)
}

/// Build the element structure for a single-root tree
pub fn value_to_document(value: &Value) -> Result<Document> {
    let Value::Object(obj) = value else {
        return Err(Error::structure(
            "XML output needs a mapping with exactly one root key",
        ));
    };
    let (name, root_value) = obj.single_entry().ok_or_else(|| {
        Error::structure(format!(
            "XML output needs exactly one root key, found {}",
            obj.len()
        ))
    })?;
    let root = value_to_element(name, root_value)?;
    Ok(Document { root })
}

fn value_to_element(name: &str, value: &Value) -> Result<Element> {
    if !is_valid_name(name) {
        return Err(Error::structure(format!(
            "`{name}` is not a valid XML element name"
        )));
    }

    let mut element = Element::new(name);
    match value {
        Value::Object(obj) => {
            for (key, child) in obj {
                push_elements(&mut element.children, key, child)?;
            }
        }
        Value::Array(_) => {
            return Err(Error::structure(format!(
                "a sequence cannot be the single element <{name}>"
            )));
        }
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {
            if let Some(text) = value.scalar_text().filter(|text| !text.is_empty()) {
                element.children.push(Content::Text(text));
            }
        }
    }
    Ok(element)
}

/// One element per value; arrays (nested ones too) fan out into siblings
fn push_elements(children: &mut Vec<Content>, name: &str, value: &Value) -> Result<()> {
    match value {
        Value::Array(items) => {
            for item in items {
                push_elements(children, name, item)?;
            }
        }
        _ => children.push(Content::Element(value_to_element(name, value)?)),
    }
    Ok(())
}
