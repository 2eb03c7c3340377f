//! YAML reader and writer
//!
//! Anchors and aliases are expanded while reading, and `<<` merge keys are
//! applied. Explicit tags such as `!custom` have no place in the document
//! tree and are rejected.

use crate::error::{Error, Pos, Result};
use crate::format::Format;
use crate::value::Value;

/// Parse a single YAML document into a document tree
pub fn from_yaml_str(input: &str) -> Result<Value> {
    let mut document: serde_yaml::Value = serde_yaml::from_str(input).map_err(parse_error)?;
    document.apply_merge().map_err(parse_error)?;
    serde_yaml::from_value(document).map_err(parse_error)
}

fn parse_error(err: serde_yaml::Error) -> Error {
    let error = Error::parse(Format::Yaml, err.to_string());
    match err.location() {
        Some(location) => error.at(Pos::new(location.line(), location.column())),
        None => error,
    }
}

/// Serialize a document tree as block-style YAML
pub fn to_yaml_string(value: &Value) -> Result<String> {
    serde_yaml::to_string(value)
        .map_err(|err| Error::structure(format!("cannot encode YAML: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{Number, Object};

    #[test]
    fn test_native_scalar_resolution() -> Result<()> {
        let value = from_yaml_str("flag: true\ncount: 123\nratio: 0.5\nquoted: '123'\nnothing: ~\n")?;
        let obj = value.as_object().ok_or_else(|| Error::structure("not an object"))?;

        assert_eq!(obj["flag"], Value::Bool(true));
        assert_eq!(obj["count"], Value::Number(Number::Int(123)));
        assert_eq!(obj["ratio"], Value::Number(Number::Float(0.5)));
        assert_eq!(obj["quoted"], Value::from("123"));
        assert_eq!(obj["nothing"], Value::Null);
        Ok(())
    }

    #[test]
    fn test_aliases_are_expanded() -> Result<()> {
        let value = from_yaml_str("base: &shared\n  x: 1\ncopy: *shared\n")?;
        let obj = value.as_object().ok_or_else(|| Error::structure("not an object"))?;
        assert_eq!(obj["base"], obj["copy"]);
        Ok(())
    }

    #[test]
    fn test_merge_keys_are_applied() -> Result<()> {
        let value = from_yaml_str("b: &x {k: 1}\nc:\n  <<: *x\n")?;
        let obj = value.as_object().ok_or_else(|| Error::structure("not an object"))?;
        assert_eq!(obj["c"], obj["b"]);
        assert!(obj["c"].as_object().is_some_and(|c| c.get("<<").is_none()));
        Ok(())
    }

    #[test]
    fn test_merge_keeps_local_keys() -> Result<()> {
        let input = "base: &base\n  x: 1\n  y: 2\nextra: &extra\n  z: 3\nderived:\n  <<: [*base, *extra]\n  y: 20\n";
        let value = from_yaml_str(input)?;
        let obj = value.as_object().ok_or_else(|| Error::structure("not an object"))?;
        let derived = obj["derived"]
            .as_object()
            .ok_or_else(|| Error::structure("not an object"))?;

        assert_eq!(derived.len(), 3);
        assert_eq!(derived["x"], Value::Number(Number::Int(1)));
        assert_eq!(derived["y"], Value::Number(Number::Int(20)));
        assert_eq!(derived["z"], Value::Number(Number::Int(3)));
        Ok(())
    }

    #[test]
    fn test_scalar_keys_become_strings() -> Result<()> {
        let value = from_yaml_str("1: one\ntrue: yes\n")?;
        let obj = value.as_object().ok_or_else(|| Error::structure("not an object"))?;
        let keys: Vec<_> = obj.keys().collect();
        assert_eq!(keys, vec!["1", "true"]);
        Ok(())
    }

    #[test]
    fn test_rejected_inputs() {
        assert!(from_yaml_str("value: !custom 1\n").is_err_and(|e| e.is_parse()));
        assert!(from_yaml_str("? [a, b]\n: 1\n").is_err_and(|e| e.is_parse()));
        assert!(from_yaml_str("a: [1, 2\n").is_err_and(|e| e.is_parse()));
        assert!(from_yaml_str("a: 1\n---\nb: 2\n").is_err_and(|e| e.is_parse()));
        assert!(from_yaml_str("a:\n  <<: 1\n").is_err_and(|e| e.is_parse()));
    }

    #[test]
    fn test_block_output() -> Result<()> {
        let mut inner = Object::new();
        inner.insert("x", 1i32);
        let mut obj = Object::new();
        obj.insert("name", "test");
        obj.insert("inner", inner);

        let output = to_yaml_string(&Value::Object(obj))?;
        assert_eq!(output, "name: test\ninner:\n  x: 1\n");
        Ok(())
    }
}
