//! JSON reader and writer

use crate::error::{Error, Pos, Result};
use crate::format::Format;
use crate::value::Value;

/// Parse JSON text into a document tree
pub fn from_json_str(input: &str) -> Result<Value> {
    serde_json::from_str(input).map_err(|err| {
        let pos = Pos::new(err.line(), err.column());
        Error::parse(Format::Json, strip_position(&err.to_string())).at(pos)
    })
}

/// Serialize a document tree as JSON indented by two spaces
pub fn to_json_string(value: &Value) -> Result<String> {
    let mut output = serde_json::to_string_pretty(value)
        .map_err(|err| Error::structure(format!("cannot encode JSON: {err}")))?;
    output.push('\n');
    Ok(output)
}

/// serde_json appends " at line X column Y"; the position is kept separately.
fn strip_position(message: &str) -> &str {
    message
        .rfind(" at line ")
        .and_then(|idx| message.get(..idx))
        .unwrap_or(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::value::{Number, Object};

    #[test]
    fn test_parse_nested() -> Result<()> {
        let value = from_json_str(r#"{"b": [1, -2, 2.5], "a": {"x": null, "y": true}}"#)?;
        let obj = value.as_object().ok_or_else(|| Error::structure("not an object"))?;

        let keys: Vec<_> = obj.keys().collect();
        assert_eq!(keys, vec!["b", "a"]);

        let b = obj["b"].as_array().ok_or_else(|| Error::structure("not an array"))?;
        assert_eq!(b[0], Value::Number(Number::Int(1)));
        assert_eq!(b[1], Value::Number(Number::Int(-2)));
        assert_eq!(b[2], Value::Number(Number::Float(2.5)));
        Ok(())
    }

    #[test]
    fn test_malformed_json_reports_position() {
        let err = from_json_str("{\n  \"a\": }").err();
        let err = err.as_ref();
        assert_eq!(
            err.map(Error::kind),
            Some(&ErrorKind::Parse {
                format: Format::Json
            })
        );
        assert_eq!(err.and_then(Error::pos).map(|pos| pos.line), Some(2));
        assert!(err.is_some_and(|e| !e.message().contains("at line")));
    }

    #[test]
    fn test_trailing_data_is_rejected() {
        assert!(from_json_str("{} {}").is_err());
        assert!(from_json_str(r#"{"a": "unterminated}"#).is_err());
    }

    #[test]
    fn test_pretty_output() -> Result<()> {
        let mut inner = Object::new();
        inner.insert("x", 1i32);
        let mut obj = Object::new();
        obj.insert("z", Value::Null);
        obj.insert("a", inner);

        let output = to_json_string(&Value::Object(obj))?;
        assert_eq!(output, "{\n  \"z\": null,\n  \"a\": {\n    \"x\": 1\n  }\n}\n");
        Ok(())
    }

    #[test]
    fn test_non_finite_float_writes_null() -> Result<()> {
        let output = to_json_string(&Value::from(vec![Value::from(f64::NAN)]))?;
        assert_eq!(output, "[\n  null\n]\n");
        Ok(())
    }
}
