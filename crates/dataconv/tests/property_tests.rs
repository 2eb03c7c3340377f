//! Property-based round-trip tests
//!
//! 1. JSON and YAML reproduce any tree they wrote
//! 2. XML reproduces string-leaf trees whose sequences have at least two
//!    non-sequence items, the shapes the repeated-tag rule can express

use proptest::prelude::*;

use dataconv::{
    from_json_str, from_xml_str, from_yaml_str, to_json_string, to_xml_string, to_yaml_string,
    Number, Object, Value,
};

/// Floats with exact short decimal forms
fn arb_float() -> impl Strategy<Value = f64> {
    (-4000i32..4000).prop_map(|n| f64::from(n) / 4.0)
}

fn arb_key() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,8}"
}

fn arb_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| Value::Number(Number::Int(n))),
        arb_float().prop_map(|n| Value::Number(Number::Float(n))),
        "[a-zA-Z0-9 _.-]{0,12}".prop_map(Value::String),
    ];

    leaf.prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::from),
            prop::collection::vec((arb_key(), inner), 0..6)
                .prop_map(|entries| Value::Object(entries.into_iter().collect::<Object>())),
        ]
    })
}

fn arb_xml_value() -> impl Strategy<Value = Value> {
    let leaf = "[a-z0-9]{1,8}".prop_map(Value::String);

    leaf.prop_recursive(3, 32, 4, |inner| {
        let slot = prop_oneof![
            inner.clone(),
            prop::collection::vec(inner, 2..4).prop_map(Value::from),
        ];
        prop::collection::vec((arb_key(), slot), 1..4)
            .prop_map(|entries| Value::Object(entries.into_iter().collect::<Object>()))
    })
}

fn rooted(value: Value) -> Value {
    let mut root = Object::new();
    root.insert("root", value);
    Value::Object(root)
}

proptest! {
    #[test]
    fn json_roundtrip(value in arb_value()) {
        let text = to_json_string(&value).map_err(|e| TestCaseError::fail(e.to_string()))?;
        let parsed = from_json_str(&text).map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(parsed, value);
    }

    #[test]
    fn yaml_roundtrip(value in arb_value()) {
        let text = to_yaml_string(&value).map_err(|e| TestCaseError::fail(e.to_string()))?;
        let parsed = from_yaml_str(&text).map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(parsed, value);
    }

    #[test]
    fn xml_roundtrip(value in arb_xml_value()) {
        let tree = rooted(value);
        let text = to_xml_string(&tree).map_err(|e| TestCaseError::fail(e.to_string()))?;
        let parsed = from_xml_str(&text).map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(parsed, tree);
    }

    #[test]
    fn xml_reader_never_panics(input in "\\PC{0,64}") {
        let _ = from_xml_str(&input);
    }
}
