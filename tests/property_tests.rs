//! Property-based tests for value normalization and the text round trip.

use armaconfig::normalize::normalize_scalar;
use armaconfig::{from_str, to_string, to_value, Document, Member, Number, PropertyNode, Value};
use proptest::prelude::*;

fn identifier() -> impl Strategy<Value = String> {
    "[a-zA-Z_][a-zA-Z0-9_]{0,10}".prop_filter("reserved word", |s| s != "class")
}

/// Text that normalizes to itself: anything that does not read as a number.
fn text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 _\";,{}.-]{0,16}".prop_filter("numeric text", |s| s.trim().parse::<f64>().is_err())
}

fn fractional() -> impl Strategy<Value = f64> {
    (-1.0e6f64..1.0e6).prop_filter("whole number", |f| f.fract() != 0.0)
}

fn config_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        any::<i64>().prop_map(Value::from),
        fractional().prop_map(Value::from),
        text().prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop::collection::vec(inner, 0..4).prop_map(Value::Array)
    })
}

fn round_trip(document: &Document) -> Result<Document, TestCaseError> {
    let text = to_string(document).map_err(|e| TestCaseError::fail(e.to_string()))?;
    from_str(&text).map_err(|e| TestCaseError::fail(format!("{} in {:?}", e, text)))
}

proptest! {
    #[test]
    fn prop_integer_text_normalizes_exactly(n in any::<i64>()) {
        prop_assert_eq!(normalize_scalar(&n.to_string()), Value::Number(Number::Integer(n)));
        prop_assert_eq!(normalize_scalar(&format!("\"{}\"", n)), Value::Number(Number::Integer(n)));
    }

    #[test]
    fn prop_whole_float_text_is_integer(n in -1_000_000i64..1_000_000) {
        prop_assert_eq!(normalize_scalar(&format!("{}.0", n)), Value::from(n));
    }

    #[test]
    fn prop_fractional_text_is_float(f in fractional()) {
        prop_assert_eq!(normalize_scalar(&f.to_string()), Value::Number(Number::Float(f)));
    }

    #[test]
    fn prop_plain_text_survives_normalization(s in text()) {
        prop_assert_eq!(normalize_scalar(&format!("\"{}\"", s)), Value::String(s.clone()));
    }

    #[test]
    fn prop_property_value_round_trip(name in identifier(), value in config_value()) {
        let document = Document::new(vec![Member::Property(PropertyNode::new(name.clone(), value.clone()))]);
        let parsed = round_trip(&document)?;
        prop_assert_eq!(parsed.lookup(&name).unwrap().value(), Some(&value));
    }

    #[test]
    fn prop_structural_encoding_stable(
        properties in prop::collection::vec((identifier(), config_value()), 0..8)
    ) {
        let source: String = properties
            .iter()
            .map(|(name, value)| format!("class C_{} {{ {} = {}; }};\n", name, name, value))
            .collect();
        let document = from_str(&source).unwrap();
        let parsed = round_trip(&document)?;
        prop_assert_eq!(to_value(&document), to_value(&parsed));
    }

    #[test]
    fn prop_arbitrary_input_never_panics(s in "\\PC{0,64}") {
        let _ = from_str(&s);
    }
}
