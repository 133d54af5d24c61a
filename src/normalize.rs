//! Conversion of raw value text collected by the parser into typed [`Value`]s.
//!
//! Scalars are trimmed and lose one pair of wrapping quotes. The remaining
//! text becomes a number when it parses as a finite float (an integer when it
//! has no fractional part) and stays text otherwise. Arrays are normalized
//! element by element after dropping blank text elements, which is how
//! `{1,2,}` or `{1,,2}` end up without empty entries.
//!
//! ```rust
//! use armaconfig::normalize::{normalize_scalar, RawValue};
//! use armaconfig::{Number, Value};
//!
//! assert_eq!(normalize_scalar(" 3.0 "), Value::Number(Number::Integer(3)));
//! assert_eq!(normalize_scalar("\"a\"b\""), Value::from("a\"b"));
//!
//! let raw = RawValue::List(vec![RawValue::text("1"), RawValue::text(" "), RawValue::text("x")]);
//! assert_eq!(raw.normalize(), Value::Array(vec![Value::from(1), Value::from("x")]));
//! ```

use crate::{Number, Value};

/// Unprocessed value text as collected between terminators.
#[derive(Clone, Debug, PartialEq)]
pub enum RawValue {
    Text(String),
    List(Vec<RawValue>),
}

impl RawValue {
    pub fn text(s: impl Into<String>) -> Self {
        RawValue::Text(s.into())
    }

    fn is_blank(&self) -> bool {
        matches!(self, RawValue::Text(s) if s.trim().is_empty())
    }

    /// Normalizes this fragment into a typed value.
    #[must_use]
    pub fn normalize(&self) -> Value {
        match self {
            RawValue::Text(text) => normalize_scalar(text),
            RawValue::List(items) => Value::Array(
                items
                    .iter()
                    .filter(|item| !item.is_blank())
                    .map(RawValue::normalize)
                    .collect(),
            ),
        }
    }
}

/// Normalizes a single scalar fragment.
#[must_use]
pub fn normalize_scalar(raw: &str) -> Value {
    let trimmed = raw.trim();
    let text = strip_quotes(trimmed);

    match parse_number(text) {
        Some(number) => Value::Number(number),
        None => Value::String(text.to_string()),
    }
}

fn strip_quotes(text: &str) -> &str {
    if text.len() >= 2 && text.starts_with('"') && text.ends_with('"') {
        &text[1..text.len() - 1]
    } else {
        text
    }
}

/// Parses `text` as a finite number, folding whole values into integers.
fn parse_number(text: &str) -> Option<Number> {
    let text = text.trim();
    if let Ok(integer) = text.parse::<i64>() {
        return Some(Number::Integer(integer));
    }
    let float: f64 = text.parse().ok()?;
    if !float.is_finite() {
        return None;
    }
    if float.fract() == 0.0 && float >= i64::MIN as f64 && float < i64::MAX as f64 {
        Some(Number::Integer(float as i64))
    } else {
        Some(Number::Float(float))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_and_float_normalization() {
        assert_eq!(normalize_scalar("3"), Value::Number(Number::Integer(3)));
        assert_eq!(normalize_scalar("3.0"), Value::Number(Number::Integer(3)));
        assert_eq!(normalize_scalar("3.5"), Value::Number(Number::Float(3.5)));
        assert_eq!(normalize_scalar("-0.25"), Value::Number(Number::Float(-0.25)));
        assert_eq!(normalize_scalar("1e3"), Value::Number(Number::Integer(1000)));
        assert_eq!(normalize_scalar(".5"), Value::Number(Number::Float(0.5)));
    }

    #[test]
    fn test_quoted_numbers_become_numbers() {
        assert_eq!(normalize_scalar("\"42\""), Value::from(42));
    }

    #[test]
    fn test_text_stays_text() {
        assert_eq!(normalize_scalar("  hello world "), Value::from("hello world"));
        assert_eq!(normalize_scalar("\"\""), Value::from(""));
        assert_eq!(normalize_scalar(""), Value::from(""));
    }

    #[test]
    fn test_single_quote_character_is_not_stripped() {
        assert_eq!(normalize_scalar("\""), Value::from("\""));
    }

    #[test]
    fn test_non_finite_stays_text() {
        assert_eq!(normalize_scalar("nan"), Value::from("nan"));
        assert_eq!(normalize_scalar("\"inf\""), Value::from("inf"));
        assert_eq!(normalize_scalar("1e400"), Value::from("1e400"));
    }

    #[test]
    fn test_huge_whole_number_stays_float() {
        assert_eq!(
            normalize_scalar("1e20"),
            Value::Number(Number::Float(1e20))
        );
    }

    #[test]
    fn test_integer_text_is_exact() {
        assert_eq!(normalize_scalar("9223372036854775807"), Value::from(i64::MAX));
        assert_eq!(normalize_scalar("-9007199254740993"), Value::from(-9_007_199_254_740_993i64));
    }

    #[test]
    fn test_no_unescaping_after_quotes_removed() {
        assert_eq!(normalize_scalar(r#""a\nb""#), Value::from(r"a\nb"));
    }

    #[test]
    fn test_blank_elements_dropped() {
        let raw = RawValue::List(vec![
            RawValue::text("1"),
            RawValue::text("2"),
            RawValue::text(""),
            RawValue::text("3"),
            RawValue::text("  \n"),
        ]);
        assert_eq!(
            raw.normalize(),
            Value::Array(vec![Value::from(1), Value::from(2), Value::from(3)])
        );
    }

    #[test]
    fn test_quoted_empty_string_element_kept() {
        let raw = RawValue::List(vec![RawValue::text("\"\"")]);
        assert_eq!(raw.normalize(), Value::Array(vec![Value::from("")]));
    }

    #[test]
    fn test_nested_lists() {
        let raw = RawValue::List(vec![
            RawValue::List(vec![RawValue::text("1"), RawValue::text("2")]),
            RawValue::List(vec![]),
        ]);
        assert_eq!(
            raw.normalize(),
            Value::Array(vec![
                Value::Array(vec![Value::from(1), Value::from(2)]),
                Value::Array(vec![]),
            ])
        );
    }
}
