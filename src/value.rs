//! Normalized values held by properties and produced by the structural encoder.
//!
//! ## Core Types
//!
//! - [`Value`]: a scalar (number or text), an ordered array of values, or an
//!   ordered mapping (only produced by [`crate::to_value`])
//! - [`Number`]: an integer or a floating-point number
//!
//! ## Display
//!
//! `Display` renders a value in config syntax: numbers in decimal form, text
//! quoted with every `"` doubled, arrays as `{a,b,c}`. An `Object` renders as
//! the statements of a document with inheritance already flattened, nested
//! objects becoming `class` blocks. Objects nested inside arrays have no
//! config form and should not be displayed.
//!
//! ```rust
//! use armaconfig::Value;
//!
//! let value = Value::Array(vec![Value::from(1), Value::from("a\"b")]);
//! assert_eq!(value.to_string(), r#"{1,"a""b"}"#);
//! ```

use crate::ConfigMap;
use serde::{Serialize, Serializer};
use std::fmt;

/// A normalized config value.
///
/// Property values are always a `Number`, a `String` or an `Array` of those
/// (arrays nest arbitrarily). `Object` only appears in the output of the
/// structural encoder, where classes become mappings.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Number(Number),
    String(String),
    Array(Vec<Value>),
    Object(ConfigMap),
}

/// A numeric scalar.
///
/// Numbers with no fractional part are normalized to `Integer` when they fit
/// into an `i64`.
///
/// # Examples
///
/// ```rust
/// use armaconfig::Number;
///
/// assert!(Number::Integer(3).is_integer());
/// assert_eq!(Number::Float(3.5).as_f64(), 3.5);
/// assert_eq!(Number::Float(3.5).as_i64(), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl Number {
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }

    /// Converts this number to an `i64` if it has no fractional part.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Integer(i) => Some(*i),
            Number::Float(f) => {
                if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64 {
                    Some(*f as i64)
                } else {
                    None
                }
            }
        }
    }

    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(i) => *i as f64,
            Number::Float(f) => *f,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Float(fl) => write!(f, "{}", fl),
        }
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Integer(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl Value {
    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// If the value is text, returns a reference to it. Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use armaconfig::Value;
    ///
    /// assert_eq!(Value::from("hello").as_str(), Some("hello"));
    /// assert_eq!(Value::from(42).as_str(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(n.as_f64()),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&ConfigMap> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }
}

/// Writes `s` as a quoted config string, doubling embedded quotes.
pub(crate) fn write_quoted<W: fmt::Write>(out: &mut W, s: &str) -> fmt::Result {
    out.write_char('"')?;
    for ch in s.chars() {
        if ch == '"' {
            out.write_str("\"\"")?;
        } else {
            out.write_char(ch)?;
        }
    }
    out.write_char('"')
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::String(s) => write_quoted(f, s),
            Value::Array(arr) => {
                f.write_str("{")?;
                for (i, element) in arr.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}", element)?;
                }
                f.write_str("}")
            }
            Value::Object(obj) => write_statements(f, obj),
        }
    }
}

/// Writes mapping entries as statements, nested mappings as class blocks.
fn write_statements(f: &mut fmt::Formatter<'_>, obj: &ConfigMap) -> fmt::Result {
    for (key, value) in obj.iter() {
        match value {
            Value::Object(inner) => {
                write!(f, "class {}{{", key)?;
                write_statements(f, inner)?;
                f.write_str("};")?;
            }
            Value::Array(_) => write!(f, "{}[]={};", key, value)?,
            _ => write!(f, "{}={};", key, value)?,
        }
    }
    Ok(())
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Number(Number::Integer(i)) => serializer.serialize_i64(*i),
            Value::Number(Number::Float(f)) => serializer.serialize_f64(*f),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(arr) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for element in arr {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            Value::Object(obj) => {
                use serde::ser::SerializeMap;
                let mut map = serializer.serialize_map(Some(obj.len()))?;
                for (k, v) in obj.iter() {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

impl TryFrom<Value> for i64 {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Number(n) => n.as_i64().ok_or_else(|| {
                crate::Error::custom(format!("cannot convert {} to i64", n))
            }),
            _ => Err(crate::Error::custom(format!(
                "expected integer, found {:?}",
                value
            ))),
        }
    }
}

impl TryFrom<Value> for f64 {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Number(n) => Ok(n.as_f64()),
            _ => Err(crate::Error::custom(format!(
                "expected number, found {:?}",
                value
            ))),
        }
    }
}

impl TryFrom<Value> for String {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::String(s) => Ok(s),
            _ => Err(crate::Error::custom(format!(
                "expected string, found {:?}",
                value
            ))),
        }
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(Number::Integer(value as i64))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(Number::Integer(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(Number::Float(value))
    }
}

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        Value::Number(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

impl From<ConfigMap> for Value {
    fn from(value: ConfigMap) -> Self {
        Value::Object(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tryfrom_i64() {
        let value = Value::Number(Number::Integer(42));
        assert_eq!(i64::try_from(value).unwrap(), 42);

        let value = Value::Number(Number::Float(42.0));
        assert_eq!(i64::try_from(value).unwrap(), 42);

        assert!(i64::try_from(Value::Number(Number::Float(4.5))).is_err());
        assert!(i64::try_from(Value::from("test")).is_err());
    }

    #[test]
    fn test_tryfrom_string() {
        let value = Value::String("hello".to_string());
        assert_eq!(String::try_from(value).unwrap(), "hello");
        assert!(String::try_from(Value::from(42)).is_err());
    }

    #[test]
    fn test_display_doubles_quotes() {
        assert_eq!(Value::from(r#"say "hi""#).to_string(), r#""say ""hi""""#);
        assert_eq!(Value::from("").to_string(), r#""""#);
    }

    #[test]
    fn test_display_numbers() {
        assert_eq!(Value::from(3).to_string(), "3");
        assert_eq!(Value::from(-12).to_string(), "-12");
        assert_eq!(Value::from(3.5).to_string(), "3.5");
        assert_eq!(Value::from(0.25).to_string(), "0.25");
    }

    #[test]
    fn test_display_nested_arrays() {
        let value = Value::Array(vec![
            Value::Array(vec![Value::from(1), Value::from(2)]),
            Value::Array(vec![Value::from(3), Value::from(4)]),
            Value::Array(vec![]),
        ]);
        assert_eq!(value.to_string(), "{{1,2},{3,4},{}}");
    }

    #[test]
    fn test_display_object_as_statements() {
        let mut map = ConfigMap::new();
        map.insert("x".to_string(), Value::from(1));
        map.insert("list".to_string(), Value::Array(vec![Value::from("a")]));
        assert_eq!(Value::Object(map).to_string(), r#"x=1;list[]={"a"};"#);
    }

    #[test]
    fn test_display_nested_object_as_class() {
        let mut b = ConfigMap::new();
        b.insert("v".to_string(), Value::from(1));
        let mut a = ConfigMap::new();
        a.insert("B".to_string(), Value::Object(b));
        let mut root = ConfigMap::new();
        root.insert("A".to_string(), Value::Object(a));

        let text = Value::Object(root.clone()).to_string();
        assert_eq!(text, "class A{class B{v=1;};};");
        assert_eq!(crate::to_value(&crate::from_str(&text).unwrap()), Value::Object(root));
    }

    #[test]
    fn test_as_i64_rejects_out_of_range_floats() {
        assert_eq!(Number::Float(9.0e15).as_i64(), Some(9_000_000_000_000_000));
        assert_eq!(Number::Float(9_223_372_036_854_775_808.0).as_i64(), None);
        assert_eq!(Number::Float(-9_223_372_036_854_775_808.0).as_i64(), Some(i64::MIN));
        assert_eq!(Value::from(1e19).as_i64(), None);
    }

    #[test]
    fn test_number_accessors() {
        let num = Number::Integer(42);
        assert!(num.is_integer());
        assert!(!num.is_float());
        assert_eq!(num.as_f64(), 42.0);
        assert_eq!(Value::from(2.5).as_f64(), Some(2.5));
        assert_eq!(Value::from("x").as_f64(), None);
    }
}
