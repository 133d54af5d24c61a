//! Encoders turning a parsed [`Document`] back into output.
//!
//! - [`Encoder`] writes config source text. The output is semantically
//!   equivalent to the input but not byte for byte: comments, directives and
//!   the original layout are gone.
//! - [`to_value`] builds the structural mapping, where every class becomes a
//!   [`Value::Object`] holding its inherited and own entries.
//!
//! ```rust
//! use armaconfig::{from_str, to_string};
//!
//! let doc = from_str("class A { x = 1; };  class B : A { list[] = {1, \"a\"}; };").unwrap();
//! assert_eq!(
//!     to_string(&doc).unwrap(),
//!     "class A{x=1;};class B: A{list[]={1,\"a\"};};"
//! );
//! ```

use crate::ast::{ClassNode, Document, Member, PropertyNode};
use crate::{EncodeOptions, Result, Value};
use std::fmt::Write;

/// The config text encoder.
///
/// Writes classes in declaration order, depth first. Created via
/// [`Encoder::new`]; [`Encoder::into_inner`] returns the text.
pub struct Encoder {
    output: String,
    options: EncodeOptions,
    indent_level: usize,
}

impl Encoder {
    pub fn new(options: EncodeOptions) -> Self {
        Encoder {
            output: String::with_capacity(256),
            options,
            indent_level: 0,
        }
    }

    pub fn into_inner(self) -> String {
        self.output
    }

    fn write_indent(&mut self) {
        if self.options.pretty {
            let width = self.indent_level * self.options.indent;
            self.output.extend(std::iter::repeat(' ').take(width));
        }
    }

    fn write_newline(&mut self) {
        if self.options.pretty {
            self.output.push('\n');
        }
    }

    pub fn encode_document(&mut self, document: &Document) -> Result<()> {
        for member in document {
            self.encode_member(member)?;
        }
        Ok(())
    }

    pub fn encode_member(&mut self, member: &Member) -> Result<()> {
        match member {
            Member::Class(class) => self.encode_class(class),
            Member::Property(property) => self.encode_property(property),
        }
    }

    pub fn encode_class(&mut self, class: &ClassNode) -> Result<()> {
        self.write_indent();
        self.output.push_str("class ");
        self.output.push_str(&class.name);
        if let Some(parent) = class.parent_name() {
            self.output.push_str(": ");
            self.output.push_str(parent);
        }
        self.output.push('{');
        self.write_newline();

        self.indent_level += 1;
        for member in &class.body {
            self.encode_member(member)?;
        }
        self.indent_level -= 1;

        self.write_indent();
        self.output.push_str("};");
        self.write_newline();
        Ok(())
    }

    pub fn encode_property(&mut self, property: &PropertyNode) -> Result<()> {
        self.write_indent();
        self.output.push_str(&property.name);
        if property.value.is_array() {
            self.output.push_str("[]");
        }
        self.output.push('=');
        self.encode_value(&property.value)?;
        self.output.push(';');
        self.write_newline();
        Ok(())
    }

    /// Writes a value: numbers in decimal form, text quoted with `"` doubled,
    /// arrays as comma separated elements in braces.
    pub fn encode_value(&mut self, value: &Value) -> Result<()> {
        write!(self.output, "{}", value).map_err(crate::Error::custom)
    }
}

/// Structural encoding of a document: a mapping from each top-level member's
/// name to its value, classes becoming nested mappings.
///
/// ```rust
/// use armaconfig::{from_str, to_value, Value};
///
/// let doc = from_str("class A { x = 1; }; class B : A { y = 2; };").unwrap();
/// let value = to_value(&doc);
/// let b = value.as_object().and_then(|o| o.get("B")).and_then(Value::as_object).unwrap();
///
/// assert_eq!(b.get("x"), Some(&Value::from(1)));
/// assert_eq!(b.get("y"), Some(&Value::from(2)));
/// ```
#[must_use]
pub fn to_value(document: &Document) -> Value {
    Value::Object(document.to_map())
}
