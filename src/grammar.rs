//! Config format reference
//!
//! This module documents the dialect accepted by [`crate::Parser`] and
//! produced by [`crate::Encoder`].
//!
//! # Lexical structure
//!
//! ## Comments
//!
//! `//` runs to the end of the line, `/* ... */` may span lines. Both are
//! discarded and are not written back by the encoder.
//!
//! ## Preprocessor lines
//!
//! A `#` that is the first non-blank character of a line starts a directive
//! (`#include`, `#define`, ...). Directives are not expanded. By default the
//! rest of the line, plus any lines joined with a trailing `\`, is skipped;
//! with [`crate::DirectivePolicy::Reject`] the parse fails instead. The same
//! applies to a directive line in the middle of a value, which never becomes
//! part of the value text.
//!
//! ## Strings
//!
//! Strings are enclosed in `"`. A doubled quote stands for one literal quote;
//! there are no other escape sequences:
//!
//! ```text
//! title = "The ""Best"" mission";   // The "Best" mission
//! ```
//!
//! ## Identifiers
//!
//! A letter or `_`, followed by letters, digits and `_`. Names are case
//! sensitive.
//!
//! # Statements
//!
//! ```text
//! document     := statement*
//! statement    := class_def | property_def | ';'
//! class_def    := 'class' IDENT (':' IDENT)? '{' statement* '}' ';'
//! property_def := IDENT ('[' ']')? '=' value ';'
//! value        := scalar_run | '{' (value (',' value)*)? '}'
//! ```
//!
//! A `scalar_run` is everything up to the next terminator at the same nesting
//! depth: `;` for a property value, `,` or `}` for an array element. Spaces
//! inside the run are kept and only the ends are trimmed, so
//! `author = Bohemia Interactive;` holds the text `Bohemia Interactive`.
//!
//! ## Classes and inheritance
//!
//! ```text
//! class Base { speed = 10; };
//! class Fast : Base { speed = 20; armor = 5; };
//! ```
//!
//! The parent must already be declared, either in the same body or in one
//! of the enclosing bodies up to document level. A class may have at most
//! [`crate::ParseOptions::max_depth`] ancestors. Lookups that miss in a class
//! continue in its parent; structural encoding copies the parent's entries
//! first and lets the class's own entries replace them.
//!
//! # Values
//!
//! | Source            | Value                          |
//! |-------------------|--------------------------------|
//! | `3`, `3.0`, `"3"` | `Number::Integer(3)`           |
//! | `3.5`, `1e-3`     | `Number::Float`                |
//! | `hello`, `"hi"`   | `Value::String`                |
//! | `{1, {2, 3}}`     | `Value::Array` (nested)        |
//! | `{1,,2,}`         | `[1, 2]`, blank elements drop  |
//!
//! Quoted text that reads as a finite number is a number. `nan` and `inf`
//! stay text.
//!
//! # Text output
//!
//! The compact encoding writes statements back to back:
//!
//! ```text
//! class Base{speed=10;};class Fast: Base{speed=20;armor=5;};
//! ```
//!
//! Any property whose value is an array is written with the `[]` marker.
