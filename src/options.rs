//! Configuration options for parsing and text encoding.
//!
//! - [`ParseOptions`]: how the parser treats preprocessor lines and how deep
//!   classes and arrays may nest
//! - [`EncodeOptions`]: compact or pretty-printed text output
//!
//! ## Examples
//!
//! ```rust
//! use armaconfig::{from_str_with_options, to_string_with_options};
//! use armaconfig::{DirectivePolicy, EncodeOptions, ParseOptions};
//!
//! let options = ParseOptions::new().with_directives(DirectivePolicy::Reject);
//! assert!(from_str_with_options("#include \"a.hpp\"\n", options).is_err());
//!
//! let doc = armaconfig::from_str("class A { x = 1; };").unwrap();
//! let text = to_string_with_options(&doc, EncodeOptions::pretty()).unwrap();
//! assert_eq!(text, "class A{\n    x=1;\n};\n");
//! ```

/// What the parser does with a `#` line found in statement position.
///
/// # Examples
///
/// ```rust
/// use armaconfig::DirectivePolicy;
///
/// assert_eq!(DirectivePolicy::default(), DirectivePolicy::Skip);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DirectivePolicy {
    /// Discard the marker and the rest of its line.
    #[default]
    Skip,
    /// Fail with [`crate::Error::UnsupportedDirective`].
    Reject,
}

/// Default nesting limit for classes and arrays.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Configuration options for the parser.
#[derive(Clone, Debug)]
pub struct ParseOptions {
    pub directives: DirectivePolicy,
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            directives: DirectivePolicy::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParseOptions {
    /// Creates default options (skip directives, nesting limit of 128).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use armaconfig::{DirectivePolicy, ParseOptions};
    ///
    /// let options = ParseOptions::new();
    /// assert_eq!(options.directives, DirectivePolicy::Skip);
    /// assert_eq!(options.max_depth, 128);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_directives(mut self, directives: DirectivePolicy) -> Self {
        self.directives = directives;
        self
    }

    /// Sets how many classes or arrays may be open at once, and how many
    /// ancestors a class may have.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// Configuration options for the text encoder.
///
/// The compact default writes statements back to back with no line breaks.
/// Pretty output puts each statement on its own line and indents class bodies.
///
/// # Examples
///
/// ```rust
/// use armaconfig::EncodeOptions;
///
/// let options = EncodeOptions::new();
/// assert!(!options.pretty);
///
/// let options = EncodeOptions::pretty().with_indent(2);
/// assert!(options.pretty);
/// assert_eq!(options.indent, 2);
/// ```
#[derive(Clone, Debug)]
pub struct EncodeOptions {
    pub indent: usize,
    pub pretty: bool,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        EncodeOptions {
            indent: 4,
            pretty: false,
        }
    }
}

impl EncodeOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for output with newlines and indentation.
    #[must_use]
    pub fn pretty() -> Self {
        EncodeOptions {
            pretty: true,
            ..Default::default()
        }
    }

    /// Sets the number of spaces per nesting level. Only affects pretty output.
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }
}
