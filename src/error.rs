//! Error types for scanning, parsing and querying config documents.
//!
//! ## Error Categories
//!
//! - **Lexical errors**: input ran out inside a string literal or block comment
//! - **Grammar violations**: [`Error::UnexpectedToken`] and [`Error::UnexpectedEof`],
//!   always fatal to the current parse
//! - **Resolution errors**: a class names a parent that was never declared in scope
//! - **Lookup errors**: a keyed lookup exhausted the inheritance chain
//! - **I/O errors**: file reading/writing failures
//!
//! Every parse error carries the 1-based line where it was detected.
//!
//! ## Examples
//!
//! ```rust
//! use armaconfig::{from_str, Error};
//!
//! let result = from_str("class Foo 5;");
//! assert!(matches!(result, Err(Error::UnexpectedToken { .. })));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors raised while reading or querying a config document.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// The next token matched none of the grammar alternatives
    #[error("Unexpected token at line {line}: expected {}, found {found}", .expected.join(" or "))]
    UnexpectedToken {
        line: usize,
        expected: Vec<String>,
        found: String,
    },

    /// Input ended in the middle of a statement
    #[error("Unexpected end of input at line {line}: expected {expected}")]
    UnexpectedEof { line: usize, expected: String },

    #[error("Unterminated string literal starting at line {line}")]
    UnterminatedString { line: usize },

    #[error("Unterminated block comment starting at line {line}")]
    UnterminatedComment { line: usize },

    /// A class inherits from a name that is not declared in any enclosing scope
    #[error("Unknown parent class '{parent}' for class '{class}' at line {line}")]
    UnknownParent {
        line: usize,
        class: String,
        parent: String,
    },

    /// A preprocessor line was found while directives are rejected
    #[error("Unsupported preprocessor directive at line {line}")]
    UnsupportedDirective { line: usize },

    #[error("Nesting depth exceeds the limit of {limit} at line {line}")]
    NestingTooDeep { line: usize, limit: usize },

    /// Keyed lookup found no member, neither in the class nor in its parents
    #[error("Member not found: {0}")]
    MemberNotFound(String),

    /// A path lookup tried to step into a property
    #[error("'{0}' is a property, not a class")]
    NotAClass(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a grammar violation listing what would have been accepted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use armaconfig::Error;
    ///
    /// let err = Error::unexpected_token(3, &["'{'", "':'"], "'5'");
    /// assert_eq!(
    ///     err.to_string(),
    ///     "Unexpected token at line 3: expected '{' or ':', found '5'"
    /// );
    /// ```
    pub fn unexpected_token(line: usize, expected: &[&str], found: &str) -> Self {
        Error::UnexpectedToken {
            line,
            expected: expected.iter().map(|e| e.to_string()).collect(),
            found: found.to_string(),
        }
    }

    /// Creates an unexpected end-of-input error.
    pub fn unexpected_eof(line: usize, expected: &str) -> Self {
        Error::UnexpectedEof {
            line,
            expected: expected.to_string(),
        }
    }

    pub fn unknown_parent(line: usize, class: &str, parent: &str) -> Self {
        Error::UnknownParent {
            line,
            class: class.to_string(),
            parent: parent.to_string(),
        }
    }

    /// Creates a lookup failure for `name`.
    pub fn member_not_found(name: &str) -> Self {
        Error::MemberNotFound(name.to_string())
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use armaconfig::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for file reading/writing failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Returns the line the error was detected on, if it came from the parser.
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::UnexpectedToken { line, .. }
            | Error::UnexpectedEof { line, .. }
            | Error::UnterminatedString { line }
            | Error::UnterminatedComment { line }
            | Error::UnknownParent { line, .. }
            | Error::UnsupportedDirective { line }
            | Error::NestingTooDeep { line, .. } => Some(*line),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unexpected_token_lists_alternatives() {
        let err = Error::unexpected_token(7, &["identifier"], "'5'");
        assert_eq!(
            err.to_string(),
            "Unexpected token at line 7: expected identifier, found '5'"
        );
        assert_eq!(err.line(), Some(7));
    }

    #[test]
    fn test_lookup_errors_have_no_line() {
        assert_eq!(Error::member_not_found("x").line(), None);
        assert_eq!(Error::NotAClass("x".into()).line(), None);
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(msg) if msg.contains("missing")));
    }
}
