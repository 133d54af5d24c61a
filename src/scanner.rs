//! Character scanner producing the token stream consumed by the parser.
//!
//! The scanner works over the input split into lines (each keeping its line
//! terminator) with a `(line, column)` cursor. It is single pass: tokens are
//! produced lazily by the [`Iterator`] implementation and the scanner cannot
//! be rewound.
//!
//! - `// ...` and `/* ... */` comments are skipped without producing a token
//! - `#` as the first non-blank character of a line is a preprocessor marker
//! - `"..."` is a string; a doubled `""` inside stands for one literal quote
//! - a letter or `_` followed by letters, digits or `_` is an identifier
//! - any other character, whitespace included, is an `Unknown` token
//!
//! ```rust
//! use armaconfig::scanner::{Scanner, TokenKind};
//!
//! let tokens: Vec<_> = Scanner::new("x = \"a\"\"b\";")
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(kinds[0], TokenKind::Identifier);
//! assert_eq!(tokens[4].lexeme, "\"a\"b\"");
//! ```

use crate::{Error, Result};
use std::fmt;

/// Classification of a scanned token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    String,
    PreprocessorMarker,
    Identifier,
    Unknown,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::String => f.write_str("string"),
            TokenKind::PreprocessorMarker => f.write_str("preprocessor directive"),
            TokenKind::Identifier => f.write_str("identifier"),
            TokenKind::Unknown => f.write_str("character"),
        }
    }
}

/// A classified piece of input. Lines are 1-based.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub line: usize,
    pub lexeme: String,
}

impl Token {
    pub fn new(kind: TokenKind, line: usize, lexeme: impl Into<String>) -> Self {
        Token {
            kind,
            line,
            lexeme: lexeme.into(),
        }
    }

    /// Returns `true` for an `Unknown` token holding exactly `ch`.
    #[inline]
    #[must_use]
    pub fn is_char(&self, ch: char) -> bool {
        self.kind == TokenKind::Unknown
            && self.lexeme.len() == ch.len_utf8()
            && self.lexeme.starts_with(ch)
    }

    #[inline]
    #[must_use]
    pub fn is_whitespace(&self) -> bool {
        self.kind == TokenKind::Unknown && self.lexeme.chars().all(char::is_whitespace)
    }

    /// Short human readable form used in error messages.
    #[must_use]
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Unknown => format!("'{}'", self.lexeme.escape_debug()),
            TokenKind::PreprocessorMarker => self.kind.to_string(),
            _ => format!("{} {}", self.kind, self.lexeme),
        }
    }
}

/// The config scanner.
///
/// Created via [`Scanner::new`]; iterate it to pull tokens. After the first
/// error or the end of input the iterator keeps returning `None`.
pub struct Scanner {
    lines: Vec<Vec<char>>,
    line: usize,
    column: usize,
    finished: bool,
}

impl Scanner {
    pub fn new(input: &str) -> Self {
        Scanner {
            lines: input
                .split_inclusive('\n')
                .map(|line| line.chars().collect())
                .collect(),
            line: 0,
            column: 0,
            finished: false,
        }
    }

    /// Current 1-based line number.
    #[must_use]
    pub fn line_number(&self) -> usize {
        self.line + 1
    }

    /// Looks `offset` characters ahead of the cursor, crossing line boundaries.
    #[must_use]
    pub fn peek_at(&self, offset: usize) -> Option<char> {
        let mut line = self.line;
        let mut column = self.column + offset;
        while let Some(chars) = self.lines.get(line) {
            if column < chars.len() {
                return Some(chars[column]);
            }
            column -= chars.len();
            line += 1;
        }
        None
    }

    #[inline]
    fn peek(&self) -> Option<char> {
        self.peek_at(0)
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.column += 1;
        if self.lines.get(self.line).map_or(0, Vec::len) <= self.column {
            self.line += 1;
            self.column = 0;
        }
        Some(ch)
    }

    /// Discards everything up to and including the end of the current line.
    pub fn skip_line(&mut self) {
        if self.line < self.lines.len() {
            self.line += 1;
            self.column = 0;
        }
    }

    /// Discards the rest of a preprocessor line, following `\` continuations.
    pub fn skip_directive(&mut self) {
        loop {
            let continued = self.lines.get(self.line).map_or(false, |chars| {
                chars.iter().rev().find(|c| !c.is_whitespace()) == Some(&'\\')
            });
            self.skip_line();
            if !continued {
                break;
            }
        }
    }

    fn at_line_start(&self) -> bool {
        self.lines
            .get(self.line)
            .map_or(true, |chars| chars[..self.column].iter().all(|c| c.is_whitespace()))
    }

    fn skip_block_comment(&mut self, start_line: usize) -> Result<()> {
        loop {
            match self.advance() {
                Some('*') if self.peek() == Some('/') => {
                    self.advance();
                    return Ok(());
                }
                Some(_) => {}
                None => return Err(Error::UnterminatedComment { line: start_line }),
            }
        }
    }

    /// Reads a string literal whose opening quote was already consumed.
    fn scan_string(&mut self, start_line: usize) -> Result<Token> {
        let mut lexeme = String::from('"');
        loop {
            match self.advance() {
                Some('"') if self.peek() == Some('"') => {
                    self.advance();
                    lexeme.push('"');
                }
                Some('"') => break,
                Some(ch) => lexeme.push(ch),
                None => return Err(Error::UnterminatedString { line: start_line }),
            }
        }
        lexeme.push('"');
        Ok(Token::new(TokenKind::String, start_line, lexeme))
    }

    fn scan_identifier(&mut self, first: char, line: usize) -> Token {
        let mut lexeme = String::from(first);
        while let Some(ch) = self.peek() {
            if !is_identifier_char(ch) {
                break;
            }
            lexeme.push(ch);
            self.advance();
        }
        Token::new(TokenKind::Identifier, line, lexeme)
    }

    /// Scans the next token, returning `Ok(None)` at the end of input.
    pub fn scan(&mut self) -> Result<Option<Token>> {
        loop {
            let line = self.line_number();
            let line_start = self.at_line_start();
            let Some(ch) = self.advance() else {
                return Ok(None);
            };

            match ch {
                '/' if self.peek() == Some('/') => self.skip_line(),
                '/' if self.peek() == Some('*') => {
                    self.advance();
                    self.skip_block_comment(line)?;
                }
                '#' if line_start => {
                    return Ok(Some(Token::new(TokenKind::PreprocessorMarker, line, "#")))
                }
                '"' => return self.scan_string(line).map(Some),
                ch if ch == '_' || ch.is_alphabetic() => {
                    return Ok(Some(self.scan_identifier(ch, line)))
                }
                ch => return Ok(Some(Token::new(TokenKind::Unknown, line, ch))),
            }
        }
    }
}

#[inline]
fn is_identifier_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

impl Iterator for Scanner {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.scan() {
            Ok(Some(token)) => Some(Ok(token)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(err) => {
                self.finished = true;
                Some(Err(err))
            }
        }
    }
}
