//! Recursive-descent parser turning the token stream into a [`Document`].
//!
//! The parser is pull based: every call to [`Iterator::next`] reads exactly
//! one top-level statement, recursing into class bodies as needed.
//! [`Parser::parse`] drives it to the end of input.
//!
//! ```text
//! document     := statement*
//! statement    := class_def | property_def | ';' | directive
//! class_def    := 'class' IDENT (':' IDENT)? '{' statement* '}' ';'
//! property_def := IDENT ('[' ']')? '=' value ';'
//! value        := scalar_run | '{' (value (',' value)*)? '}'
//! ```
//!
//! Parent classes are resolved as soon as they are named, against the
//! classes already declared in the enclosing bodies and at document level.
//!
//! ```rust
//! use armaconfig::Parser;
//!
//! let mut parser = Parser::new("a = 1; class B { b = 2; };");
//! assert_eq!(parser.next().unwrap().unwrap().name(), "a");
//! assert_eq!(parser.next().unwrap().unwrap().name(), "B");
//! assert!(parser.next().is_none());
//! ```

use crate::ast::{ClassNode, Document, Member, Parent, PropertyNode};
use crate::normalize::RawValue;
use crate::options::{DirectivePolicy, ParseOptions};
use crate::scanner::{Scanner, Token, TokenKind};
use crate::{Error, Result};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, trace};

/// The config parser.
///
/// Created via [`Parser::new`] or [`Parser::with_options`]. Once a statement
/// fails, the iterator is exhausted: there is no error recovery.
pub struct Parser {
    scanner: Scanner,
    options: ParseOptions,
    scopes: Vec<HashMap<String, Arc<ClassNode>>>,
    depth: usize,
    line: usize,
    finished: bool,
}

impl Parser {
    pub fn new(input: &str) -> Self {
        Self::with_options(input, ParseOptions::default())
    }

    pub fn with_options(input: &str, options: ParseOptions) -> Self {
        Parser {
            scanner: Scanner::new(input),
            options,
            scopes: vec![HashMap::new()],
            depth: 0,
            line: 1,
            finished: false,
        }
    }

    /// Parses all remaining statements into a document.
    ///
    /// # Errors
    ///
    /// Returns the first lexical, grammar or resolution error.
    pub fn parse(self) -> Result<Document> {
        let members = self.collect::<Result<Vec<_>>>()?;
        debug!(members = members.len(), "parsed document");
        Ok(Document::new(members))
    }

    /// Reads the next top-level statement, `Ok(None)` at the end of input.
    pub fn next_statement(&mut self) -> Result<Option<Member>> {
        while let Some(token) = self.next_token(false)? {
            if let Some(member) = self.parse_statement(token)? {
                return Ok(Some(member));
            }
        }
        Ok(None)
    }

    fn next_token(&mut self, include_whitespace: bool) -> Result<Option<Token>> {
        for token in self.scanner.by_ref() {
            let token = token?;
            self.line = token.line;
            if include_whitespace || !token.is_whitespace() {
                return Ok(Some(token));
            }
        }
        Ok(None)
    }

    fn expect_token(&mut self, expected: &str, include_whitespace: bool) -> Result<Token> {
        self.next_token(include_whitespace)?
            .ok_or_else(|| Error::unexpected_eof(self.line, expected))
    }

    fn expect_char(&mut self, ch: char) -> Result<Token> {
        let expected = format!("'{}'", ch);
        let token = self.expect_token(&expected, false)?;
        if token.is_char(ch) {
            Ok(token)
        } else {
            Err(Error::unexpected_token(token.line, &[&expected], &token.describe()))
        }
    }

    fn expect_identifier(&mut self, what: &str) -> Result<String> {
        let token = self.expect_token(what, false)?;
        if token.kind == TokenKind::Identifier {
            Ok(token.lexeme)
        } else {
            Err(Error::unexpected_token(token.line, &["identifier"], &token.describe()))
        }
    }

    fn enter(&mut self) -> Result<()> {
        self.depth += 1;
        if self.depth > self.options.max_depth {
            return Err(Error::NestingTooDeep {
                line: self.line,
                limit: self.options.max_depth,
            });
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    /// Parses the statement starting with `token`. Skipped statements (a lone
    /// `;` or a preprocessor line) yield `Ok(None)`.
    fn parse_statement(&mut self, token: Token) -> Result<Option<Member>> {
        match token.kind {
            TokenKind::Identifier if token.lexeme == "class" => self.parse_class().map(Some),
            TokenKind::Identifier => self.parse_property(token.lexeme).map(Some),
            TokenKind::PreprocessorMarker => self.skip_directive(token.line).map(|_| None),
            TokenKind::Unknown if token.is_char(';') => Ok(None),
            _ => Err(Error::unexpected_token(
                token.line,
                &["identifier", "';'"],
                &token.describe(),
            )),
        }
    }

    fn skip_directive(&mut self, line: usize) -> Result<()> {
        match self.options.directives {
            DirectivePolicy::Skip => {
                self.scanner.skip_directive();
                debug!(line, "skipped preprocessor directive");
                Ok(())
            }
            DirectivePolicy::Reject => Err(Error::UnsupportedDirective { line }),
        }
    }

    fn resolve_parent(&self, class: &str, parent: String) -> Result<Parent> {
        let resolved = self
            .scopes
            .iter()
            .rev()
            .find_map(|scope| scope.get(&parent))
            .cloned();
        match resolved {
            Some(resolved) if resolved.ancestors() + 1 > self.options.max_depth => {
                Err(Error::NestingTooDeep {
                    line: self.line,
                    limit: self.options.max_depth,
                })
            }
            Some(resolved) => Ok(Parent {
                name: parent,
                class: resolved,
            }),
            None => Err(Error::unknown_parent(self.line, class, &parent)),
        }
    }

    fn parse_class(&mut self) -> Result<Member> {
        let name = self.expect_identifier("class name")?;
        let token = self.expect_token("'{' or ':'", false)?;

        let parent = if token.is_char(':') {
            let parent_name = self.expect_identifier("parent class name")?;
            let parent = self.resolve_parent(&name, parent_name)?;
            self.expect_char('{')?;
            Some(parent)
        } else if token.is_char('{') {
            None
        } else {
            return Err(Error::unexpected_token(
                token.line,
                &["':'", "'{'"],
                &token.describe(),
            ));
        };

        self.enter()?;
        self.scopes.push(HashMap::new());
        let mut body = Vec::new();
        loop {
            let token = self.expect_token("'}'", false)?;
            if token.is_char('}') {
                break;
            }
            if let Some(member) = self.parse_statement(token)? {
                body.push(member);
            }
        }
        self.scopes.pop();
        self.leave();
        self.expect_char(';')?;

        let class = Arc::new(ClassNode::new(name, parent, body));
        debug!(
            class = %class.name,
            parent = ?class.parent_name(),
            members = class.body.len(),
            "parsed class"
        );
        if let Some(scope) = self.scopes.last_mut() {
            scope.insert(class.name.clone(), Arc::clone(&class));
        }
        Ok(Member::Class(class))
    }

    fn parse_property(&mut self, name: String) -> Result<Member> {
        let token = self.expect_token("'=' or '['", false)?;

        let raw = if token.is_char('[') {
            self.expect_char(']')?;
            self.expect_char('=')?;
            self.expect_char('{')?;
            let raw = self.parse_array()?;
            self.expect_char(';')?;
            raw
        } else if token.is_char('=') {
            let first = self.expect_token("value", false)?;
            if first.is_char('{') {
                let raw = self.parse_array()?;
                self.expect_char(';')?;
                raw
            } else {
                let (text, _) = self.scalar_run(first, &[';'])?;
                RawValue::Text(text)
            }
        } else {
            return Err(Error::unexpected_token(
                token.line,
                &["'='", "'['"],
                &token.describe(),
            ));
        };

        let property = PropertyNode::new(name, raw.normalize());
        trace!(property = %property.name, value = %property.value, "parsed property");
        Ok(Member::Property(property))
    }

    /// Parses array elements after the opening `{`, up to and including `}`.
    fn parse_array(&mut self) -> Result<RawValue> {
        self.enter()?;
        let mut items = Vec::new();
        loop {
            let token = self.expect_token("array element or '}'", false)?;
            let terminator = if token.is_char('{') {
                items.push(self.parse_array()?);
                self.expect_token("',' or '}'", false)?
            } else {
                let (text, terminator) = self.scalar_run(token, &[',', '}'])?;
                items.push(RawValue::Text(text));
                terminator
            };

            if terminator.is_char('}') {
                break;
            }
            if !terminator.is_char(',') {
                return Err(Error::unexpected_token(
                    terminator.line,
                    &["','", "'}'"],
                    &terminator.describe(),
                ));
            }
        }
        self.leave();
        Ok(RawValue::List(items))
    }

    /// Collects raw text from `first` up to one of `terminators`, returning
    /// the text and the terminator token. Preprocessor lines inside the run
    /// follow the directive policy and never become value text.
    fn scalar_run(&mut self, first: Token, terminators: &[char]) -> Result<(String, Token)> {
        let is_terminator = |token: &Token| terminators.iter().any(|&ch| token.is_char(ch));

        let mut text = String::new();
        let mut token = first;
        while !is_terminator(&token) {
            if token.kind == TokenKind::PreprocessorMarker {
                self.skip_directive(token.line)?;
            } else {
                text.push_str(&token.lexeme);
            }
            token = self.next_token(true)?.ok_or_else(|| {
                let expected: Vec<_> = terminators.iter().map(|ch| format!("'{}'", ch)).collect();
                Error::unexpected_eof(self.line, &expected.join(" or "))
            })?;
        }
        Ok((text, token))
    }
}

impl Iterator for Parser {
    type Item = Result<Member>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.next_statement() {
            Ok(Some(member)) => Some(Ok(member)),
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
