//! Token types produced by the scanner.
//!
//! Tokens are immutable strings of two kinds. The `Display` form of a token
//! is exactly the text that appears in an output listing, one token per
//! line: quoted tokens keep both surrounding quotes, numeric tokens are
//! written bare.

use serde::Serialize;
use std::fmt;

/// A meaningful token extracted from a JSON-like character stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Token {
    /// A quoted string literal, stored with both surrounding quotes.
    ///
    /// The text between the quotes is verbatim source content. Escape
    /// sequences are not interpreted, so a double quote always closes the
    /// token.
    Quoted(String),

    /// A bare numeric literal: a digit run containing at most one decimal
    /// point, scanned outside any quote block.
    Number(String),
}

impl Token {
    /// The token text as it appears in an output listing.
    pub fn text(&self) -> &str {
        match self {
            Token::Quoted(text) | Token::Number(text) => text,
        }
    }

    /// The token text without delimiters: the content between the quotes
    /// for a quoted token, the digits themselves for a number.
    pub fn content(&self) -> &str {
        match self {
            Token::Quoted(text) => text
                .strip_prefix('"')
                .and_then(|t| t.strip_suffix('"'))
                .unwrap_or(text),
            Token::Number(text) => text,
        }
    }

    /// Check if this token is a quoted string literal
    pub fn is_quoted(&self) -> bool {
        matches!(self, Token::Quoted(_))
    }

    /// Check if this token is a bare numeric literal
    pub fn is_number(&self) -> bool {
        matches!(self, Token::Number(_))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text())
    }
}
