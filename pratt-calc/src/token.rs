//! # Calculator Tokens
//!
//! This module defines the token kinds and the concrete token type produced
//! by [`CalcLexer`](crate::CalcLexer) and consumed by the calculator grammar:
//!
//! - [`CalcTokenKind`]: the closed set of kinds, with the punctuator glyph of
//!   each operator kind,
//! - [`CalcToken`]: a kind, the exact source text, and its span; implements
//!   [`pratt::Token`].
//!
//! `Tilde` and `Bang` have glyphs and are produced by the lexer, but the
//! arithmetic grammar registers no parselet for them.

use pratt::{Span, Token, TokenKind};
use smartstring::alias::String;
use std::fmt;

/// Kinds of calculator tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CalcTokenKind {
    LeftParen = 0,
    RightParen = 1,
    Plus = 2,
    Minus = 3,
    Asterisk = 4,
    Slash = 5,
    Caret = 6,
    Tilde = 7,
    Bang = 8,
    Number = 9,
    End = 10,
}

impl CalcTokenKind {
    /// Every kind that is spelled with a single punctuator glyph.
    pub const PUNCTUATORS: [CalcTokenKind; 9] = [
        CalcTokenKind::LeftParen,
        CalcTokenKind::RightParen,
        CalcTokenKind::Plus,
        CalcTokenKind::Minus,
        CalcTokenKind::Asterisk,
        CalcTokenKind::Slash,
        CalcTokenKind::Caret,
        CalcTokenKind::Tilde,
        CalcTokenKind::Bang,
    ];

    /// The glyph of a punctuator kind, `None` for `Number` and `End`.
    pub const fn punctuator(self) -> Option<char> {
        match self {
            CalcTokenKind::LeftParen => Some('('),
            CalcTokenKind::RightParen => Some(')'),
            CalcTokenKind::Plus => Some('+'),
            CalcTokenKind::Minus => Some('-'),
            CalcTokenKind::Asterisk => Some('*'),
            CalcTokenKind::Slash => Some('/'),
            CalcTokenKind::Caret => Some('^'),
            CalcTokenKind::Tilde => Some('~'),
            CalcTokenKind::Bang => Some('!'),
            CalcTokenKind::Number | CalcTokenKind::End => None,
        }
    }

    /// The punctuator kind spelled `c`, if any.
    pub fn from_punctuator(c: char) -> Option<Self> {
        Self::PUNCTUATORS
            .into_iter()
            .find(|kind| kind.punctuator() == Some(c))
    }
}

impl TokenKind for CalcTokenKind {
    const COUNT: usize = 11;
    const END: Self = CalcTokenKind::End;
}

impl From<CalcTokenKind> for usize {
    fn from(kind: CalcTokenKind) -> Self {
        kind as usize
    }
}

impl fmt::Display for CalcTokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self, self.punctuator()) {
            (_, Some(c)) => write!(f, "'{c}'"),
            (CalcTokenKind::Number, None) => f.write_str("number"),
            (_, None) => f.write_str("end of input"),
        }
    }
}

/// A concrete lexical token for the calculator.
///
/// Tokens are immutable once produced.
///
/// # Example
/// ```rust
/// # use pratt_calc::{CalcToken, CalcTokenKind};
/// # use pratt::{Token, span};
/// let tok = CalcToken::new(CalcTokenKind::Number, "4.25", span!(0, 4));
///
/// assert_eq!(tok.kind(), CalcTokenKind::Number);
/// assert_eq!(tok.text(), "4.25");
/// assert_eq!(tok.span(), span!(0, 4));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalcToken {
    kind: CalcTokenKind,
    text: String,
    span: Option<Span>,
}

impl CalcToken {
    /// Creates a token.
    pub fn new(kind: CalcTokenKind, text: &str, span: Option<Span>) -> Self {
        Self {
            kind,
            text: String::from(text),
            span,
        }
    }
}

impl Token for CalcToken {
    type Kind = CalcTokenKind;

    fn kind(&self) -> CalcTokenKind {
        self.kind
    }

    fn text(&self) -> &str {
        self.text.as_str()
    }

    fn span(&self) -> Option<Span> {
        self.span
    }

    /// End-of-input tokens carry empty text.
    fn end(span: Option<Span>) -> Self {
        Self::new(CalcTokenKind::End, "", span)
    }
}

impl fmt::Display for CalcToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            CalcTokenKind::End => f.write_str("<EOI>"),
            _ => f.write_str(&self.text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pratt::span;

    #[test]
    fn punctuators_round_trip() {
        for kind in CalcTokenKind::PUNCTUATORS {
            let c = kind.punctuator().unwrap();
            assert_eq!(CalcTokenKind::from_punctuator(c), Some(kind));
        }
        assert_eq!(CalcTokenKind::from_punctuator('7'), None);
        assert_eq!(CalcTokenKind::from_punctuator(' '), None);
        assert_eq!(CalcTokenKind::Number.punctuator(), None);
        assert_eq!(CalcTokenKind::End.punctuator(), None);
    }

    #[test]
    fn kinds_index_below_count() {
        let mut all = CalcTokenKind::PUNCTUATORS.to_vec();
        all.extend([CalcTokenKind::Number, CalcTokenKind::End]);
        assert_eq!(all.len(), CalcTokenKind::COUNT);
        for (i, kind) in all.into_iter().enumerate() {
            assert_eq!(usize::from(kind), i);
        }
    }

    #[test]
    fn kind_display() {
        assert_eq!(CalcTokenKind::Caret.to_string(), "'^'");
        assert_eq!(CalcTokenKind::Number.to_string(), "number");
        assert_eq!(CalcTokenKind::End.to_string(), "end of input");
    }

    #[test]
    fn end_token_has_empty_text() {
        let t = CalcToken::end(span!(3, 3));
        assert!(t.is_end());
        assert_eq!(t.text(), "");
        assert_eq!(t.to_string(), "<EOI>");
        assert!(t.span().unwrap().is_empty());
    }

    #[test]
    fn token_accessors_return_values() {
        let t = CalcToken::new(CalcTokenKind::Minus, "-", span!(2, 3));
        assert_eq!(t.kind(), CalcTokenKind::Minus);
        assert_eq!(t.text(), "-");
        assert_eq!(t.span().unwrap().start, 2);
        assert!(!t.is_end());
        assert_eq!(t.clone(), t);
        assert!(format!("{t:?}").contains("CalcToken"));
    }
}
