//! Source spans and the error type raised while parsing expressions.
//!
//! Input is parsed one line at a time, so positions are plain 0-based
//! character offsets into that line. A [`Span`] is attached to every token
//! and copied into [`ParseError`] so a driver can point at the offending
//! part of the input.
//!
//! # Examples
//!
//! ```rust
//! # use pratt::{ParseError, Span, span};
//! let sp = Span::new(3, 5);
//! assert_eq!(sp.len(), 2);
//! assert!(!sp.is_empty());
//!
//! let err = ParseError::Expected {
//!     expected: "RightParen".into(),
//!     found: "End".into(),
//!     span: span!(7, 7),
//! };
//! assert!(err.to_string().contains("expected RightParen"));
//! ```

use smartstring::alias::String;
use std::fmt;
use thiserror::Error;

/// A half-open range of character offsets: `[start, end)`.
///
/// It is conventional for `start <= end`; this is not enforced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    /// Starting offset (inclusive).
    pub start: usize,
    /// Ending offset (exclusive).
    pub end: usize,
}

impl Span {
    /// Creates a new `Span`.
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Is this span empty (start == end)?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Number of characters covered.
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Build an `Option<Span>` inline from 0-based character offsets.
///
/// # Examples
///
/// ```rust
/// # use pratt::span;
/// let s = span!(0, 4);
/// assert_eq!(s.unwrap().end, 4);
/// ```
#[macro_export]
macro_rules! span {
    ($start:expr, $end:expr) => {
        Some($crate::Span {
            start: $start,
            end: $end,
        })
    };
}

/// Fixity of a parselet slot in a grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fixity {
    /// Starts an expression (literal, grouping, unary operator).
    Prefix,
    /// Continues an expression after a left operand.
    Infix,
}

impl fmt::Display for Fixity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Fixity::Prefix => "prefix",
            Fixity::Infix => "infix",
        })
    }
}

/// Errors raised by the expression engine and by parselets.
///
/// Every variant aborts the current parse; there is no recovery. Token kinds
/// are stored in their `Display` rendering so the error type does not depend
/// on the grammar's kind enumeration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// The token cannot start an expression: it has no prefix parselet.
    ///
    /// Raised for unexpected operators, a stray closing parenthesis, or end
    /// of input where a value was required.
    #[error("could not parse {text:?}: no prefix parselet for {kind}")]
    NoPrefix {
        kind: String,
        text: String,
        span: Option<Span>,
    },

    /// A specific token kind was required but another was found.
    #[error("expected {expected}, found {found}")]
    Expected {
        expected: String,
        found: String,
        span: Option<Span>,
    },

    /// A parselet was invoked for a token kind it does not handle.
    ///
    /// This indicates a grammar wiring bug, not bad input.
    #[error("unknown operation for {kind}")]
    UnknownOperation { kind: String, span: Option<Span> },

    /// A parselet was registered twice for the same kind and fixity.
    #[error("{fixity} parselet for {kind} is already registered")]
    AlreadyRegistered { kind: String, fixity: Fixity },

    /// Expressions are nested deeper than the parser's limit.
    #[error("expression nested deeper than {depth} levels")]
    TooDeep { depth: usize, span: Option<Span> },

    /// Number text could not be converted to a floating-point value.
    #[error("invalid number {0}")]
    InvalidNumber(#[from] std::num::ParseFloatError),
}

impl ParseError {
    /// Source span of the token that caused the error, if known.
    pub fn span(&self) -> Option<Span> {
        match self {
            ParseError::NoPrefix { span, .. }
            | ParseError::Expected { span, .. }
            | ParseError::UnknownOperation { span, .. }
            | ParseError::TooDeep { span, .. } => *span,
            ParseError::AlreadyRegistered { .. } | ParseError::InvalidNumber(_) => None,
        }
    }

    /// Builds an [`ParseError::UnknownOperation`] for `kind`.
    pub fn unknown_operation(kind: impl fmt::Display, span: Option<Span>) -> Self {
        ParseError::UnknownOperation {
            kind: kind.to_string().into(),
            span,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_span_has_zero_len() {
        let s = Span::new(4, 4);
        assert!(s.is_empty());
        assert_eq!(s.len(), 0);
        assert_eq!(s.to_string(), "4..4");
    }

    #[test]
    fn span_macro_builds_option() {
        assert_eq!(span!(1, 3), Some(Span::new(1, 3)));
    }

    #[test]
    fn error_span_accessor() {
        let err = ParseError::NoPrefix {
            kind: "')'".into(),
            text: ")".into(),
            span: span!(0, 1),
        };
        assert_eq!(err.span(), Some(Span::new(0, 1)));
        assert_eq!(
            err.to_string(),
            "could not parse \")\": no prefix parselet for ')'"
        );

        let err: ParseError = "x".parse::<f64>().unwrap_err().into();
        assert!(matches!(err, ParseError::InvalidNumber(_)));
        assert_eq!(err.span(), None);
    }

    #[test]
    fn already_registered_message_names_fixity() {
        let err = ParseError::AlreadyRegistered {
            kind: "'+'".into(),
            fixity: Fixity::Infix,
        };
        assert_eq!(err.to_string(), "infix parselet for '+' is already registered");
    }

    #[test]
    fn too_deep_carries_limit_and_span() {
        let err = ParseError::TooDeep {
            depth: 256,
            span: span!(256, 257),
        };
        assert_eq!(err.to_string(), "expression nested deeper than 256 levels");
        assert_eq!(err.span(), span!(256, 257));
    }

    fn _assert_send_sync_static<T: Send + Sync + 'static>() {}
    #[test]
    fn parse_error_is_send_sync_static() {
        _assert_send_sync_static::<ParseError>();
    }
}
