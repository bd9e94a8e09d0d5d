//! # Calculator Error Type
//!
//! [`CalcError`] is the single error surface of the calculator. It aggregates
//! failures from:
//!
//! - **Configuration** (an unusable decimal separator),
//! - **Parsing** (any [`ParseError`] raised by the engine or a parselet).
//!
//! Conversions are derived with `#[from]`, so `?` works at call sites that
//! return `Result<T, CalcError>`.

use crate::ConfigError;
use pratt::{ParseError, Span};
use thiserror::Error;

/// Represents all possible errors that can occur while evaluating a line.
///
/// # Examples
/// ```rust
/// # use pratt_calc::{CalcError, evaluate};
/// let err = evaluate("2 +").unwrap_err();
/// assert!(matches!(err, CalcError::Parse(_)));
/// assert!(err.to_string().starts_with("syntax error"));
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// The lexer configuration was rejected.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// The line is not a well-formed expression.
    #[error("syntax error: {0}")]
    Parse(#[from] ParseError),
}

impl CalcError {
    /// Span of the offending input, when the error points at a token.
    pub fn span(&self) -> Option<Span> {
        match self {
            CalcError::Parse(err) => err.span(),
            CalcError::Config(_) => None,
        }
    }
}
