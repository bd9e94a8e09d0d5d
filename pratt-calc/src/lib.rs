//! # pratt-calc
//!
//! An arithmetic calculator built on the [`pratt`] expression parsing
//! runtime. One line of text goes in, one `f64` comes out.
//!
//! The crate defines the following components:
//!
//! - [`token`]: [`CalcTokenKind`] and [`CalcToken`],
//! - [`lexer`]: [`CalcLexer`], an infinite, lazily pulled token stream,
//! - [`config`]: [`LexerConfig`] (the decimal separator),
//! - [`parselets`]: number, group, unary and binary operator parselets,
//! - [`parser`]: the pre-registered [`CALC_GRAMMAR`], [`CalcParser`] and
//!   the [`evaluate`] entry points,
//! - [`error`]: [`CalcError`].
//!
//! ## Example
//!
//! ```rust
//! use pratt_calc::{CalcError, evaluate};
//!
//! assert_eq!(evaluate("4 ^ 3 ^ 2").unwrap(), 262144.0);
//! assert_eq!(evaluate("-12 * 4.0").unwrap(), -48.0);
//! assert!(matches!(evaluate("(1 + 2"), Err(CalcError::Parse(_))));
//! ```

pub mod config;
pub mod error;
pub mod lexer;
pub mod parselets;
pub mod parser;
pub mod token;

pub use config::{ConfigError, LexerConfig};
pub use error::CalcError;
pub use lexer::{CalcLexer, LexerStats};
pub use parser::{CALC_GRAMMAR, CalcGrammar, CalcParser, calc_grammar, evaluate, evaluate_with};
pub use token::{CalcToken, CalcTokenKind};
