//! # pratt
//!
//! A small runtime for precedence-climbing (Pratt) expression parsers.
//!
//! A grammar is a pair of tables keyed by token kind: prefix parselets start
//! an expression, infix parselets extend one and carry a binding precedence.
//! The [`Parser`] pulls tokens lazily from any iterator, keeps a lookahead
//! buffer padded with end-of-input tokens, and evaluates while it parses.
//!
//! ## Modules
//!
//! - [`error`]: [`Span`] and [`ParseError`]
//! - [`token`]: the [`Token`] and [`TokenKind`] traits a lexer implements
//! - [`oper`]: the [`Precedence`] scale and [`Assoc`]
//! - [`grammar`]: [`PrefixParselet`], [`InfixParselet`] and [`Grammar`]
//! - [`parser`]: the [`Parser`] engine and [`ParserStats`]

pub mod error;
pub mod grammar;
pub mod oper;
pub mod parser;
pub mod token;

pub use error::{Fixity, ParseError, Span};
pub use grammar::{Grammar, InfixParselet, KindOf, PrefixParselet};
pub use oper::{Assoc, NON_OPER_PREC, Precedence};
pub use parser::{DEFAULT_MAX_DEPTH, Parser, ParserStats};
pub use token::{Token, TokenKind};
