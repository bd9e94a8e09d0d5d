//! # Calculator Parser
//!
//! This module wires the arithmetic parselets into a [`Grammar`] and exposes:
//!
//! - [`CALC_GRAMMAR`]: the grammar, built once on first use and shared,
//! - [`CalcParser`]: a single-use parser over one [`CalcLexer`],
//! - [`evaluate`] / [`evaluate_with`]: lex, parse and evaluate one line.
//!
//! ## Grammar
//!
//! | kind | fixity | parselet | precedence |
//! |---|---|---|---|
//! | `Number` | prefix | number literal | |
//! | `LeftParen` | prefix | group | |
//! | `Plus`, `Minus` | prefix | unary operator | prefix |
//! | `Plus`, `Minus` | infix | left-assoc binary | sum |
//! | `Asterisk`, `Slash` | infix | left-assoc binary | product |
//! | `Caret` | infix | right-assoc binary | exponent |
//!
//! Only one expression is parsed per line. Tokens that follow a complete
//! expression are left unread, so `"1 2"` evaluates to `1`.

use crate::parselets::{
    BinaryOperatorParselet, GroupParselet, NumberParselet, PrefixOperatorParselet,
};
use crate::{CalcError, CalcLexer, CalcTokenKind, LexerConfig};
use once_cell::sync::Lazy;
use pratt::{Assoc, Grammar, ParseError, Parser, ParserStats, Precedence};

/// The grammar type of the calculator.
pub type CalcGrammar = Grammar<CalcLexer, f64>;

/// The calculator grammar, registered once.
pub static CALC_GRAMMAR: Lazy<CalcGrammar> = Lazy::new(|| {
    calc_grammar().expect("calculator grammar registers each kind once per fixity")
});

/// Builds a fresh calculator grammar.
///
/// # Errors
/// [`ParseError::AlreadyRegistered`] if a kind is wired twice.
pub fn calc_grammar() -> Result<CalcGrammar, ParseError> {
    let mut g = CalcGrammar::new();

    g.register_prefix(CalcTokenKind::Number, NumberParselet)?;
    g.register_prefix(CalcTokenKind::LeftParen, GroupParselet)?;

    prefix(&mut g, CalcTokenKind::Plus, Precedence::Prefix)?;
    prefix(&mut g, CalcTokenKind::Minus, Precedence::Prefix)?;

    infix_left(&mut g, CalcTokenKind::Plus, Precedence::Sum)?;
    infix_left(&mut g, CalcTokenKind::Minus, Precedence::Sum)?;
    infix_left(&mut g, CalcTokenKind::Asterisk, Precedence::Product)?;
    infix_left(&mut g, CalcTokenKind::Slash, Precedence::Product)?;
    infix_right(&mut g, CalcTokenKind::Caret, Precedence::Exponent)?;

    log::debug!("calculator grammar: {:?}", g);
    Ok(g)
}

/// Registers a unary prefix operator.
pub fn prefix(
    g: &mut CalcGrammar,
    kind: CalcTokenKind,
    prec: Precedence,
) -> Result<(), ParseError> {
    log::trace!("prefix {} binds operand at {}", kind, prec);
    g.register_prefix(kind, PrefixOperatorParselet::new(prec))
}

/// Registers a left-associative binary operator.
pub fn infix_left(
    g: &mut CalcGrammar,
    kind: CalcTokenKind,
    prec: Precedence,
) -> Result<(), ParseError> {
    infix(g, kind, prec, Assoc::Left)
}

/// Registers a right-associative binary operator.
pub fn infix_right(
    g: &mut CalcGrammar,
    kind: CalcTokenKind,
    prec: Precedence,
) -> Result<(), ParseError> {
    infix(g, kind, prec, Assoc::Right)
}

fn infix(
    g: &mut CalcGrammar,
    kind: CalcTokenKind,
    prec: Precedence,
    assoc: Assoc,
) -> Result<(), ParseError> {
    log::trace!("infix {} at {}, {}-associative", kind, prec, assoc);
    g.register_infix(kind, BinaryOperatorParselet::new(prec, assoc))
}

/// A single-use calculator parser.
///
/// # Example
/// ```rust
/// # use pratt_calc::{CalcLexer, CalcParser, LexerConfig};
/// let lexer = CalcLexer::new("2 ^ (1 + 2)", LexerConfig::default());
/// let mut parser = CalcParser::new(lexer);
/// assert_eq!(parser.parse_expression().unwrap(), 8.0);
/// ```
pub struct CalcParser {
    parser: Parser<'static, CalcLexer, f64>,
}

impl CalcParser {
    /// Creates a parser over `lexer` using [`CALC_GRAMMAR`].
    pub fn new(lexer: CalcLexer) -> Self {
        Self {
            parser: Parser::new(&*CALC_GRAMMAR, lexer),
        }
    }

    /// Limits nesting of groups and operands to `max_depth`.
    pub fn with_max_depth(self, max_depth: usize) -> Self {
        Self {
            parser: self.parser.with_max_depth(max_depth),
        }
    }

    /// Parses and evaluates one expression.
    pub fn parse_expression(&mut self) -> Result<f64, ParseError> {
        self.parser.parse_expression()
    }

    /// The underlying engine, for lookahead or custom parselet calls.
    pub fn inner(&mut self) -> &mut Parser<'static, CalcLexer, f64> {
        &mut self.parser
    }

    /// Engine counters collected so far.
    pub fn stats(&self) -> ParserStats {
        self.parser.stats()
    }
}

/// Evaluates `line` with the default [`LexerConfig`].
///
/// ```rust
/// # use pratt_calc::evaluate;
/// assert_eq!(evaluate("1 + 2 * 3 ^ 4 - 5 / 5").unwrap(), 162.0);
/// ```
pub fn evaluate(line: &str) -> Result<f64, CalcError> {
    evaluate_with(line, &LexerConfig::default())
}

/// Evaluates `line` with `config`.
///
/// # Errors
/// - [`CalcError::Config`] if `config` is invalid,
/// - [`CalcError::Parse`] if `line` is not a well-formed expression or nests
///   deeper than [`DEFAULT_MAX_DEPTH`](pratt::DEFAULT_MAX_DEPTH).
pub fn evaluate_with(line: &str, config: &LexerConfig) -> Result<f64, CalcError> {
    config.validate()?;
    let mut parser = CalcParser::new(CalcLexer::new(line, *config));
    let result = parser.parse_expression();
    log::debug!("Stats: {:?}", parser.stats());
    Ok(result?)
}
