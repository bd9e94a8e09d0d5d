//! # Arithmetic Parselets
//!
//! The parselets of the calculator grammar. They evaluate while they parse:
//! every parselet returns an `f64` instead of a tree node.
//!
//! | parselet | fixity | kinds |
//! |---|---|---|
//! | [`NumberParselet`] | prefix | `Number` |
//! | [`GroupParselet`] | prefix | `LeftParen` |
//! | [`PrefixOperatorParselet`] | prefix | `Plus`, `Minus` |
//! | [`BinaryOperatorParselet`] | infix | `Plus`, `Minus`, `Asterisk`, `Slash`, `Caret` |
//!
//! Arithmetic is plain IEEE-754 `f64`: division by zero yields an infinity or
//! NaN and `^` follows [`f64::powf`].
//!
//! The parselets are generic over the token source so they can drive any
//! iterator of [`CalcToken`]s, not only [`CalcLexer`](crate::CalcLexer).

use crate::{CalcToken, CalcTokenKind};
use pratt::{Assoc, InfixParselet, ParseError, Parser, Precedence, PrefixParselet, Token};

/// Parses the token text of a number as an `f64`.
///
/// The only non-digit a number token can hold is its decimal separator, which
/// is replaced by `.` before conversion.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberParselet;

impl NumberParselet {
    /// Converts number text with any decimal separator to an `f64`.
    pub fn value(text: &str) -> Result<f64, ParseError> {
        let normalized: String = text
            .chars()
            .map(|c| if c.is_ascii_digit() { c } else { '.' })
            .collect();
        Ok(normalized.parse::<f64>()?)
    }
}

impl<I> PrefixParselet<I, f64> for NumberParselet
where
    I: Iterator<Item = CalcToken>,
{
    fn parse(&self, _parser: &mut Parser<'_, I, f64>, token: CalcToken) -> Result<f64, ParseError> {
        Self::value(token.text())
    }
}

/// Parses a parenthesised expression.
#[derive(Debug, Clone, Copy, Default)]
pub struct GroupParselet;

impl<I> PrefixParselet<I, f64> for GroupParselet
where
    I: Iterator<Item = CalcToken>,
{
    fn parse(&self, parser: &mut Parser<'_, I, f64>, _token: CalcToken) -> Result<f64, ParseError> {
        let value = parser.parse_expression()?;
        parser.consume_expected(CalcTokenKind::RightParen)?;
        Ok(value)
    }
}

/// Unary `+` and `-`.
#[derive(Debug, Clone, Copy)]
pub struct PrefixOperatorParselet {
    prec: Precedence,
}

impl PrefixOperatorParselet {
    /// Parses the operand at `prec`.
    pub fn new(prec: Precedence) -> Self {
        Self { prec }
    }
}

impl<I> PrefixParselet<I, f64> for PrefixOperatorParselet
where
    I: Iterator<Item = CalcToken>,
{
    fn parse(&self, parser: &mut Parser<'_, I, f64>, token: CalcToken) -> Result<f64, ParseError> {
        let operand = parser.parse_expression_with(self.prec.into())?;
        match token.kind() {
            CalcTokenKind::Plus => Ok(operand),
            CalcTokenKind::Minus => Ok(-operand),
            kind => Err(ParseError::unknown_operation(kind, token.span())),
        }
    }
}

/// Binary `+ - * / ^`.
#[derive(Debug, Clone, Copy)]
pub struct BinaryOperatorParselet {
    prec: Precedence,
    assoc: Assoc,
}

impl BinaryOperatorParselet {
    /// Binds at `prec` with associativity `assoc`.
    pub fn new(prec: Precedence, assoc: Assoc) -> Self {
        Self { prec, assoc }
    }

    /// Associativity of this operator.
    pub fn assoc(&self) -> Assoc {
        self.assoc
    }
}

impl<I> InfixParselet<I, f64> for BinaryOperatorParselet
where
    I: Iterator<Item = CalcToken>,
{
    fn parse(
        &self,
        parser: &mut Parser<'_, I, f64>,
        left: f64,
        token: CalcToken,
    ) -> Result<f64, ParseError> {
        let min_prec = self.assoc.right_operand_prec(self.prec.into());
        let right = parser.parse_expression_with(min_prec)?;
        match token.kind() {
            CalcTokenKind::Plus => Ok(left + right),
            CalcTokenKind::Minus => Ok(left - right),
            CalcTokenKind::Asterisk => Ok(left * right),
            CalcTokenKind::Slash => Ok(left / right),
            CalcTokenKind::Caret => Ok(left.powf(right)),
            kind => Err(ParseError::unknown_operation(kind, token.span())),
        }
    }

    fn precedence(&self) -> usize {
        self.prec.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pratt::{Grammar, span};

    type Tokens = std::vec::IntoIter<CalcToken>;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn tok(kind: CalcTokenKind, text: &str, at: usize) -> CalcToken {
        CalcToken::new(kind, text, span!(at, at + text.chars().count()))
    }

    fn num(text: &str, at: usize) -> CalcToken {
        tok(CalcTokenKind::Number, text, at)
    }

    fn op(kind: CalcTokenKind, at: usize) -> CalcToken {
        let glyph = kind.punctuator().unwrap().to_string();
        tok(kind, &glyph, at)
    }

    #[test]
    fn number_value_accepts_any_separator() {
        assert_eq!(NumberParselet::value("123").unwrap(), 123.0);
        assert_eq!(NumberParselet::value("4.25").unwrap(), 4.25);
        assert_eq!(NumberParselet::value("4,25").unwrap(), 4.25);
        assert_eq!(NumberParselet::value("12.").unwrap(), 12.0);
        assert!(matches!(
            NumberParselet::value(""),
            Err(ParseError::InvalidNumber(_))
        ));
    }

    #[test]
    fn parselets_drive_a_plain_token_vector() {
        init_logger();
        let mut g: Grammar<Tokens, f64> = Grammar::new();
        g.register_prefix(CalcTokenKind::Number, NumberParselet).unwrap();
        g.register_infix(
            CalcTokenKind::Slash,
            BinaryOperatorParselet::new(Precedence::Product, Assoc::Left),
        )
        .unwrap();
        let tokens = vec![
            num("8", 0),
            op(CalcTokenKind::Slash, 1),
            num("4", 2),
            op(CalcTokenKind::Slash, 3),
            num("2", 4),
        ];
        let mut parser = Parser::new(&g, tokens.into_iter());
        assert_eq!(parser.parse_expression().unwrap(), 1.0);
        assert!(parser.consume().is_end());
    }

    #[test]
    fn binary_parselet_wired_to_foreign_kind_is_unknown_operation() {
        init_logger();
        let mut g: Grammar<Tokens, f64> = Grammar::new();
        g.register_prefix(CalcTokenKind::Number, NumberParselet).unwrap();
        g.register_infix(
            CalcTokenKind::Tilde,
            BinaryOperatorParselet::new(Precedence::Sum, Assoc::Left),
        )
        .unwrap();
        let tokens = vec![num("1", 0), op(CalcTokenKind::Tilde, 1), num("2", 2)];
        let err = Parser::new(&g, tokens.into_iter())
            .parse_expression()
            .unwrap_err();
        assert!(matches!(
            err,
            ParseError::UnknownOperation { ref kind, span: Some(_) } if kind == "'~'"
        ));
    }

    #[test]
    fn prefix_parselet_wired_to_foreign_kind_is_unknown_operation() {
        init_logger();
        let mut g: Grammar<Tokens, f64> = Grammar::new();
        g.register_prefix(CalcTokenKind::Number, NumberParselet).unwrap();
        g.register_prefix(
            CalcTokenKind::Bang,
            PrefixOperatorParselet::new(Precedence::Prefix),
        )
        .unwrap();
        let tokens = vec![op(CalcTokenKind::Bang, 0), num("2", 1)];
        let err = Parser::new(&g, tokens.into_iter())
            .parse_expression()
            .unwrap_err();
        assert_eq!(err.to_string(), "unknown operation for '!'");
    }

    #[test]
    fn group_requires_closing_paren() {
        init_logger();
        let mut g: Grammar<Tokens, f64> = Grammar::new();
        g.register_prefix(CalcTokenKind::Number, NumberParselet).unwrap();
        g.register_prefix(CalcTokenKind::LeftParen, GroupParselet).unwrap();
        let tokens = vec![op(CalcTokenKind::LeftParen, 0), num("5", 1)];
        let err = Parser::new(&g, tokens.into_iter())
            .parse_expression()
            .unwrap_err();
        assert!(matches!(
            err,
            ParseError::Expected { ref expected, ref found, span: Some(s) }
                if expected == "')'" && found == "end of input" && s.start == 2
        ));
    }

    #[test]
    fn associativity_accessor() {
        let p = BinaryOperatorParselet::new(Precedence::Exponent, Assoc::Right);
        assert_eq!(p.assoc(), Assoc::Right);
        assert_eq!(
            <BinaryOperatorParselet as InfixParselet<Tokens, f64>>::precedence(&p),
            usize::from(Precedence::Exponent)
        );
    }
}
