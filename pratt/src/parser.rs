//! The precedence-climbing expression engine.
//!
//! [`Parser`] pulls tokens lazily from any token source, buffers them for
//! lookahead, and drives the parselets of a borrowed [`Grammar`]. It produces
//! a value directly while parsing; no tree is built unless the parselets
//! build one.
//!
//! The core loop:
//!
//! ```text
//! parse_expression_with(min):
//!     token = consume()
//!     left  = prefix[token.kind].parse(token)     or fail: no prefix parselet
//!     while min < precedence(next token):          0 when it has no infix parselet
//!         token = consume()
//!         left  = infix[token.kind].parse(left, token)
//!     return left
//! ```
//!
//! When the token source runs dry the engine synthesises end-of-input tokens
//! itself, so lookahead never fails and the loop always terminates: the end
//! kind reports [`NON_OPER_PREC`](crate::NON_OPER_PREC), which is below every
//! caller threshold.
//!
//! Parselets recurse back into `parse_expression_with`, so nesting depth is
//! bounded by [`Parser::max_depth`]. Input nested deeper fails with
//! [`ParseError::TooDeep`] instead of exhausting the stack.

use crate::{Grammar, KindOf, ParseError, Precedence, Span, Token};
use std::collections::VecDeque;

/// Default bound on nested `parse_expression_with` calls.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Counters collected while parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParserStats {
    /// Tokens pulled from the token source (or synthesised at its end).
    pub tokens: usize,
    /// Tokens consumed by the engine.
    pub consumed: usize,
    /// Prefix parselet dispatches.
    pub prefix_parses: usize,
    /// Infix parselet dispatches.
    pub infix_parses: usize,
    /// Largest number of tokens held in the lookahead buffer at once.
    pub max_lookahead: usize,
}

/// A single-use expression parser over one token source.
///
/// Construct one per input, call [`parse_expression`](Parser::parse_expression)
/// once, and drop it. Nothing persists between parsers except the shared
/// grammar.
pub struct Parser<'g, I, V>
where
    I: Iterator,
    I::Item: Token,
{
    grammar: &'g Grammar<I, V>,
    tokens: I,
    read: VecDeque<I::Item>,
    end_span: Option<Span>,
    depth: usize,
    max_depth: usize,
    stats: ParserStats,
}

impl<'g, I, V> Parser<'g, I, V>
where
    I: Iterator,
    I::Item: Token,
{
    /// Creates a parser over `tokens` driven by `grammar`.
    pub fn new(grammar: &'g Grammar<I, V>, tokens: I) -> Self {
        Self {
            grammar,
            tokens,
            read: VecDeque::new(),
            end_span: None,
            depth: 0,
            max_depth: DEFAULT_MAX_DEPTH,
            stats: ParserStats::default(),
        }
    }

    /// Sets the nesting limit (see [`DEFAULT_MAX_DEPTH`]).
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// The nesting limit.
    #[inline]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// The grammar this parser dispatches through.
    #[inline]
    pub fn grammar(&self) -> &'g Grammar<I, V> {
        self.grammar
    }

    /// Counters collected so far.
    #[inline]
    pub fn stats(&self) -> ParserStats {
        self.stats.clone()
    }

    /// Parses a full expression: `parse_expression_with(Precedence::LOWEST)`.
    #[inline]
    pub fn parse_expression(&mut self) -> Result<V, ParseError> {
        self.parse_expression_with(Precedence::LOWEST)
    }

    /// Parses an expression whose infix operators all bind tighter than
    /// `min_prec`.
    ///
    /// # Errors
    /// - [`ParseError::NoPrefix`] if the first token cannot start an
    ///   expression (including end of input).
    /// - [`ParseError::TooDeep`] if this call would nest deeper than
    ///   [`max_depth`](Parser::max_depth).
    /// - Whatever a parselet reports, unchanged.
    pub fn parse_expression_with(&mut self, min_prec: usize) -> Result<V, ParseError> {
        if self.depth >= self.max_depth {
            let span = self.look_ahead(0).span();
            log::debug!("nesting limit {} reached at {:?}", self.max_depth, span);
            return Err(ParseError::TooDeep {
                depth: self.max_depth,
                span,
            });
        }
        self.depth += 1;
        let result = self.climb(min_prec);
        self.depth -= 1;
        result
    }

    fn climb(&mut self, min_prec: usize) -> Result<V, ParseError> {
        let grammar = self.grammar;

        let token = self.consume();
        let Some(prefix) = grammar.prefix(token.kind()) else {
            return Err(ParseError::NoPrefix {
                kind: token.kind().to_string().into(),
                text: token.text().into(),
                span: token.span(),
            });
        };
        log::trace!("Prefix {:?} {:?} (min {})", token.kind(), token.text(), min_prec);
        self.stats.prefix_parses += 1;
        let mut left = prefix.parse(self, token)?;

        while min_prec < self.precedence() {
            let token = self.consume();
            let Some(infix) = grammar.infix(token.kind()) else {
                return Err(ParseError::unknown_operation(token.kind(), token.span()));
            };
            log::trace!(
                "Infix {:?} {:?} (prec {}, min {})",
                token.kind(),
                token.text(),
                infix.precedence(),
                min_prec
            );
            self.stats.infix_parses += 1;
            left = infix.parse(self, left, token)?;
        }

        Ok(left)
    }

    /// Removes and returns the oldest buffered token, pulling one from the
    /// source first if the buffer is empty.
    pub fn consume(&mut self) -> I::Item {
        self.fill(1);
        self.stats.consumed += 1;
        match self.read.pop_front() {
            Some(token) => token,
            None => <I::Item as Token>::end(self.end_span),
        }
    }

    /// Consumes the next token if it has kind `expected`.
    ///
    /// # Errors
    /// [`ParseError::Expected`] if the next token has another kind; the token
    /// is left in the buffer.
    pub fn consume_expected(&mut self, expected: KindOf<I>) -> Result<I::Item, ParseError> {
        let token = self.look_ahead(0);
        if token.kind() != expected {
            return Err(ParseError::Expected {
                expected: expected.to_string().into(),
                found: token.kind().to_string().into(),
                span: token.span(),
            });
        }
        Ok(self.consume())
    }

    /// Consumes the next token and returns `true` only if it has kind
    /// `expected`; otherwise the stream is left untouched.
    pub fn match_kind(&mut self, expected: KindOf<I>) -> bool {
        if self.look_ahead(0).kind() != expected {
            return false;
        }
        self.consume();
        true
    }

    /// Returns the token `distance` positions ahead without consuming it.
    ///
    /// Any distance is valid: past the end of the source the buffer is
    /// padded with end-of-input tokens.
    pub fn look_ahead(&mut self, distance: usize) -> &I::Item {
        self.fill(distance + 1);
        &self.read[distance]
    }

    /// Infix precedence of the next token.
    pub fn precedence(&mut self) -> usize {
        let kind = self.look_ahead(0).kind();
        self.grammar.precedence_of(kind)
    }

    /// Ensures at least `count` tokens are buffered.
    fn fill(&mut self, count: usize) {
        while self.read.len() < count {
            let token = match self.tokens.next() {
                Some(token) => token,
                None => <I::Item as Token>::end(self.end_span),
            };
            if let Some(span) = token.span() {
                self.end_span = Some(Span::new(span.end, span.end));
            }
            self.stats.tokens += 1;
            self.read.push_back(token);
        }
        self.stats.max_lookahead = self.stats.max_lookahead.max(self.read.len());
    }
}
