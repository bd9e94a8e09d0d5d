//! # Calculator Lexer
//!
//! [`CalcLexer`] turns one line of text into an infinite stream of
//! [`CalcToken`]s: the tokens of the line, then end-of-input tokens forever.
//! The stream is pulled lazily through [`Iterator`] and cannot be restarted;
//! the cursor only moves forward.
//!
//! Scanning rules, applied at each cursor position:
//!
//! - a punctuator glyph `( ) + - * / ^ ~ !` yields a one-character token,
//! - an ASCII digit starts a number: digits, then optionally the configured
//!   decimal separator followed by more digits (maximal munch). A separator
//!   with no digits after it is still part of the number, so `"12."` is one
//!   token with text `"12."`,
//! - anything else (whitespace, letters, stray symbols) is skipped silently.
//!
//! The lexer never fails.

use crate::{CalcToken, CalcTokenKind, LexerConfig};
use pratt::{Span, Token};
use std::iter::FusedIterator;

/// Counters collected while lexing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LexerStats {
    /// Characters read by the cursor.
    pub chars: usize,
    /// Characters skipped because they start no token.
    pub skipped: usize,
    /// Tokens produced, end-of-input tokens included.
    pub tokens: usize,
}

/// Tokenizer for a single line of calculator input.
///
/// # Example
/// ```rust
/// # use pratt_calc::{CalcLexer, CalcTokenKind, LexerConfig};
/// # use pratt::Token;
/// let kinds: Vec<_> = CalcLexer::new("-1.5 * 2", LexerConfig::default())
///     .take(5)
///     .map(|t| t.kind())
///     .collect();
/// assert_eq!(
///     kinds,
///     [
///         CalcTokenKind::Minus,
///         CalcTokenKind::Number,
///         CalcTokenKind::Asterisk,
///         CalcTokenKind::Number,
///         CalcTokenKind::End,
///     ]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct CalcLexer {
    input: Vec<char>,
    pos: usize,
    config: LexerConfig,
    stats: LexerStats,
}

impl CalcLexer {
    /// Creates a lexer over `input`.
    pub fn new(input: &str, config: LexerConfig) -> Self {
        Self {
            input: input.chars().collect(),
            pos: 0,
            config,
            stats: LexerStats::default(),
        }
    }

    /// Counters collected so far.
    pub fn stats(&self) -> LexerStats {
        self.stats.clone()
    }

    #[inline]
    fn peek(&self) -> Option<char> {
        self.input.get(self.pos).copied()
    }

    #[inline]
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        self.stats.chars += 1;
        Some(c)
    }

    fn skip_digits(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
    }

    /// Scans the rest of a number whose first digit is already consumed.
    fn scan_number(&mut self, start: usize) -> CalcToken {
        self.skip_digits();
        if self.peek() == Some(self.config.decimal_separator) {
            self.advance();
            self.skip_digits();
        }
        let text: String = self.input[start..self.pos].iter().collect();
        CalcToken::new(CalcTokenKind::Number, &text, Some(Span::new(start, self.pos)))
    }

    /// Produces the next token.
    fn scan(&mut self) -> CalcToken {
        while let Some(c) = self.advance() {
            let start = self.pos - 1;
            if let Some(kind) = CalcTokenKind::from_punctuator(c) {
                let span = Some(Span::new(start, self.pos));
                return CalcToken::new(kind, c.encode_utf8(&mut [0; 4]), span);
            }
            if c.is_ascii_digit() {
                return self.scan_number(start);
            }
            self.stats.skipped += 1;
        }
        CalcToken::end(Some(Span::new(self.pos, self.pos)))
    }
}

impl Iterator for CalcLexer {
    type Item = CalcToken;

    /// Never returns `None`.
    fn next(&mut self) -> Option<CalcToken> {
        let token = self.scan();
        self.stats.tokens += 1;
        log::trace!("TOKEN: {:?} {:?} at {:?}", token.kind(), token.text(), token.span());
        Some(token)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl FusedIterator for CalcLexer {}

#[cfg(test)]
mod tests {
    use super::*;
    use pratt::span;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn lex(s: &str) -> Vec<(CalcTokenKind, String)> {
        CalcLexer::new(s, LexerConfig::default())
            .take_while(|t| !t.is_end())
            .map(|t| (t.kind(), t.text().to_string()))
            .collect()
    }

    #[test]
    fn punctuators_and_numbers() {
        init_logger();
        use CalcTokenKind::*;
        assert_eq!(
            lex("(1 + 23) * 4 / 5 ^ 6 - ~!"),
            [
                (LeftParen, "(".to_string()),
                (Number, "1".to_string()),
                (Plus, "+".to_string()),
                (Number, "23".to_string()),
                (RightParen, ")".to_string()),
                (Asterisk, "*".to_string()),
                (Number, "4".to_string()),
                (Slash, "/".to_string()),
                (Number, "5".to_string()),
                (Caret, "^".to_string()),
                (Number, "6".to_string()),
                (Minus, "-".to_string()),
                (Tilde, "~".to_string()),
                (Bang, "!".to_string()),
            ]
        );
    }

    #[test]
    fn number_text_is_exact_substring() {
        init_logger();
        assert_eq!(lex("123.1"), [(CalcTokenKind::Number, "123.1".to_string())]);
        assert_eq!(lex("007"), [(CalcTokenKind::Number, "007".to_string())]);
    }

    #[test]
    fn trailing_separator_is_consumed() {
        init_logger();
        assert_eq!(
            lex("12.+3"),
            [
                (CalcTokenKind::Number, "12.".to_string()),
                (CalcTokenKind::Plus, "+".to_string()),
                (CalcTokenKind::Number, "3".to_string()),
            ]
        );
    }

    #[test]
    fn only_one_separator_per_number() {
        init_logger();
        assert_eq!(
            lex("1.2.3"),
            [
                (CalcTokenKind::Number, "1.2".to_string()),
                (CalcTokenKind::Number, "3".to_string()),
            ]
        );
    }

    #[test]
    fn leading_separator_is_skipped() {
        init_logger();
        assert_eq!(lex(".5"), [(CalcTokenKind::Number, "5".to_string())]);
    }

    #[test]
    fn custom_separator() {
        init_logger();
        let config = LexerConfig::with_decimal_separator(',').unwrap();
        let tokens: Vec<_> = CalcLexer::new("3,25 . 1", config).take(3).collect();
        assert_eq!(tokens[0].text(), "3,25");
        assert_eq!(tokens[1].text(), "1");
        assert!(tokens[2].is_end());
    }

    #[test]
    fn unrecognised_characters_are_skipped() {
        init_logger();
        let mut lexer = CalcLexer::new(" x\t1 $ y", LexerConfig::default());
        let t = lexer.next().unwrap();
        assert_eq!(t.text(), "1");
        assert_eq!(t.span(), span!(3, 4));
        assert!(lexer.next().unwrap().is_end());
        assert_eq!(lexer.stats().skipped, 7);
    }

    #[test]
    fn end_tokens_repeat_forever() {
        init_logger();
        let mut lexer = CalcLexer::new("7", LexerConfig::default());
        assert_eq!(lexer.next().unwrap().kind(), CalcTokenKind::Number);
        for _ in 0..1000 {
            let t = lexer.next().unwrap();
            assert!(t.is_end());
            assert_eq!(t.text(), "");
            assert_eq!(t.span(), span!(1, 1));
        }
        assert_eq!(lexer.stats().tokens, 1001);
        assert_eq!(lexer.stats().chars, 1);
    }

    #[test]
    fn empty_input_yields_end() {
        init_logger();
        let mut lexer = CalcLexer::new("", LexerConfig::default());
        assert!(lexer.next().unwrap().is_end());
        assert!(lex("   ").is_empty());
    }

    #[test]
    fn spans_count_characters_not_bytes() {
        init_logger();
        let tokens: Vec<_> = CalcLexer::new("é+2", LexerConfig::default()).take(2).collect();
        assert_eq!(tokens[0].span(), span!(1, 2));
        assert_eq!(tokens[1].span(), span!(2, 3));
    }
}
