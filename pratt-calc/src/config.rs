//! Lexer configuration.
//!
//! The only setting is the decimal separator that stands in for the locale's
//! numeric format. It is chosen once per run (the CLI's
//! `--decimal-separator` flag or the `PRATT_CALC_DECIMAL_SEPARATOR`
//! environment variable) and handed to every [`CalcLexer`](crate::CalcLexer).

use crate::CalcTokenKind;
use thiserror::Error;

/// Errors raised while validating a [`LexerConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The separator would be ambiguous with another part of the syntax.
    #[error("invalid decimal separator {0:?}: must not be a digit, whitespace or operator")]
    InvalidDecimalSeparator(char),
}

/// Settings for [`CalcLexer`](crate::CalcLexer).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexerConfig {
    /// Character separating the integer and fractional digits of a number.
    pub decimal_separator: char,
}

impl LexerConfig {
    /// Creates a configuration with the given decimal separator.
    ///
    /// # Errors
    /// See [`validate`](LexerConfig::validate).
    pub fn with_decimal_separator(decimal_separator: char) -> Result<Self, ConfigError> {
        let config = Self { decimal_separator };
        config.validate()?;
        Ok(config)
    }

    /// Rejects separators that are digits, whitespace or punctuator glyphs.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let c = self.decimal_separator;
        if c.is_ascii_digit() || c.is_whitespace() || CalcTokenKind::from_punctuator(c).is_some() {
            return Err(ConfigError::InvalidDecimalSeparator(c));
        }
        Ok(())
    }
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            decimal_separator: '.',
        }
    }
}
