//! Token traits consumed by the expression engine.
//!
//! The engine is independent of any concrete lexer. It only needs to know a
//! token's kind (to select a parselet), its literal text (for diagnostics and
//! literal parselets), and where it came from.

use crate::Span;
use std::fmt::{Debug, Display};

/// A closed enumeration of token kinds.
///
/// Kinds index the dense parselet tables of a [`Grammar`](crate::Grammar),
/// so `Into<usize>` must map every kind to a distinct value below
/// [`COUNT`](TokenKind::COUNT). `Display` is the rendering used in error
/// messages.
pub trait TokenKind: Copy + Debug + Display + Eq + Into<usize> {
    /// Number of kinds.
    const COUNT: usize;

    /// The end-of-input kind, repeated forever once the input is exhausted.
    const END: Self;
}

/// A classified lexical unit: a kind plus its literal text.
pub trait Token: Clone + Debug {
    /// The associated kind type used to classify this token.
    type Kind: TokenKind;

    /// Returns the token's kind.
    fn kind(&self) -> Self::Kind;

    /// Returns the exact text the token was produced from.
    fn text(&self) -> &str;

    /// Returns the source span of the token, if tracked.
    fn span(&self) -> Option<Span>;

    /// Builds an end-of-input token located at `span`.
    fn end(span: Option<Span>) -> Self;

    /// Is this the end-of-input token?
    #[inline]
    fn is_end(&self) -> bool {
        self.kind() == <Self::Kind as TokenKind>::END
    }
}
