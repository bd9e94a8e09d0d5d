//! Parselet traits and the registries that map token kinds to them.
//!
//! A [`Grammar`] holds two dense tables indexed by [`TokenKind`]: one of
//! [`PrefixParselet`]s (constructs with no left operand) and one of
//! [`InfixParselet`]s (constructs that extend an already parsed left value).
//! Each kind has at most one parselet per fixity. A kind absent from a table
//! cannot appear in that role; the [`Parser`] fails when it meets one.
//!
//! Grammars are built once and shared by every [`Parser`] that borrows them.

use crate::{Fixity, NON_OPER_PREC, ParseError, Parser, Token, TokenKind};

/// Kind type of the tokens yielded by a token source `I`.
pub type KindOf<I> = <<I as Iterator>::Item as Token>::Kind;

/// A rule for a construct that starts an expression.
pub trait PrefixParselet<I, V>
where
    I: Iterator,
    I::Item: Token,
{
    /// Parses the construct introduced by the already consumed `token`.
    fn parse(&self, parser: &mut Parser<'_, I, V>, token: I::Item) -> Result<V, ParseError>;
}

/// A rule that combines a left value with the operator `token` and whatever
/// follows it.
pub trait InfixParselet<I, V>
where
    I: Iterator,
    I::Item: Token,
{
    /// Parses the rest of the construct introduced by the already consumed
    /// `token`, given the value to its left.
    fn parse(
        &self,
        parser: &mut Parser<'_, I, V>,
        left: V,
        token: I::Item,
    ) -> Result<V, ParseError>;

    /// Binding precedence of this parselet. Always above [`NON_OPER_PREC`].
    fn precedence(&self) -> usize;
}

type PrefixSlot<I, V> = Option<Box<dyn PrefixParselet<I, V> + Send + Sync>>;
type InfixSlot<I, V> = Option<Box<dyn InfixParselet<I, V> + Send + Sync>>;

/// Prefix and infix parselet registries for one grammar.
pub struct Grammar<I, V>
where
    I: Iterator,
    I::Item: Token,
{
    prefix: Vec<PrefixSlot<I, V>>,
    infix: Vec<InfixSlot<I, V>>,
}

impl<I, V> Grammar<I, V>
where
    I: Iterator,
    I::Item: Token,
{
    /// Creates a grammar with every slot empty.
    pub fn new() -> Self {
        let count = <KindOf<I> as TokenKind>::COUNT;
        Self {
            prefix: (0..count).map(|_| None).collect(),
            infix: (0..count).map(|_| None).collect(),
        }
    }

    /// Installs the prefix parselet for `kind`.
    ///
    /// # Errors
    /// [`ParseError::AlreadyRegistered`] if `kind` already has one.
    pub fn register_prefix<P>(&mut self, kind: KindOf<I>, parselet: P) -> Result<(), ParseError>
    where
        P: PrefixParselet<I, V> + Send + Sync + 'static,
    {
        let slot = slot_mut(&mut self.prefix, kind, Fixity::Prefix)?;
        *slot = Some(Box::new(parselet));
        log::trace!("registered prefix parselet for {:?}", kind);
        Ok(())
    }

    /// Installs the infix parselet for `kind`.
    ///
    /// # Errors
    /// [`ParseError::AlreadyRegistered`] if `kind` already has one.
    pub fn register_infix<P>(&mut self, kind: KindOf<I>, parselet: P) -> Result<(), ParseError>
    where
        P: InfixParselet<I, V> + Send + Sync + 'static,
    {
        let prec = parselet.precedence();
        let slot = slot_mut(&mut self.infix, kind, Fixity::Infix)?;
        *slot = Some(Box::new(parselet));
        log::trace!("registered infix parselet for {:?} at {}", kind, prec);
        Ok(())
    }

    /// Looks up the prefix parselet for `kind`.
    #[inline]
    pub fn prefix(&self, kind: KindOf<I>) -> Option<&(dyn PrefixParselet<I, V> + Send + Sync)> {
        let index: usize = kind.into();
        self.prefix.get(index).and_then(Option::as_deref)
    }

    /// Looks up the infix parselet for `kind`.
    #[inline]
    pub fn infix(&self, kind: KindOf<I>) -> Option<&(dyn InfixParselet<I, V> + Send + Sync)> {
        let index: usize = kind.into();
        self.infix.get(index).and_then(Option::as_deref)
    }

    /// Infix precedence of `kind`, or [`NON_OPER_PREC`] when it has no infix
    /// parselet.
    #[inline]
    pub fn precedence_of(&self, kind: KindOf<I>) -> usize {
        self.infix(kind)
            .map(|p| p.precedence())
            .unwrap_or(NON_OPER_PREC)
    }
}

impl<I, V> Default for Grammar<I, V>
where
    I: Iterator,
    I::Item: Token,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<I, V> std::fmt::Debug for Grammar<I, V>
where
    I: Iterator,
    I::Item: Token,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Grammar")
            .field("prefix", &filled(&self.prefix))
            .field("infix", &filled(&self.infix))
            .finish()
    }
}

/// Indices of the occupied slots.
fn filled<S>(slots: &[Option<S>]) -> Vec<usize> {
    slots
        .iter()
        .enumerate()
        .filter_map(|(i, slot)| slot.as_ref().map(|_| i))
        .collect()
}

// Kinds map below `TokenKind::COUNT`, so a missing slot can only mean a
// broken `Into<usize>` mapping; it is reported like a taken slot.
fn slot_mut<S, K>(
    slots: &mut [Option<S>],
    kind: K,
    fixity: Fixity,
) -> Result<&mut Option<S>, ParseError>
where
    K: TokenKind,
{
    let index: usize = kind.into();
    match slots.get_mut(index) {
        Some(slot) if slot.is_none() => Ok(slot),
        _ => Err(ParseError::AlreadyRegistered {
            kind: kind.to_string().into(),
            fixity,
        }),
    }
}
