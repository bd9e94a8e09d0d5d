//! Operator precedence and associativity.
//!
//! [`Precedence`] is a small totally ordered scale shared by all grammars
//! built on this crate. Higher levels bind tighter. Kinds that have no infix
//! parselet report [`NON_OPER_PREC`], which is lower than every level, so the
//! precedence-climbing loop always stops at them.
//!
//! [`Assoc`] selects how an infix parselet recurses into its right operand:
//!
//! | Variant | Right operand parsed at |
//! |----------|--------------|
//! | [`Assoc::Left`]  | the operator's own precedence |
//! | [`Assoc::Right`] | one below the operator's precedence |

use smartstring::alias::String;
use std::fmt;

/// Precedence reported for tokens without an infix parselet.
pub const NON_OPER_PREC: usize = 0;

/// Binding strength levels, lowest to highest.
///
/// Only `Sum`, `Product`, `Exponent` and `Prefix` are used by the arithmetic
/// grammar; the remaining levels complete the scale for richer grammars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Precedence {
    Assignment = 1,
    Conditional = 2,
    Sum = 3,
    Product = 4,
    Exponent = 5,
    Prefix = 6,
    Postfix = 7,
    Call = 8,
}

impl Precedence {
    /// Lowercase names of each level, in ascending order.
    pub const STRS: &[&str] = &[
        "assignment",
        "conditional",
        "sum",
        "product",
        "exponent",
        "prefix",
        "postfix",
        "call",
    ];

    /// The threshold below every level.
    pub const LOWEST: usize = NON_OPER_PREC;
}

impl From<Precedence> for usize {
    /// Converts a [`Precedence`] into its numeric level (1–8).
    fn from(p: Precedence) -> Self {
        p as usize
    }
}

impl From<Precedence> for String {
    fn from(p: Precedence) -> Self {
        Precedence::STRS[usize::from(p) - 1].into()
    }
}

impl fmt::Display for Precedence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(String::from(*self).as_str())
    }
}

/// Operator associativity classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Assoc {
    /// Left-associative: `a - b - c` is `(a - b) - c`.
    Left = 0,
    /// Right-associative: `a ^ b ^ c` is `a ^ (b ^ c)`.
    Right = 1,
}

impl Assoc {
    /// Canonical string representations for each variant.
    pub const STRS: &[&str] = &["left", "right"];

    /// Threshold at which an infix operator of precedence `prec` parses its
    /// right operand.
    ///
    /// Lowering the threshold by one for right-associative operators lets an
    /// operator of equal precedence on the right be captured by the recursive
    /// call instead of being returned to the outer loop.
    #[inline]
    pub fn right_operand_prec(self, prec: usize) -> usize {
        match self {
            Assoc::Left => prec,
            Assoc::Right => prec.saturating_sub(1),
        }
    }
}

impl From<Assoc> for usize {
    fn from(a: Assoc) -> Self {
        a as usize
    }
}

impl From<Assoc> for String {
    fn from(a: Assoc) -> Self {
        Assoc::STRS[usize::from(a)].into()
    }
}

impl fmt::Display for Assoc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(String::from(*self).as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCALE: [Precedence; 8] = [
        Precedence::Assignment,
        Precedence::Conditional,
        Precedence::Sum,
        Precedence::Product,
        Precedence::Exponent,
        Precedence::Prefix,
        Precedence::Postfix,
        Precedence::Call,
    ];

    #[test]
    fn precedence_scale_is_ordered() {
        for pair in SCALE.windows(2) {
            assert!(pair[0] < pair[1]);
            assert!(usize::from(pair[0]) < usize::from(pair[1]));
        }
        assert!(NON_OPER_PREC < usize::from(Precedence::Assignment));
    }

    #[test]
    fn precedence_names_follow_scale() {
        for (p, name) in SCALE.into_iter().zip(Precedence::STRS) {
            assert_eq!(p.to_string(), *name);
        }
        assert_eq!(Precedence::Exponent.to_string(), "exponent");
    }

    #[test]
    fn assoc_adjusts_right_operand_threshold() {
        let exp = usize::from(Precedence::Exponent);
        assert_eq!(Assoc::Left.right_operand_prec(exp), exp);
        assert_eq!(Assoc::Right.right_operand_prec(exp), exp - 1);
        assert_eq!(Assoc::Right.right_operand_prec(0), 0);
    }

    #[test]
    fn assoc_display() {
        assert_eq!(Assoc::Left.to_string(), "left");
        assert_eq!(Assoc::Right.to_string(), "right");
    }
}
