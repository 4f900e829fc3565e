//! Literals are atoms paired with a (boolean) polarity.
//!
//! The polarity of a literal is fixed when the literal is created, and so evaluating a literal on a valuation is a comparison of the polarity against the value of the atom.
//!
//! ```rust
//! # use otter_sls::structures::literal::{CLiteral, Literal};
//! let literal = CLiteral::new(79, true);
//!
//! assert!(literal.polarity());
//! assert_eq!(literal.atom(), 79);
//! assert!(!literal.negate().polarity());
//! assert_eq!(-literal, literal.negate());
//!
//! assert!(literal.is_satisfied_by(true));
//! assert!(literal.negate().is_satisfied_by(false));
//! ```
//!
//! Literals are ordered by atom and then polarity, with `false` strictly less than `true`.

use crate::structures::atom::Atom;

/// Something which has methods for returning an atom and a polarity.
pub trait Literal: std::cmp::Ord + std::hash::Hash {
    /// A fresh literal, specified by pairing an atom with a boolean.
    fn new(atom: Atom, polarity: bool) -> Self;

    /// The negation of the literal.
    fn negate(&self) -> Self;

    /// The atom of the literal.
    fn atom(&self) -> Atom;

    /// The polarity of the literal.
    fn polarity(&self) -> bool;

    /// Whether the literal is true when its atom has the given value.
    fn is_satisfied_by(&self, value: bool) -> bool {
        self.polarity() == value
    }
}

/// The representation of a literal as an atom paired with a boolean.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ABLiteral {
    /// The atom of a literal.
    atom: Atom,

    /// The polarity of a literal.
    polarity: bool,
}

/// The canonical implementation of a literal.
pub type CLiteral = ABLiteral;

impl Literal for ABLiteral {
    fn new(atom: Atom, polarity: bool) -> Self {
        Self { atom, polarity }
    }

    fn negate(&self) -> Self {
        Self {
            atom: self.atom,
            polarity: !self.polarity,
        }
    }

    fn atom(&self) -> Atom {
        self.atom
    }

    fn polarity(&self) -> bool {
        self.polarity
    }
}

impl PartialOrd for ABLiteral {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ABLiteral {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.atom.cmp(&other.atom) {
            std::cmp::Ordering::Equal => self.polarity.cmp(&other.polarity),
            ordering => ordering,
        }
    }
}

impl std::ops::Neg for ABLiteral {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

/// Literals are written with their internal atom, as the external name is held by a formula.
impl std::fmt::Display for ABLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.polarity {
            true => write!(f, "{}", self.atom),
            false => write!(f, "-{}", self.atom),
        }
    }
}

#[cfg(test)]
mod literal_tests {
    use super::*;

    #[test]
    fn order_by_atom_then_polarity() {
        let mut literals = vec![
            CLiteral::new(2, true),
            CLiteral::new(1, true),
            CLiteral::new(2, false),
            CLiteral::new(1, false),
        ];
        literals.sort();

        assert_eq!(
            literals,
            vec![
                CLiteral::new(1, false),
                CLiteral::new(1, true),
                CLiteral::new(2, false),
                CLiteral::new(2, true),
            ]
        );
    }

    #[test]
    fn display() {
        assert_eq!(CLiteral::new(4, true).to_string(), "4");
        assert_eq!(CLiteral::new(4, false).to_string(), "-4");
    }
}
