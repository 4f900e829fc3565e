//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! The canonical representation of a clause is as a vector of literals.
//!
//! ```rust
//! # use otter_sls::structures::literal::{CLiteral, Literal};
//! # use otter_sls::structures::clause::Clause;
//! let clause = vec![CLiteral::new(0, true),
//!                   CLiteral::new(3, false),
//!                   CLiteral::new(1, false)];
//!
//! assert_eq!(clause.atoms(), vec![0, 3, 1]);
//!
//! let mut valuation = vec![false, true, true, true];
//! assert!(!clause.satisfied_on(&valuation));
//!
//! valuation[3] = false;
//! assert!(clause.satisfied_on(&valuation));
//! ```
//!
//! - The empty clause is never satisfied, and so may not be added to a formula.
//! - A clause may contain both a literal and its negation, in which case the clause is a tautology.

use crate::structures::{
    atom::Atom,
    literal::{CLiteral, Literal},
    valuation::Valuation,
};

/// The clause trait.
pub trait Clause {
    /// The distinct atoms of the clause, in order of first occurrence.
    fn atoms(&self) -> Vec<Atom>;

    /// Whether some literal of the clause is true on the valuation.
    ///
    /// The scan stops at the first satisfying literal.
    /// An atom without a value on the valuation does not satisfy a literal.
    fn satisfied_on(&self, valuation: &impl Valuation) -> bool;

    /// The clause as a string of internal atoms.
    fn as_string(&self) -> String;
}

/// The canonical implementation of a clause.
pub type CClause = Vec<CLiteral>;

impl Clause for [CLiteral] {
    fn atoms(&self) -> Vec<Atom> {
        let mut atoms: Vec<Atom> = Vec::with_capacity(self.len());
        for literal in self {
            if !atoms.contains(&literal.atom()) {
                atoms.push(literal.atom());
            }
        }
        atoms
    }

    fn satisfied_on(&self, valuation: &impl Valuation) -> bool {
        self.iter().any(|literal| {
            valuation
                .value_of(literal.atom())
                .is_some_and(|value| literal.is_satisfied_by(value))
        })
    }

    fn as_string(&self) -> String {
        let mut the_string = String::default();
        for literal in self {
            the_string.push_str(format!("{literal} ").as_str());
        }
        the_string.pop();
        the_string
    }
}

impl Clause for CClause {
    fn atoms(&self) -> Vec<Atom> {
        self.as_slice().atoms()
    }

    fn satisfied_on(&self, valuation: &impl Valuation) -> bool {
        self.as_slice().satisfied_on(valuation)
    }

    fn as_string(&self) -> String {
        self.as_slice().as_string()
    }
}
