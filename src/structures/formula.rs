/*!
A formula, as a set of clauses together with the mapping between external and internal atoms.

A formula 𝐅 is a set of [clauses](crate::structures::clause), interpreted as the conjunction of those clauses.

# Atoms

Atoms are introduced in the order their external names are first seen, and so the atoms of a formula are always the contiguous block [0..*n*).
Once a search has begun the formula of a [context](crate::context) is fixed, and so the mapping between names and atoms never changes during a search.

Both lookups are total over the atoms of a formula:

```rust
# use otter_sls::structures::formula::Formula;
let mut formula = Formula::default();
let clause = formula.clause_from_string("p -q").unwrap();
assert!(formula.add_clause(clause).is_ok());

let q = formula.atom_of("q").unwrap();
assert_eq!(formula.name_of(q), Ok("q"));
assert_eq!(formula.atom_of("r"), None);
```

# Clauses

Clauses are stored in the order they were added, and each clause is identified by its index, its [ClauseKey].

Duplicate clauses are collapsed: a clause which is (literal for literal) the same as some clause already in the formula is not added again.
As a duplicate clause is logically redundant, collapsing has no effect on satisfiability, though it does (by design of the format) have an effect on the count of satisfied clauses.
*/

use std::collections::HashMap;

use crate::{
    structures::{atom::Atom, clause::CClause},
    types::err::FormulaError,
};

/// A key to a clause of a formula: the index of the clause in order of addition.
pub type ClauseKey = usize;

/// The clauses and atoms of a formula.
#[derive(Clone, Debug, Default)]
pub struct Formula {
    /// The clauses of the formula, in order of addition.
    pub(crate) clauses: Vec<CClause>,

    /// A map from each clause to its key, to collapse duplicates.
    pub(crate) clause_keys: HashMap<CClause, ClauseKey>,

    /// External names, indexed by atom.
    pub(crate) names: Vec<String>,

    /// A map from external names to atoms.
    pub(crate) atoms: HashMap<String, Atom>,
}

impl Formula {
    /// A count of the atoms of the formula.
    pub fn atom_count(&self) -> usize {
        self.names.len()
    }

    /// A count of the (distinct) clauses of the formula.
    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }

    /// The clauses of the formula, indexed by [ClauseKey].
    pub fn clauses(&self) -> &[CClause] {
        &self.clauses
    }

    /// The clause with the given key, if it exists.
    pub fn clause(&self, key: ClauseKey) -> Option<&CClause> {
        self.clauses.get(key)
    }

    /// The atom with the given external name, if one exists.
    pub fn atom_of(&self, name: &str) -> Option<Atom> {
        self.atoms.get(name).copied()
    }

    /// The external name of an atom.
    pub fn name_of(&self, atom: Atom) -> Result<&str, FormulaError> {
        match self.names.get(atom as usize) {
            Some(name) => Ok(name.as_str()),
            None => Err(FormulaError::UnknownAtom(atom)),
        }
    }

    /// An iterator over the external names of atoms, in atom order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(|name| name.as_str())
    }
}
