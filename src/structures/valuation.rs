/*!
A function from atoms to truth values, aka. an 'assignment'.

The canonical representation of a valuation is a vector of booleans whose length is the number of atoms in a formula, such that the value of atom *a* is found at index *a*.

```rust
# use otter_sls::structures::valuation::{Valuation, ValuationMut};
let mut valuation = vec![true, false, true];

assert_eq!(valuation.value_of(1), Some(false));
assert_eq!(valuation.value_of(3), None);

valuation.flip(1);
assert_eq!(valuation.value_of(1), Some(true));
assert_eq!(valuation.atom_value_pairs().filter(|(_, value)| *value).count(), 3);
```

A valuation with fewer values than atoms is 'unset', and a search never evaluates an unset valuation.
Instead, the valuation of a [context](crate::context) is empty until the first search, at which point each atom is given a (uniformly) random value.

The traits are implemented for anything which can be dereferenced to a slice of booleans.
*/

use crate::structures::atom::Atom;

/// The canonical representation of a valuation.
pub type CValuation = Vec<bool>;

/// Read access to the value of atoms.
pub trait Valuation {
    /// The value of an atom, or nothing if the atom is not part of the valuation.
    fn value_of(&self, atom: Atom) -> Option<bool>;

    /// An iterator through all (Atom, Value) pairs.
    fn atom_value_pairs(&self) -> impl Iterator<Item = (Atom, bool)>;

    /// A count of all the atoms in the valuation.
    fn atom_count(&self) -> usize;
}

/// Write access to the value of atoms.
pub trait ValuationMut: Valuation {
    /// Flips the value of `atom`, returning the fresh value, or nothing if the atom is not part of the valuation.
    fn flip(&mut self, atom: Atom) -> Option<bool>;
}

impl<T: std::ops::Deref<Target = [bool]>> Valuation for T {
    fn value_of(&self, atom: Atom) -> Option<bool> {
        self.get(atom as usize).copied()
    }

    fn atom_value_pairs(&self) -> impl Iterator<Item = (Atom, bool)> {
        self.iter()
            .enumerate()
            .map(|(atom, value)| (atom as Atom, *value))
    }

    fn atom_count(&self) -> usize {
        self.len()
    }
}

impl<T: std::ops::DerefMut<Target = [bool]>> ValuationMut for T {
    fn flip(&mut self, atom: Atom) -> Option<bool> {
        let value = self.get_mut(atom as usize)?;
        *value = !*value;
        Some(*value)
    }
}

#[cfg(test)]
mod valuation_tests {
    use super::*;

    #[test]
    fn flip_twice_restores() {
        let mut valuation: CValuation = vec![true, false, false, true];
        let before = valuation.clone();

        assert_eq!(valuation.flip(2), Some(true));
        assert_eq!(valuation.flip(2), Some(false));
        assert_eq!(valuation, before);
    }

    #[test]
    fn flip_outside() {
        let mut valuation: CValuation = vec![true];
        assert_eq!(valuation.flip(1), None);
        assert_eq!(valuation, vec![true]);
    }
}
