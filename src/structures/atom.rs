/*!
(The internal representation of) an atom (aka. a 'variable').

Atoms are things with a name to which assigning a (boolean) value is of interest.
- 'Internal' atoms are dense indices used throughout a search.
- 'External' atoms are the names found in a formula source, e.g. `p`, `cell_1_1_9`, `96`. \
  An external atom is any string of non-whitespace characters which does not begin with '-' (a minus sign).

Each internal atom is a u32 *u* such that either *u* is 0, or *u - 1* is an atom.
That is, the atoms of a formula are [0..*n*) for some *n*, and so an atom may be used as the index of a valuation.

```rust
# use otter_sls::structures::atom::Atom;
let n = 9;
let atoms = (0..n).collect::<Vec<Atom>>();
assert_eq!(atoms.last(), Some(&8));
```

The mapping between external and internal atoms is stored in the [formula](crate::structures::formula).
*/

/// An atom, aka. a 'variable'.
pub type Atom = u32;

/// The maximum instance of an atom.
pub const ATOM_MAX: Atom = Atom::MAX - 1;
