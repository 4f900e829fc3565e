/*!
Tools for building a formula.

# Basic methods

The library has two basic methods for building a formula:
- [clause_from_string](crate::structures::formula::Formula::clause_from_string), to obtain a clause from a string of whitespace separated literals, introducing fresh atoms for unseen names.
- [add_clause](crate::structures::formula::Formula::add_clause), to add a clause.

And, two readers which apply these methods to each clause of some source:
- [read_lines](crate::structures::formula::Formula::read_lines), for sources with one clause per line.
- [read_dimacs](crate::structures::formula::Formula::read_dimacs), for DIMACS sources.

The same methods are available on a [context](crate::context), where the formula may only be built before a search has begun.

# Examples

```rust
# use otter_sls::structures::formula::Formula;
# use otter_sls::builder::ClauseOk;
let mut formula = Formula::default();

let clause_a = formula.clause_from_string("p -q").unwrap();
let clause_b = formula.clause_from_string("-p q").unwrap();
let clause_c = formula.clause_from_string("-q p").unwrap();

assert_eq!(formula.add_clause(clause_a), Ok(ClauseOk::Added));
assert_eq!(formula.add_clause(clause_b), Ok(ClauseOk::Added));
assert_eq!(formula.add_clause(clause_c), Ok(ClauseOk::Added));

let duplicate = formula.clause_from_string("p  -q").unwrap();
assert_eq!(formula.add_clause(duplicate), Ok(ClauseOk::Duplicate));

assert_eq!(formula.atom_count(), 2);
assert_eq!(formula.clause_count(), 3);
```
*/
mod context;
mod dimacs;
mod lines;
mod structures;

/// Ok results when adding a clause to a formula.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseOk {
    /// The clause was added to the formula.
    Added,

    /// The clause was already part of the formula (and so was not added again).
    Duplicate,
}

/// Information about a formula read from some source.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParserInfo {
    /// The count of atoms stated in a preamble, if some preamble was found.
    pub expected_atoms: Option<usize>,

    /// The count of clauses stated in a preamble, if some preamble was found.
    pub expected_clauses: Option<usize>,

    /// The count of fresh atoms introduced while reading.
    pub added_atoms: usize,

    /// The count of clauses added while reading.
    pub added_clauses: usize,

    /// The count of clauses read which were already part of the formula.
    pub duplicate_clauses: usize,
}
