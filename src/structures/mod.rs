//! Key structures, such as literals, clauses, and formulas.
//!
//! Most structures are made of a trait to capture the key features of the structure and a 'canonical' implementation of the trait.
//!
//! ## Formulas
//!
//! A formula 𝐅 is a set of [clauses](clause), interpreted as the conjunction of those clauses (and so is the conjunction of disjunctions over literals in some language).
//! Formulas are stored together with the external names of their atoms, see [formula].
//!
//! ## Valuations
//!
//! A search takes place over full valuations, i.e. every atom of a formula always has some value, and a search moves from one valuation to another by flipping the value of an atom.

pub mod atom;
pub mod clause;
pub mod formula;
pub mod literal;
pub mod valuation;
