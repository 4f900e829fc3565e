/*!
Reports from a search.

- A [Report] is the result of a search as a whole.
- A [Step] is the record of a single flip, given to the [step callback](crate::context::GenericContext::set_callback_step) of a context.
*/

use crate::structures::atom::Atom;

/// High-level reports regarding a search.
///
/// Note, as the search is incomplete a failure to find a satisfying valuation is not evidence that the formula is unsatisfiable.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Report {
    /// A valuation satisfying every clause of the formula was found.
    Satisfiable,

    /// A (WalkSAT or bounded GSAT) search made the maximum number of flips without satisfying every clause.
    SearchExhausted,

    /// Every permitted restart ended without satisfying every clause.
    RestartsExhausted,

    /// The search was stopped before any bound was reached.
    Unknown,
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::SearchExhausted => write!(f, "Search exhausted"),
            Self::RestartsExhausted => write!(f, "Restarts exhausted"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

/// How the atom of a step was chosen.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum StepKind {
    /// Chosen at random.
    Random,

    /// Chosen at random from the atoms whose flip satisfies the most clauses.
    Greedy,
}

/// A record of a single flip.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Step {
    /// The restart the step belongs to, from 0.
    pub restart: usize,

    /// The count of flips in the current search, including this step.
    pub iteration: usize,

    /// How the atom was chosen.
    pub kind: StepKind,

    /// The atom flipped.
    pub atom: Atom,

    /// The count of satisfied clauses after the flip.
    pub satisfied: usize,

    /// The count of clauses in the formula.
    pub clause_count: usize,
}
