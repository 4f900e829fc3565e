/*!
Scoring of candidate flips.

The score of an atom is the count of clauses satisfied after flipping the atom.
To score an atom the atom is flipped, the formula is evaluated (without collecting unsatisfied clauses), and the atom is flipped back.
So, scoring leaves the valuation exactly as it was.

[score_over] returns the tie set of the candidates: every candidate whose score is maximal.
The tie set is in candidate order and is non-empty whenever some candidate is given.
A greedy step then flips an atom chosen uniformly at random from the tie set.

```rust
# use otter_sls::structures::formula::Formula;
# use otter_sls::procedures::score::score_over;
let mut formula = Formula::default();
for clause in ["p q", "-p", "r"] {
    let clause = formula.clause_from_string(clause).unwrap();
    formula.add_clause(clause).unwrap();
}

// p, q and r are all true, and so only -p is unsatisfied.
let mut valuation = vec![true, true, true];
let ties = score_over(&formula, &mut valuation, [0, 1, 2]).unwrap();

assert_eq!(ties, vec![0]);
assert_eq!(valuation, vec![true, true, true]);
```
*/

use crate::{
    context::GenericContext,
    misc::log::targets::{self},
    procedures::evaluate::evaluate,
    structures::{
        atom::Atom,
        formula::Formula,
        valuation::{CValuation, ValuationMut},
    },
    types::err::{self, ErrorKind},
};

/// The atoms from `candidates` whose flip satisfies the most clauses of `formula`.
///
/// Candidates repeated in `candidates` are scored once.
pub fn score_over(
    formula: &Formula,
    valuation: &mut CValuation,
    candidates: impl IntoIterator<Item = Atom>,
) -> Result<Vec<Atom>, ErrorKind> {
    let mut best: Option<usize> = None;
    let mut ties: Vec<Atom> = Vec::default();

    for atom in candidates {
        if ties.contains(&atom) {
            continue;
        }

        if valuation.flip(atom).is_none() {
            return Err(err::FormulaError::AtomOutOfRange(atom).into());
        }
        let evaluation = evaluate(formula, &*valuation, false);
        valuation.flip(atom);
        let score = evaluation?.satisfied;

        match best {
            Some(best_score) if score < best_score => {}

            Some(best_score) if score == best_score => ties.push(atom),

            _ => {
                best = Some(score);
                ties.clear();
                ties.push(atom);
            }
        }
    }

    log::trace!(target: targets::SELECTION, "Score {best:?} from {ties:?}");
    Ok(ties)
}

impl<R: rand::Rng> GenericContext<R> {
    /// The tie set of `candidates` on the current valuation.
    /// See [score_over].
    pub fn score_atoms(&mut self, candidates: &[Atom]) -> Result<Vec<Atom>, ErrorKind> {
        self.counters.evaluations += candidates.len();
        score_over(&self.formula, &mut self.valuation, candidates.iter().copied())
    }
}

#[cfg(test)]
mod score_tests {
    use super::*;

    fn formula_from(clauses: &[&str]) -> Formula {
        let mut formula = Formula::default();
        for clause in clauses {
            let clause = formula.clause_from_string(clause).unwrap();
            formula.add_clause(clause).unwrap();
        }
        formula
    }

    #[test]
    fn valuation_restored() {
        let formula = formula_from(&["a b c", "-a -b", "-c d", "-d a"]);
        let mut valuation = vec![true, false, true, false];
        let before = valuation.clone();

        let ties = score_over(&formula, &mut valuation, [0, 1, 2, 3]).unwrap();

        assert!(!ties.is_empty());
        assert_eq!(valuation, before);
    }

    #[test]
    fn ties_kept_in_order() {
        // Flipping either atom satisfies every clause.
        let formula = formula_from(&["a b"]);
        let mut valuation = vec![false, false];

        let ties = score_over(&formula, &mut valuation, [1, 0]).unwrap();
        assert_eq!(ties, vec![1, 0]);
    }

    #[test]
    fn strictly_better_resets() {
        let formula = formula_from(&["a", "b", "b c"]);
        let mut valuation = vec![true, false, false];

        // Flipping a satisfies none, b satisfies all three, and c satisfies two.
        let ties = score_over(&formula, &mut valuation, [0, 1, 2]).unwrap();
        assert_eq!(ties, vec![1]);
    }

    #[test]
    fn repeated_candidates() {
        let formula = formula_from(&["a b"]);
        let mut valuation = vec![false, false];

        let ties = score_over(&formula, &mut valuation, [0, 0, 1, 0]).unwrap();
        assert_eq!(ties, vec![0, 1]);
    }

    #[test]
    fn no_candidates() {
        let formula = formula_from(&["a"]);
        let mut valuation = vec![false];

        let ties = score_over(&formula, &mut valuation, Vec::default()).unwrap();
        assert!(ties.is_empty());
    }

    #[test]
    fn out_of_range() {
        let formula = formula_from(&["a"]);
        let mut valuation = vec![false];

        assert_eq!(
            score_over(&formula, &mut valuation, [3]),
            Err(ErrorKind::Formula(err::FormulaError::AtomOutOfRange(3)))
        );
    }
}
