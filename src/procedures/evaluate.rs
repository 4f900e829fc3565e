/*!
Evaluation of a formula on a valuation.

Evaluation is a full pass over the clauses of a formula.
For each clause, literals are checked in order until some literal is satisfied, and so each satisfied clause is counted exactly once.

Optionally, the keys of the clauses which are not satisfied are collected.
These are the candidates of a WalkSAT step, and are returned as part of the evaluation rather than kept as some shared state.

```rust
# use otter_sls::structures::formula::Formula;
# use otter_sls::procedures::evaluate::evaluate;
let mut formula = Formula::default();
for clause in ["p q", "-p", "-q"] {
    let clause = formula.clause_from_string(clause).unwrap();
    formula.add_clause(clause).unwrap();
}

let evaluation = evaluate(&formula, &vec![true, false], true).unwrap();
assert_eq!(evaluation.satisfied, 2);
assert_eq!(evaluation.unsatisfied, Some(vec![1]));
```
*/

use crate::{
    context::GenericContext,
    misc::log::targets::{self},
    structures::{
        clause::Clause,
        formula::{ClauseKey, Formula},
        valuation::Valuation,
    },
    types::err::{self, ErrorKind},
};

/// The result of evaluating a formula.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Evaluation {
    /// A count of the satisfied clauses.
    pub satisfied: usize,

    /// The keys of unsatisfied clauses, in clause order, if collected.
    pub unsatisfied: Option<Vec<ClauseKey>>,
}

impl Evaluation {
    /// Whether every clause of a formula with `clause_count` clauses is satisfied.
    pub fn all_satisfied(&self, clause_count: usize) -> bool {
        self.satisfied == clause_count
    }
}

/// Evaluates `formula` on `valuation`, collecting the keys of unsatisfied clauses if `track` is true.
///
/// The valuation must value exactly the atoms of the formula.
pub fn evaluate(
    formula: &Formula,
    valuation: &impl Valuation,
    track: bool,
) -> Result<Evaluation, ErrorKind> {
    if valuation.atom_count() != formula.atom_count() {
        log::error!(target: targets::EVALUATION, "Valuation of {} atoms for a formula of {} atoms", valuation.atom_count(), formula.atom_count());
        return Err(err::ValuationError::Incomplete {
            expected: formula.atom_count(),
            found: valuation.atom_count(),
        }
        .into());
    }

    let mut satisfied = 0;
    let mut unsatisfied = match track {
        true => Some(Vec::default()),
        false => None,
    };

    for (key, clause) in formula.clauses().iter().enumerate() {
        if clause.satisfied_on(valuation) {
            satisfied += 1;
        } else if let Some(keys) = &mut unsatisfied {
            keys.push(key);
        }
    }

    Ok(Evaluation {
        satisfied,
        unsatisfied,
    })
}

impl<R: rand::Rng> GenericContext<R> {
    /// Evaluates the formula of the context on the current valuation.
    pub fn evaluate(&mut self, track: bool) -> Result<Evaluation, ErrorKind> {
        self.counters.evaluations += 1;
        evaluate(&self.formula, &self.valuation, track)
    }
}

#[cfg(test)]
mod evaluate_tests {
    use super::*;
    use crate::structures::{literal::Literal, valuation::CValuation};

    fn formula_from(clauses: &[&str]) -> Formula {
        let mut formula = Formula::default();
        for clause in clauses {
            let clause = formula.clause_from_string(clause).unwrap();
            formula.add_clause(clause).unwrap();
        }
        formula
    }

    #[test]
    fn bounds_and_agreement() {
        let formula = formula_from(&["a b", "-a c", "-b -c", "a -a", "c"]);
        let atoms = formula.atom_count();

        for bits in 0..(1_usize << atoms) {
            let valuation: CValuation = (0..atoms).map(|a| bits & (1 << a) != 0).collect();
            let evaluation = evaluate(&formula, &valuation, true).unwrap();

            assert!(evaluation.satisfied <= formula.clause_count());

            let unsatisfied = evaluation.unsatisfied.unwrap();
            assert_eq!(evaluation.satisfied + unsatisfied.len(), formula.clause_count());

            for (key, clause) in formula.clauses().iter().enumerate() {
                let direct = clause
                    .iter()
                    .any(|literal| valuation[literal.atom() as usize] == literal.polarity());
                assert_eq!(direct, !unsatisfied.contains(&key));
            }
        }
    }

    #[test]
    fn untracked() {
        let formula = formula_from(&["a b"]);
        let evaluation = evaluate(&formula, &vec![false, false], false).unwrap();
        assert_eq!(evaluation.satisfied, 0);
        assert_eq!(evaluation.unsatisfied, None);
    }

    #[test]
    fn tautology_counts_once() {
        let formula = formula_from(&["a -a"]);
        for value in [true, false] {
            let evaluation = evaluate(&formula, &vec![value], false).unwrap();
            assert_eq!(evaluation.satisfied, 1);
        }
    }

    #[test]
    fn incomplete_valuation() {
        let formula = formula_from(&["a b"]);
        assert_eq!(
            evaluate(&formula, &vec![true], false),
            Err(ErrorKind::Valuation(err::ValuationError::Incomplete {
                expected: 2,
                found: 1
            }))
        );
    }
}
