/*!
WalkSAT searches.

Each step of WalkSAT first chooses, at random, some clause which is not satisfied, and then flips some atom of that clause:
- A greedy step scores each atom of the clause and flips some atom from the tie set.
- A random step flips the atom of some literal of the clause.

The probability of a greedy step is given by the [Noise] of the search:
- For WalkSAT, the probability is the [threshold](crate::config::Config::threshold).
- For 'aging' WalkSAT, the probability is the proportion of satisfied clauses, and so the search becomes greedier as more clauses are satisfied.

A search ends when every clause is satisfied, or after [max_flips](crate::config::Config::max_flips) flips.
The valuation is checked after every flip, including the last.

```rust
# use otter_sls::context::Context;
# use otter_sls::config::Config;
# use otter_sls::reports::Report;
let mut the_context = Context::from_config(Config::default());

for clause in ["p q", "-p"] {
    let clause = the_context.clause_from_string(clause).unwrap();
    the_context.add_clause(clause).unwrap();
}

assert_eq!(the_context.aging_walksat(), Ok(Report::Satisfiable));
assert!(the_context.counters.flips <= the_context.config.max_flips.value);
```
*/

use rand::seq::SliceRandom;

use crate::{
    config::Probability,
    context::GenericContext,
    misc::log::targets::{self},
    procedures::evaluate::Evaluation,
    reports::{Report, Step, StepKind},
    structures::{clause::Clause, literal::Literal},
    types::err::{self, ErrorKind},
};

/// The probability of a greedy step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Noise {
    /// A fixed probability.
    Threshold(Probability),

    /// The proportion of satisfied clauses before the step.
    Aging,
}

impl<R: rand::Rng> GenericContext<R> {
    /// A WalkSAT search from a fresh random valuation, with greedy steps taken with probability given by the threshold.
    pub fn walksat(&mut self) -> Result<Report, ErrorKind> {
        self.counters.restarts = 0;
        self.walk(Noise::Threshold(self.config.threshold.value))
    }

    /// A WalkSAT search from a fresh random valuation, with greedy steps taken with probability given by the proportion of satisfied clauses.
    pub fn aging_walksat(&mut self) -> Result<Report, ErrorKind> {
        self.counters.restarts = 0;
        self.walk(Noise::Aging)
    }

    /// A WalkSAT search with the given noise.
    pub fn walk(&mut self, noise: Noise) -> Result<Report, ErrorKind> {
        self.begin_search();
        let clause_count = self.formula.clause_count();
        let max_flips = self.config.max_flips.value;

        let mut evaluation = self.evaluate(true)?;
        log::info!(target: targets::SEARCH, "WalkSAT ({noise:?}) from {} of {clause_count} satisfied clauses", evaluation.satisfied);

        loop {
            if evaluation.all_satisfied(clause_count) {
                return Ok(self.end_search(Report::Satisfiable));
            }
            if self.counters.flips >= max_flips {
                return Ok(self.end_search(Report::SearchExhausted));
            }
            if self.check_callback_terminate() {
                return Ok(self.end_search(Report::Unknown));
            }

            let (step, next) = self.walksat_step(noise, &evaluation)?;
            self.note_step(&step);
            evaluation = next;
        }
    }

    /// Makes a single WalkSAT step from the given evaluation of the current valuation, returning the step and the evaluation after the step.
    ///
    /// The evaluation must include the unsatisfied clauses.
    pub fn walksat_step(
        &mut self,
        noise: Noise,
        evaluation: &Evaluation,
    ) -> Result<(Step, Evaluation), ErrorKind> {
        let Some(unsatisfied) = &evaluation.unsatisfied else {
            return Err(err::StateError::NoCandidates.into());
        };
        let clause_count = self.formula.clause_count();

        let greedy = match noise {
            Noise::Threshold(probability) => probability,
            Noise::Aging => evaluation.satisfied as Probability / clause_count as Probability,
        };

        let kind = self.choose_step_kind(greedy)?;
        let key = self.choose_from(unsatisfied)?;
        let Some(clause) = self.formula.clause(key) else {
            return Err(err::StateError::NoCandidates.into());
        };
        log::trace!(target: targets::SELECTION, "Clause {key}: {}", clause.as_string());

        let atom = match kind {
            StepKind::Random => match clause.choose(&mut self.rng) {
                Some(literal) => literal.atom(),
                None => return Err(err::StateError::NoCandidates.into()),
            },

            StepKind::Greedy => {
                let atoms = clause.atoms();
                let ties = self.score_atoms(&atoms)?;
                self.choose_from(&ties)?
            }
        };

        self.flip(atom)?;
        let next = self.evaluate(true)?;

        let step = Step {
            restart: self.counters.restarts,
            iteration: self.counters.flips + 1,
            kind,
            atom,
            satisfied: next.satisfied,
            clause_count,
        };

        Ok((step, next))
    }
}
