/*!
A GSAT search.

Each step of GSAT flips some atom of the formula:
- A greedy step scores every atom and flips some atom from the tie set.
- A random step flips any atom.

A greedy step is taken with probability given by the [threshold](crate::config::Config::threshold).

GSAT does not bound the number of flips, and so may not halt on an unsatisfiable formula.
Instead, the caller may bound the search with [gsat_flip_limit](crate::config::Config::gsat_flip_limit) or a [terminate callback](crate::context::GenericContext::set_callback_terminate).

```rust
# use otter_sls::context::Context;
# use otter_sls::config::Config;
# use otter_sls::reports::Report;
let mut config = Config::default();
config.gsat_flip_limit.value = 1000;
let mut the_context = Context::from_config(config);

for clause in ["p q", "-p q", "p -q"] {
    let clause = the_context.clause_from_string(clause).unwrap();
    the_context.add_clause(clause).unwrap();
}

assert_eq!(the_context.gsat(), Ok(Report::Satisfiable));
assert_eq!(the_context.value_of("p"), Ok(true));
assert_eq!(the_context.value_of("q"), Ok(true));
```
*/

use crate::{
    context::GenericContext,
    misc::log::targets::{self},
    reports::{Report, Step, StepKind},
    structures::atom::Atom,
    types::err::{self, ErrorKind},
};

impl<R: rand::Rng> GenericContext<R> {
    /// A GSAT search from a fresh random valuation.
    pub fn gsat(&mut self) -> Result<Report, ErrorKind> {
        self.counters.restarts = 0;
        self.begin_search();
        let clause_count = self.formula.clause_count();
        let limit = self.config.gsat_flip_limit.value;

        let mut satisfied = self.evaluate(false)?.satisfied;
        log::info!(target: targets::SEARCH, "GSAT from {satisfied} of {clause_count} satisfied clauses");

        while satisfied != clause_count {
            if limit != 0 && self.counters.flips >= limit {
                return Ok(self.end_search(Report::SearchExhausted));
            }
            if self.check_callback_terminate() {
                return Ok(self.end_search(Report::Unknown));
            }

            let step = self.gsat_step()?;
            satisfied = step.satisfied;
            self.note_step(&step);
        }

        Ok(self.end_search(Report::Satisfiable))
    }

    /// Makes a single GSAT step.
    pub fn gsat_step(&mut self) -> Result<Step, ErrorKind> {
        let atom_count = self.formula.atom_count() as Atom;

        let kind = self.choose_step_kind(self.config.threshold.value)?;
        let atom = match kind {
            StepKind::Random => {
                if atom_count == 0 {
                    return Err(err::StateError::NoCandidates.into());
                }
                self.rng.gen_range(0..atom_count)
            }

            StepKind::Greedy => {
                let candidates = (0..atom_count).collect::<Vec<_>>();
                let ties = self.score_atoms(&candidates)?;
                self.choose_from(&ties)?
            }
        };

        self.flip(atom)?;
        let evaluation = self.evaluate(false)?;

        Ok(Step {
            restart: self.counters.restarts,
            iteration: self.counters.flips + 1,
            kind,
            atom,
            satisfied: evaluation.satisfied,
            clause_count: self.formula.clause_count(),
        })
    }
}
