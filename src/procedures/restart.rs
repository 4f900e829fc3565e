/*!
WalkSAT with restarts.

Up to [restarts](crate::config::Config::restarts) independent [WalkSAT](crate::procedures::walksat) searches are made, each from a fresh random valuation and each bounded by [max_flips](crate::config::Config::max_flips).
The first search to satisfy the formula ends the sequence.

```rust
# use otter_sls::context::Context;
# use otter_sls::config::Config;
# use otter_sls::reports::Report;
let mut config = Config::default();
config.max_flips.value = 10;
config.restarts.value = 3;
let mut the_context = Context::from_config(config);

// p and -p cannot both be satisfied.
for clause in ["p", "-p"] {
    let clause = the_context.clause_from_string(clause).unwrap();
    the_context.add_clause(clause).unwrap();
}

assert_eq!(the_context.reset_walksat(), Ok(Report::RestartsExhausted));
assert_eq!(the_context.counters.total_flips, 30);
```
*/

use crate::{
    context::GenericContext,
    misc::log::targets::{self},
    procedures::walksat::Noise,
    reports::Report,
    types::err::ErrorKind,
};

impl<R: rand::Rng> GenericContext<R> {
    /// A sequence of WalkSAT searches, ending with the first search to satisfy the formula.
    pub fn reset_walksat(&mut self) -> Result<Report, ErrorKind> {
        let restarts = self.config.restarts.value;

        for restart in 0..restarts {
            self.counters.restarts = restart;
            log::info!(target: targets::RESTART, "Search {} of {restarts}", restart + 1);

            match self.walk(Noise::Threshold(self.config.threshold.value))? {
                Report::SearchExhausted => continue,
                report => return Ok(report),
            }
        }

        Ok(Report::RestartsExhausted)
    }
}
