/*!
Configuration of a context.

All configuration of a search is contained within a [Config], made of [ConfigOption]s which record the bounds of each option alongside its value.

```rust
# use otter_sls::config::{Algorithm, Config};
let mut config = Config::default();

assert!(config.threshold.set(0.5).is_ok());
assert!(config.threshold.set(1.5).is_err());

assert!(config.algorithm.set(Algorithm::GSAT).is_ok());
```

The default configuration follows the parameters common to the WalkSAT literature:
- A greedy step is taken with probability 0.7, otherwise a random step.
- WalkSAT gives up after 100,000 flips.
- Restarts are bounded at 10.
*/

mod algorithm;
pub use algorithm::Algorithm;

mod config_option;
pub use config_option::ConfigOption;

/// Representation for the probability of some event.
pub type Probability = f64;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The algorithm used by [solve](crate::context::GenericContext::solve).
    pub algorithm: ConfigOption<Algorithm>,

    /// The probability of taking a greedy (scored) step, rather than a random step.
    ///
    /// Aging WalkSAT ignores this value in favour of the proportion of satisfied clauses.
    pub threshold: ConfigOption<Probability>,

    /// The maximum number of flips in a single WalkSAT search.
    pub max_flips: ConfigOption<usize>,

    /// The maximum number of WalkSAT searches made when restarting.
    pub restarts: ConfigOption<usize>,

    /// The maximum number of flips in a GSAT search, with 0 for no limit.
    pub gsat_flip_limit: ConfigOption<usize>,

    /// The seed of the source of randomness.
    pub seed: ConfigOption<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            algorithm: ConfigOption {
                name: "algorithm",
                min: Algorithm::MIN,
                max: Algorithm::MAX,
                value: Algorithm::default(),
            },

            threshold: ConfigOption {
                name: "threshold",
                min: 0.0,
                max: 1.0,
                value: 0.7,
            },

            max_flips: ConfigOption {
                name: "max_flips",
                min: 1,
                max: usize::MAX,
                value: 100_000,
            },

            restarts: ConfigOption {
                name: "restarts",
                min: 1,
                max: usize::MAX,
                value: 10,
            },

            gsat_flip_limit: ConfigOption {
                name: "gsat_flip_limit",
                min: 0,
                max: usize::MAX,
                value: 0,
            },

            seed: ConfigOption {
                name: "seed",
                min: u64::MIN,
                max: u64::MAX,
                value: 0,
            },
        }
    }
}
