use std::path::PathBuf;

use clap::Parser;
use otter_sls::{
    config::{Algorithm, Config, Probability},
    types::err::ConfigError,
};

/// Searches for a valuation which satisfies a formula, by stochastic local search.
///
/// The formula has one clause per line, each a whitespace separated list of names, with '-' marking negation.
/// On success the valuation is written to a solution file, with one (possibly negated) name per line.
#[derive(Parser, Debug)]
#[command(version, about, long_about)]
pub struct Args {
    /// The file containing the formula.
    #[arg(short, long)]
    pub formula_file: PathBuf,

    /// Read the formula as DIMACS, rather than one clause per line.
    #[arg(long)]
    pub dimacs: bool,

    /// The search to use.
    #[arg(short, long, value_enum)]
    pub algorithm: Option<Algorithm>,

    /// The probability of a greedy step. Default: 0.7
    #[arg(long)]
    pub threshold: Option<Probability>,

    /// The maximum number of flips in a single WalkSAT search. Default: 100000
    #[arg(long)]
    pub max_flips: Option<usize>,

    /// The maximum number of WalkSAT searches when restarting. Default: 10
    #[arg(long)]
    pub restarts: Option<usize>,

    /// The maximum number of flips in a GSAT search, with 0 for no limit. Default: 0
    #[arg(long)]
    pub gsat_flip_limit: Option<usize>,

    /// The seed of the source of randomness. Default: 0
    #[arg(long)]
    pub seed: Option<u64>,

    /// Where to write the solution. Default: the formula file, with the extension 'sol'.
    #[arg(short = 'o', long)]
    pub solution: Option<PathBuf>,

    /// Display the valuation on success.
    #[arg(short, long)]
    pub valuation: bool,

    /// Display stats during a search.
    #[arg(short, long)]
    pub stats: bool,
}

impl Args {
    /// A configuration with each given option, and otherwise defaults.
    pub fn config(&self) -> Result<Config, ConfigError> {
        let mut config = Config::default();

        if let Some(algorithm) = self.algorithm {
            config.algorithm.set(algorithm)?;
        }
        if let Some(threshold) = self.threshold {
            config.threshold.set(threshold)?;
        }
        if let Some(max_flips) = self.max_flips {
            config.max_flips.set(max_flips)?;
        }
        if let Some(restarts) = self.restarts {
            config.restarts.set(restarts)?;
        }
        if let Some(limit) = self.gsat_flip_limit {
            config.gsat_flip_limit.set(limit)?;
        }
        if let Some(seed) = self.seed {
            config.seed.set(seed)?;
        }

        Ok(config)
    }

    /// The path to write a solution to.
    pub fn solution_path(&self) -> PathBuf {
        match &self.solution {
            Some(path) => path.clone(),
            None => self.formula_file.with_extension("sol"),
        }
    }
}
