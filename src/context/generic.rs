use crate::{
    config::Config,
    misc::log::targets::{self},
    reports::{Report, Step, StepKind},
    structures::{
        atom::Atom,
        formula::Formula,
        valuation::{CValuation, Valuation, ValuationMut},
    },
    types::err::{self, ErrorKind},
};

use super::{
    callbacks::{CallbackOnStep, CallbackTerminate},
    ContextState, Counters,
};

/// A generic context, parameratised to a source of randomness.
///
/// # Example
///
/// ```rust
/// # use otter_sls::context::GenericContext;
/// # use otter_sls::generic::random::MinimalPCG32;
/// # use otter_sls::config::Config;
/// # use rand::SeedableRng;
/// let context = GenericContext::from_config_and_rng(Config::default(), MinimalPCG32::seed_from_u64(7));
/// ```
pub struct GenericContext<R: rand::Rng> {
    /// The configuration of a context.
    pub config: Config,

    /// Counters related to a context/search.
    pub counters: Counters,

    /// The formula.
    /// See [formula](crate::structures::formula) for details.
    pub formula: Formula,

    /// The current valuation, empty until the first search.
    pub valuation: CValuation,

    /// The status of the context.
    pub state: ContextState,

    /// The source of rng.
    pub rng: R,

    /// Called after each flip.
    pub(super) callback_step: Option<Box<CallbackOnStep>>,

    /// Terminates procedures, if true.
    pub(super) callback_terminate: Option<Box<CallbackTerminate>>,
}

impl<R: rand::Rng> GenericContext<R> {
    /// Creates a context from some given configuration and source of randomness.
    pub fn from_config_and_rng(config: Config, rng: R) -> Self {
        Self {
            config,
            counters: Counters::default(),
            formula: Formula::default(),
            valuation: CValuation::default(),
            state: ContextState::Configuration,
            rng,
            callback_step: None,
            callback_terminate: None,
        }
    }

    /// A report on the state of the context.
    ///
    /// Only distinguishes a satisfied formula from an unknown formula, as the bound which ended a search is not part of the state of a context.
    pub fn report(&self) -> Report {
        match self.state {
            ContextState::Satisfiable => Report::Satisfiable,
            _ => Report::Unknown,
        }
    }

    /// The value of the atom with the given name, on the current valuation.
    pub fn value_of(&self, name: &str) -> Result<bool, ErrorKind> {
        let Some(atom) = self.formula.atom_of(name) else {
            return Err(err::ValuationError::UnknownName(name.to_owned()).into());
        };
        match self.valuation.value_of(atom) {
            Some(value) => Ok(value),
            None => Err(err::ValuationError::Incomplete {
                expected: self.formula.atom_count(),
                found: self.valuation.atom_count(),
            }
            .into()),
        }
    }

    /// The current valuation, as a string of (possibly negated) names separated by spaces.
    pub fn valuation_string(&self) -> String {
        self.valuation
            .atom_value_pairs()
            .filter_map(|(atom, value)| match self.formula.name_of(atom) {
                Ok(name) if value => Some(name.to_string()),
                Ok(name) => Some(format!("-{name}")),
                Err(_) => None,
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Gives each atom of the formula a value, at random.
    pub fn randomise_valuation(&mut self) {
        let atom_count = self.formula.atom_count();
        self.valuation.clear();
        self.valuation
            .extend((0..atom_count).map(|_| self.rng.gen::<bool>()));
        log::trace!(target: targets::VALUATION, "Randomised: {:?}", self.valuation);
    }

    /// Flips the value of an atom, returning the fresh value.
    pub fn flip(&mut self, atom: Atom) -> Result<bool, ErrorKind> {
        match self.valuation.flip(atom) {
            Some(value) => Ok(value),
            None => Err(err::FormulaError::AtomOutOfRange(atom).into()),
        }
    }

    /// Prepares a fresh search from a random valuation.
    pub(crate) fn begin_search(&mut self) {
        self.state = ContextState::Searching;
        self.counters.flips = 0;
        self.randomise_valuation();
    }

    /// Notes the end of a search, returning the report given.
    pub(crate) fn end_search(&mut self, report: Report) -> Report {
        self.state = match report {
            Report::Satisfiable => ContextState::Satisfiable,
            _ => ContextState::Exhausted,
        };
        log::info!(target: targets::SEARCH, "{report} after {} flips", self.counters.flips);
        report
    }

    /// Records a step in the counters and passes the step to the step callback.
    pub(crate) fn note_step(&mut self, step: &Step) {
        self.counters.flips += 1;
        self.counters.total_flips += 1;
        match step.kind {
            StepKind::Random => self.counters.random_steps += 1,
            StepKind::Greedy => self.counters.greedy_steps += 1,
        }
        log::trace!(target: targets::SEARCH, "{step:?}");
        self.call_callback_step(step);
    }
}
