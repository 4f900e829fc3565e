//! Choices shared by the steps of each search.

use rand::{
    distributions::{Bernoulli, Distribution},
    seq::SliceRandom,
};

use crate::{
    config::Probability,
    context::GenericContext,
    reports::StepKind,
    types::err::{self, ErrorKind},
};

impl<R: rand::Rng> GenericContext<R> {
    /// A greedy step kind with probability `greedy`, and otherwise a random step kind.
    pub(crate) fn choose_step_kind(&mut self, greedy: Probability) -> Result<StepKind, ErrorKind> {
        let Ok(distribution) = Bernoulli::new(greedy) else {
            return Err(err::ConfigError::OutOfRange(self.config.threshold.name).into());
        };
        match distribution.sample(&mut self.rng) {
            true => Ok(StepKind::Greedy),
            false => Ok(StepKind::Random),
        }
    }

    /// Some element of `candidates`, chosen uniformly at random.
    pub(crate) fn choose_from<T: Copy>(&mut self, candidates: &[T]) -> Result<T, ErrorKind> {
        match candidates.choose(&mut self.rng) {
            Some(candidate) => Ok(*candidate),
            None => Err(err::StateError::NoCandidates.into()),
        }
    }
}
