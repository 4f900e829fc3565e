//! Searches for a valuation which satisfies the formula of a context, using the configured algorithm.

use crate::{
    config::Algorithm,
    context::GenericContext,
    misc::log::targets::{self},
    reports::Report,
    types::err::ErrorKind,
};

impl<R: rand::Rng> GenericContext<R> {
    /// Searches with the algorithm given by [algorithm](crate::config::Config::algorithm).
    ///
    /// ```rust
    /// # use otter_sls::context::Context;
    /// # use otter_sls::config::{Algorithm, Config};
    /// # use otter_sls::reports::Report;
    /// let mut config = Config::default();
    /// config.algorithm.value = Algorithm::WalkSAT;
    /// let mut the_context = Context::from_config(config);
    ///
    /// let clause = the_context.clause_from_string("-p -q").unwrap();
    /// the_context.add_clause(clause).unwrap();
    ///
    /// assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
    /// assert!(the_context.clause_from_string("p").is_err());
    /// ```
    pub fn solve(&mut self) -> Result<Report, ErrorKind> {
        let this_total_time = std::time::Instant::now();
        let algorithm = self.config.algorithm.value;
        log::info!(target: targets::SEARCH, "Solve with {algorithm} over {} atoms and {} clauses", self.formula.atom_count(), self.formula.clause_count());

        let report = match algorithm {
            Algorithm::GSAT => self.gsat(),
            Algorithm::WalkSAT => self.walksat(),
            Algorithm::AgingWalkSAT => self.aging_walksat(),
            Algorithm::ResetWalkSAT => self.reset_walksat(),
        };

        self.counters.time = this_total_time.elapsed();
        report
    }
}
