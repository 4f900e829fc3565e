use std::time::Duration;

/// Counts for various things which count, roughly.
#[derive(Clone, Debug, Default)]
pub struct Counters {
    /// A count of every flip made, across all searches.
    pub total_flips: usize,

    /// A count of flips made in the current (or most recent) search.
    pub flips: usize,

    /// A count of flips made by random choice.
    pub random_steps: usize,

    /// A count of flips made by greedy choice.
    pub greedy_steps: usize,

    /// A count of full evaluations of the formula, including those made when scoring.
    pub evaluations: usize,

    /// The index of the current (or most recent) restart.
    pub restarts: usize,

    /// The time taken during the most recent solve.
    pub time: Duration,
}
