/// The search algorithms supported by a context.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, clap::ValueEnum)]
#[allow(clippy::upper_case_acronyms)]
pub enum Algorithm {
    /// Greedy hill-climbing: score every atom, flip one of the best.
    #[value(name = "gsat")]
    GSAT = 0,

    /// Focus on a random unsatisfied clause, and flip one of its atoms.
    #[value(name = "walksat")]
    WalkSAT,

    /// WalkSAT, where greedy steps become more likely as more clauses are satisfied.
    #[value(name = "aging-walksat")]
    AgingWalkSAT,

    /// WalkSAT, restarted from a fresh valuation a bounded number of times.
    #[default]
    #[value(name = "reset-walksat")]
    ResetWalkSAT,
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GSAT => write!(f, "gsat"),
            Self::WalkSAT => write!(f, "walksat"),
            Self::AgingWalkSAT => write!(f, "aging-walksat"),
            Self::ResetWalkSAT => write!(f, "reset-walksat"),
        }
    }
}

impl Algorithm {
    /// The minimum Algorithm type.
    pub const MIN: Algorithm = Algorithm::GSAT;

    /// The maximum Algorithm type.
    pub const MAX: Algorithm = Algorithm::ResetWalkSAT;
}
