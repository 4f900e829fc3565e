/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library, and no log implementation is provided.
The CLI installs [env_logger](https://docs.rs/env_logger/latest/env_logger/) when built with the `log` feature, and so output may be narrowed by target, e.g. `RUST_LOG=restart …` or `RUST_LOG=selection=trace …`.
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [building](crate::builder) a formula.
    pub const BUILDER: &str = "builder";

    /// Logs related to [evaluation](crate::procedures::evaluate).
    pub const EVALUATION: &str = "evaluation";

    /// Logs related to [scoring and selecting](crate::procedures::score) atoms to flip.
    pub const SELECTION: &str = "selection";

    /// Logs related to the search loops.
    pub const SEARCH: &str = "search";

    /// Logs related to [restarts](crate::procedures::restart).
    pub const RESTART: &str = "restart";

    /// Logs related to a valuation.
    pub const VALUATION: &str = "valuation";
}
