//! Various procedures for searching with a context.
//!
//! For the most part these are methods accessed via a context, and primarily placed here for documentation.
//! The exceptions are [evaluate](evaluate::evaluate) and [score_over](score::score_over), which are free functions over a formula and a valuation.

pub mod evaluate;
pub mod gsat;
pub mod restart;
pub mod score;
pub mod solve;
mod step;
pub mod walksat;
