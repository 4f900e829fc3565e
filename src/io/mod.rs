//! Input and output of valuations.
//!
//! Formulas are read through the [builder](crate::builder).

pub mod solution;
