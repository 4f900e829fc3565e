//! Generic structures, unrelated to any particular search.

pub mod random;
