//! A library for finding valuations which satisfy boolean formulas written in conjunctive normal form, by stochastic local search.
//!
//! otter_sls searches the space of complete valuations of a formula, flipping the value of one atom at a time, until every clause of the formula is satisfied or some bound on the search is reached.
//! As the search is incomplete, a search which ends without a satisfying valuation says nothing about the satisfiability of the formula.
//!
//! Four searches are supported:
//! - [GSAT](crate::procedures::gsat), which chooses among all atoms of the formula.
//! - [WalkSAT](crate::procedures::walksat), which chooses among the atoms of some unsatisfied clause.
//! - 'Aging' [WalkSAT](crate::procedures::walksat::Noise::Aging), which becomes greedier as more clauses are satisfied.
//! - [WalkSAT with restarts](crate::procedures::restart).
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [context].
//!
//! Contexts are built with a [configuration](crate::config), and clauses may be added through a [line-based](crate::context::GenericContext::read_lines) or [DIMACS](crate::context::GenericContext::read_dimacs) representation of a formula, or [programatically](crate::context::GenericContext::add_clause).
//!
//! Useful starting points, then, may be:
//! - The [procedures] to inspect the dynamics of a search.
//! - The [structures] to familiarise yourself with the abstract elements of a search and their representation (formulas, clauses, valuations, etc.)
//! - The [configuration](crate::config) to see what may be tuned.
//!
//! # Examples
//!
//! + Search for a valuation of a small formula, and write the valuation as a solution.
//!
//! ```rust
//! # use otter_sls::config::Config;
//! # use otter_sls::context::Context;
//! # use otter_sls::reports::Report;
//! let mut the_context = Context::from_config(Config::default());
//!
//! let formula = "
//! a b -c
//! -a c
//! -b
//! c
//! ";
//! assert!(the_context.read_lines(formula.as_bytes()).is_ok());
//!
//! assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
//!
//! let mut solution = Vec::default();
//! assert!(the_context.write_solution(&mut solution).is_ok());
//! assert_eq!(String::from_utf8_lossy(&solution), "a\n-b\nc\n");
//! ```
//!
//! + Observe each flip of a search.
//!
//! ```rust
//! # use otter_sls::config::{Algorithm, Config};
//! # use otter_sls::context::Context;
//! # use std::{cell::Cell, rc::Rc};
//! let mut config = Config::default();
//! config.algorithm.value = Algorithm::AgingWalkSAT;
//! config.max_flips.value = 50;
//! let mut the_context = Context::from_config(config);
//!
//! assert!(the_context.read_lines("p\n-p\n".as_bytes()).is_ok());
//!
//! let flips = Rc::new(Cell::new(0));
//! let flips_clone = flips.clone();
//! the_context.set_callback_step(Box::new(move |step| {
//!     assert_eq!(step.clause_count, 2);
//!     flips_clone.set(flips_clone.get() + 1);
//! }));
//!
//! assert!(the_context.solve().is_ok());
//! assert_eq!(flips.get(), 50);
//! ```

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]

pub mod builder;
pub mod procedures;

pub mod config;
pub mod context;
pub mod structures;
pub mod types;

pub mod generic;
pub mod io;

pub mod misc;
pub mod reports;
