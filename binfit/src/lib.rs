//! Selection of reusable bin sizes covering a load.
//!
//! Given a load and a set of bin sizes (each usable any number of times), the solvers in this crate
//! look for the combination(s) of bins whose summed capacity covers the load.
//! Two objectives compete: the overcapacity (sum minus load) and the number of bins used.
//! Each [`strategies::Solver`] ranks the candidates produced by the [`enumerate::Enumerator`] differently.

/// Immutable problem definition, candidate combinations and solutions
pub mod entities;

/// Lazy generation of every feasible combination, layered by length
pub mod enumerate;

/// Scoring of a combination on both objectives
pub mod eval;

/// The solving strategies
pub mod strategies;

/// Maps strategy identifiers to solvers
pub mod factory;

mod config;
mod error;

/// Helper functions which do not belong to any specific module
pub mod util;

#[doc(inline)]
pub use config::{SolverConfig, TieBreak};
#[doc(inline)]
pub use error::{BinFitError, Result};
