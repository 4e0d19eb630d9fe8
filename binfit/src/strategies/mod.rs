mod capacity_first;
mod combo;
mod incumbent;
mod length_first;

#[doc(inline)]
pub use capacity_first::CapacityFirstSolver;
#[doc(inline)]
pub use combo::ComboSolver;
#[doc(inline)]
pub use length_first::LengthFirstSolver;

use crate::entities::{BinFitInstance, Solution};
use crate::util::assertions;
use crate::{BinFitError, Result, SolverConfig};
use log::info;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::time::Instant;
use thousands::Separable;

/// A priority rule for ranking the feasible combinations of an instance.
///
/// `solve` is a pure function of the solver's instance and configuration:
/// calling it repeatedly regenerates all candidates and returns the same [`Solution`].
pub trait Solver: Send + Sync {
    fn kind(&self) -> StrategyKind;

    fn instance(&self) -> &BinFitInstance;

    fn config(&self) -> &SolverConfig;

    fn solve(&self) -> Result<Solution>;
}

/// The closed set of available strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StrategyKind {
    /// Fewest bins first, then least overcapacity
    #[serde(rename = "length")]
    LengthFirst,
    /// Least overcapacity first, then fewest bins
    #[serde(rename = "capacity")]
    CapacityFirst,
    /// Joint `(overcapacity, length)` ranking, reconciling the other two
    #[serde(rename = "combo")]
    Combo,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 3] = [
        StrategyKind::LengthFirst,
        StrategyKind::CapacityFirst,
        StrategyKind::Combo,
    ];

    /// Identifier used on the command line and in serialized output
    pub fn name(&self) -> &'static str {
        match self {
            StrategyKind::LengthFirst => "length",
            StrategyKind::CapacityFirst => "capacity",
            StrategyKind::Combo => "combo",
        }
    }

    /// Short tag prefixed to log lines
    fn tag(&self) -> &'static str {
        match self {
            StrategyKind::LengthFirst => "LF",
            StrategyKind::CapacityFirst => "CF",
            StrategyKind::Combo => "COMBO",
        }
    }
}

impl Display for StrategyKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StrategyKind {
    type Err = BinFitError;

    fn from_str(s: &str) -> Result<Self> {
        StrategyKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| BinFitError::UnknownStrategy(s.to_string()))
    }
}

fn report(instance: &BinFitInstance, solution: &Solution, start: Instant) {
    debug_assert!(assertions::solution_is_consistent(instance, solution));
    let tag = solution.strategy.tag();
    info!(
        "[{tag}] search finished in {:.3}ms ({} candidates evaluated)",
        start.elapsed().as_secs_f64() * 1000.0,
        solution.n_candidates.separate_with_commas()
    );
    match solution.objective {
        Some(objective) => info!(
            "[{tag}] {} winning combination(s) with {objective}",
            solution.combinations.len()
        ),
        None => info!("[{tag}] no feasible combination within the length bound"),
    }
}
