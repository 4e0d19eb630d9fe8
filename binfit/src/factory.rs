use crate::entities::{BinFitInstance, Solution};
use crate::strategies::{
    CapacityFirstSolver, ComboSolver, LengthFirstSolver, Solver, StrategyKind,
};
use crate::{BinFitError, Result, SolverConfig};
use log::debug;
use std::str::FromStr;

/// Identifier accepted by the factory: a single strategy, or `all` of them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrategySelection {
    Single(StrategyKind),
    #[default]
    All,
}

impl StrategySelection {
    /// Strategies covered by the selection, `all` expands to length, capacity, combo
    pub fn kinds(&self) -> Vec<StrategyKind> {
        match self {
            StrategySelection::Single(kind) => vec![*kind],
            StrategySelection::All => StrategyKind::ALL.to_vec(),
        }
    }
}

impl FromStr for StrategySelection {
    type Err = BinFitError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "all" => Ok(StrategySelection::All),
            _ => s.parse().map(StrategySelection::Single),
        }
    }
}

/// One of the solvers, dispatched on its [`StrategyKind`]
#[derive(Debug, Clone)]
pub enum AnySolver {
    LengthFirst(LengthFirstSolver),
    CapacityFirst(CapacityFirstSolver),
    Combo(ComboSolver),
}

impl AnySolver {
    pub fn new(kind: StrategyKind, instance: BinFitInstance, config: SolverConfig) -> Self {
        match kind {
            StrategyKind::LengthFirst => {
                AnySolver::LengthFirst(LengthFirstSolver::new(instance, config))
            }
            StrategyKind::CapacityFirst => {
                AnySolver::CapacityFirst(CapacityFirstSolver::new(instance, config))
            }
            StrategyKind::Combo => AnySolver::Combo(ComboSolver::new(instance, config)),
        }
    }
}

impl Solver for AnySolver {
    fn kind(&self) -> StrategyKind {
        match self {
            AnySolver::LengthFirst(s) => s.kind(),
            AnySolver::CapacityFirst(s) => s.kind(),
            AnySolver::Combo(s) => s.kind(),
        }
    }

    fn instance(&self) -> &BinFitInstance {
        match self {
            AnySolver::LengthFirst(s) => s.instance(),
            AnySolver::CapacityFirst(s) => s.instance(),
            AnySolver::Combo(s) => s.instance(),
        }
    }

    fn config(&self) -> &SolverConfig {
        match self {
            AnySolver::LengthFirst(s) => s.config(),
            AnySolver::CapacityFirst(s) => s.config(),
            AnySolver::Combo(s) => s.config(),
        }
    }

    fn solve(&self) -> Result<Solution> {
        match self {
            AnySolver::LengthFirst(s) => s.solve(),
            AnySolver::CapacityFirst(s) => s.solve(),
            AnySolver::Combo(s) => s.solve(),
        }
    }
}

/// Builds the solver(s) named by `strategy` (`length`, `capacity`, `combo` or `all`) for a raw load and bin sizes.
///
/// The strategy identifier is checked before the input.
pub fn create_solvers(
    strategy: &str,
    load: i64,
    bins: &[i64],
    config: SolverConfig,
) -> Result<Vec<AnySolver>> {
    let selection: StrategySelection = strategy.parse()?;
    let instance = BinFitInstance::new(load, bins)?;
    debug!(
        "[FACTORY] creating {:?} for load {} and bins {:?}",
        selection.kinds(),
        instance.load(),
        instance.bins()
    );

    let solvers = selection
        .kinds()
        .into_iter()
        .map(|kind| AnySolver::new(kind, instance.clone(), config))
        .collect();
    Ok(solvers)
}
