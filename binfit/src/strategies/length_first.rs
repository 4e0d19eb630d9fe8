use crate::entities::{BinFitInstance, Solution};
use crate::enumerate::Enumerator;
use crate::eval::Objective;
use crate::strategies::incumbent::Incumbent;
use crate::strategies::{Solver, StrategyKind, report};
use crate::{Result, SolverConfig};
use log::debug;
use std::time::Instant;

/// Uses as few bins as possible, accepting overcapacity.
///
/// Layers are generated in increasing length until one contains a feasible combination.
/// Only that layer is ranked (on overcapacity); longer layers are never generated.
#[derive(Debug, Clone)]
pub struct LengthFirstSolver {
    instance: BinFitInstance,
    config: SolverConfig,
}

impl LengthFirstSolver {
    pub fn new(instance: BinFitInstance, config: SolverConfig) -> Self {
        Self { instance, config }
    }
}

impl Solver for LengthFirstSolver {
    fn kind(&self) -> StrategyKind {
        StrategyKind::LengthFirst
    }

    fn instance(&self) -> &BinFitInstance {
        &self.instance
    }

    fn config(&self) -> &SolverConfig {
        &self.config
    }

    fn solve(&self) -> Result<Solution> {
        let start = Instant::now();
        let load = self.instance.load();
        let enumerator = Enumerator::new(&self.instance, self.config.max_len);
        let mut incumbent = Incumbent::new(Objective::length_first);

        if let Some((len, layer)) = enumerator.layers().next() {
            debug!(
                "[LF] shortest feasible length is {len} with {} candidate(s)",
                layer.len()
            );
            for combination in layer {
                incumbent.offer(combination, load)?;
            }
        }

        let solution = incumbent.into_solution(self.kind(), self.config.tie_break);
        report(self.instance(), &solution, start);
        Ok(solution)
    }
}
