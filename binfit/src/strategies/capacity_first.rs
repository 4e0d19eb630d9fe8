use crate::entities::{BinFitInstance, Solution};
use crate::enumerate::Enumerator;
use crate::eval::Objective;
use crate::strategies::incumbent::Incumbent;
use crate::strategies::{Solver, StrategyKind, report};
use crate::{Result, SolverConfig};
use log::debug;
use std::time::Instant;

/// Wastes as little capacity as possible, accepting more bins.
///
/// A longer combination can have strictly less overcapacity than every shorter one,
/// so all layers up to the length bound are ranked.
/// The only early exit is an exact fit: once a layer has zero overcapacity, no longer layer can compete.
#[derive(Debug, Clone)]
pub struct CapacityFirstSolver {
    instance: BinFitInstance,
    config: SolverConfig,
}

impl CapacityFirstSolver {
    pub fn new(instance: BinFitInstance, config: SolverConfig) -> Self {
        Self { instance, config }
    }
}

impl Solver for CapacityFirstSolver {
    fn kind(&self) -> StrategyKind {
        StrategyKind::CapacityFirst
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
        let mut incumbent = Incumbent::new(Objective::capacity_first);

        for (len, layer) in enumerator.layers() {
            for combination in layer {
                incumbent.offer(combination, load)?;
            }
            debug!(
                "[CF] after length {len}/{}: {} candidates, best {:?}",
                enumerator.max_len(),
                incumbent.n_candidates(),
                incumbent.objective()
            );
            if incumbent.objective().is_some_and(|o| o.overcapacity == 0) {
                debug!("[CF] exact fit at length {len}, skipping longer combinations");
                break;
            }
        }

        let solution = incumbent.into_solution(self.kind(), self.config.tie_break);
        report(self.instance(), &solution, start);
        Ok(solution)
    }
}
