use crate::entities::{BinFitInstance, Solution};
use crate::enumerate::Enumerator;
use crate::eval::Objective;
use crate::strategies::incumbent::Incumbent;
use crate::strategies::{
    CapacityFirstSolver, LengthFirstSolver, Solver, StrategyKind, report,
};
use crate::{Result, SolverConfig};
use log::debug;
use std::time::Instant;

/// Default strategy for callers without a preference between the two objectives.
///
/// Runs [`LengthFirstSolver`] and [`CapacityFirstSolver`]. When both agree, their shared answer is returned.
/// Otherwise the complete candidate space is ranked on `(overcapacity, length)`.
#[derive(Debug, Clone)]
pub struct ComboSolver {
    length_first: LengthFirstSolver,
    capacity_first: CapacityFirstSolver,
}

impl ComboSolver {
    pub fn new(instance: BinFitInstance, config: SolverConfig) -> Self {
        Self {
            length_first: LengthFirstSolver::new(instance.clone(), config),
            capacity_first: CapacityFirstSolver::new(instance, config),
        }
    }
}

impl Solver for ComboSolver {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Combo
    }

    fn instance(&self) -> &BinFitInstance {
        self.capacity_first.instance()
    }

    fn config(&self) -> &SolverConfig {
        self.capacity_first.config()
    }

    fn solve(&self) -> Result<Solution> {
        let start = Instant::now();
        let by_length = self.length_first.solve()?;
        let by_capacity = self.capacity_first.solve()?;
        let n_preliminary = by_length.n_candidates + by_capacity.n_candidates;

        let solution = if by_length.combinations == by_capacity.combinations {
            debug!("[COMBO] length-first and capacity-first agree on {by_length}");
            Solution {
                strategy: self.kind(),
                n_candidates: n_preliminary,
                ..by_capacity
            }
        } else {
            debug!(
                "[COMBO] length-first {by_length} and capacity-first {by_capacity} disagree, ranking all candidates jointly"
            );
            let instance = self.instance();
            let config = self.config();
            let mut incumbent = Incumbent::new(|objective: &Objective| *objective);
            for combination in Enumerator::new(instance, config.max_len).candidates() {
                incumbent.offer(combination, instance.load())?;
            }
            let mut solution = incumbent.into_solution(self.kind(), config.tie_break);
            solution.n_candidates += n_preliminary;
            solution
        };

        report(self.instance(), &solution, start);
        Ok(solution)
    }
}
