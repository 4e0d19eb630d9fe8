use crate::entities::Combination;
use crate::eval::Objective;
use crate::strategies::StrategyKind;
use itertools::Itertools;
use serde::Serialize;
use std::fmt::{Display, Formatter};

/// Outcome of a single [`Solver::solve`](crate::strategies::Solver::solve) call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Solution {
    pub strategy: StrategyKind,
    /// Winning combinations, tied on the strategy's ranking, in ascending order.
    /// Empty if no feasible combination exists within the length bound.
    pub combinations: Vec<Combination>,
    /// Objective shared by all winning combinations
    pub objective: Option<Objective>,
    /// Number of feasible candidates that were evaluated
    pub n_candidates: usize,
}

impl Solution {
    pub fn is_empty(&self) -> bool {
        self.combinations.is_empty()
    }

    pub fn best(&self) -> Option<&Combination> {
        self.combinations.first()
    }
}

impl Display for Solution {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.combinations.iter().join(", "))
    }
}
