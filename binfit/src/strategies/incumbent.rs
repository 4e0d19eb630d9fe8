use crate::entities::{Combination, Solution};
use crate::eval::Objective;
use crate::strategies::StrategyKind;
use crate::{Result, TieBreak};
use std::cmp::Ordering;

/// Combinations tied for the best rank seen so far.
/// The rank is a key derived from the [`Objective`], lower is better.
pub(crate) struct Incumbent<K> {
    rank: fn(&Objective) -> K,
    best: Option<(K, Objective)>,
    combinations: Vec<Combination>,
    n_candidates: usize,
}

impl<K: Ord> Incumbent<K> {
    pub fn new(rank: fn(&Objective) -> K) -> Self {
        Self {
            rank,
            best: None,
            combinations: vec![],
            n_candidates: 0,
        }
    }

    /// Evaluates a feasible candidate and keeps it if it ties or beats the incumbent
    pub fn offer(&mut self, combination: Combination, load: u64) -> Result<()> {
        let objective = Objective::evaluate(&combination, load)?;
        let key = (self.rank)(&objective);
        self.n_candidates += 1;

        match self.best.as_ref().map(|(best_key, _)| key.cmp(best_key)) {
            Some(Ordering::Greater) => {}
            Some(Ordering::Equal) => self.combinations.push(combination),
            Some(Ordering::Less) | None => {
                self.best = Some((key, objective));
                self.combinations = vec![combination];
            }
        }
        Ok(())
    }

    pub fn objective(&self) -> Option<Objective> {
        self.best.as_ref().map(|(_, objective)| *objective)
    }

    pub fn n_candidates(&self) -> usize {
        self.n_candidates
    }

    pub fn into_solution(self, strategy: StrategyKind, tie_break: TieBreak) -> Solution {
        let objective = self.objective();
        let mut combinations = self.combinations;
        combinations.sort();
        if tie_break == TieBreak::First {
            combinations.truncate(1);
        }
        Solution {
            strategy,
            combinations,
            objective,
            n_candidates: self.n_candidates,
        }
    }
}
