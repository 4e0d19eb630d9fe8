use crate::entities::Combination;
use crate::{BinFitError, Result};
use serde::Serialize;
use std::fmt::{Display, Formatter};

/// Score of a feasible combination on both objectives.
/// The derived ordering is lexicographic: overcapacity first, then length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Objective {
    /// Capacity in excess of the load
    pub overcapacity: u64,
    /// Number of bins
    pub length: usize,
}

impl Objective {
    /// Scores `combination` against `load`.
    /// Only feasible combinations can be scored, anything below the load is invalid input.
    pub fn evaluate(combination: &Combination, load: u64) -> Result<Self> {
        let capacity = combination.capacity();
        if capacity < load {
            return Err(BinFitError::InvalidInput(format!(
                "combination {combination} has capacity {capacity}, below the load of {load}"
            )));
        }
        Ok(Self {
            overcapacity: capacity - load,
            length: combination.len(),
        })
    }

    /// Ranking key preferring fewer bins, then less overcapacity
    pub fn length_first(&self) -> (usize, u64) {
        (self.length, self.overcapacity)
    }

    /// Ranking key preferring less overcapacity, then fewer bins
    pub fn capacity_first(&self) -> (u64, usize) {
        (self.overcapacity, self.length)
    }
}

impl Display for Objective {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "(overcapacity: {}, length: {})", self.overcapacity, self.length)
    }
}
