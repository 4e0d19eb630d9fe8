use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// A multiset of bin sizes, kept in ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Combination(Vec<u64>);

impl Combination {
    pub fn new(mut sizes: Vec<u64>) -> Self {
        sizes.sort_unstable();
        Self(sizes)
    }

    /// The combination without any bins, the unique candidate for a zero load
    pub fn empty() -> Self {
        Self(vec![])
    }

    pub fn sizes(&self) -> &[u64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Summed size of all bins, saturating at `u64::MAX`
    pub fn capacity(&self) -> u64 {
        self.0.iter().fold(0u64, |acc, &s| acc.saturating_add(s))
    }
}

impl Display for Combination {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({})", self.0.iter().join(", "))
    }
}

impl From<Combination> for Vec<u64> {
    fn from(c: Combination) -> Self {
        c.0
    }
}
