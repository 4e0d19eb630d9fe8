use serde::{Deserialize, Serialize};

/// Configuration shared by all solvers
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct SolverConfig {
    /// Maximum number of bins in a combination.
    /// If undefined, the search is bounded only by `ceil(load / min(bins))`.
    #[serde(default)]
    pub max_len: Option<usize>,
    /// How combinations tied on the objective are reported
    #[serde(default)]
    pub tie_break: TieBreak,
}

/// Policy for combinations that share the best objective
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Report every tied combination, in ascending order
    #[default]
    All,
    /// Report only the lexicographically smallest tied combination
    First,
}
