use binfit::SolverConfig;
use binfit::entities::Solution;
use itertools::Itertools;
use serde::Serialize;

/// Everything written to `--output-file`
#[derive(Serialize, Clone, Debug)]
pub struct CliOutput {
    pub load: i64,
    pub bins: Vec<i64>,
    pub config: SolverConfig,
    pub solutions: Vec<Solution>,
}

/// One line per invoked strategy: its name, the load and bins as given, and the winning combinations
pub fn solution_line(load: i64, bins: &[i64], solution: &Solution) -> String {
    format!(
        "[{}] load {load}, bins ({}) -> {solution}",
        solution.strategy,
        bins.iter().join(", ")
    )
}
