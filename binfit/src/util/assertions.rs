use crate::entities::{BinFitInstance, Combination, Solution};
use crate::eval::Objective;

/// Every size in the combination belongs to the instance's bin set
pub fn combination_uses_instance_bins(instance: &BinFitInstance, combination: &Combination) -> bool {
    combination
        .sizes()
        .iter()
        .all(|&size| instance.contains_bin(size))
}

/// Every combination covers the load, is drawn from the bin set, is sorted ascending
/// and scores exactly the reported objective.
pub fn solution_is_consistent(instance: &BinFitInstance, solution: &Solution) -> bool {
    solution.combinations.iter().all(|c| {
        c.capacity() >= instance.load()
            && combination_uses_instance_bins(instance, c)
            && c.sizes().is_sorted()
            && Objective::evaluate(c, instance.load()).ok() == solution.objective
    }) && solution.combinations.is_sorted()
        && solution.is_empty() == solution.objective.is_none()
}
