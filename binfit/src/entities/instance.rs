use crate::{BinFitError, Result};
use itertools::Itertools;

#[derive(Debug, Clone, PartialEq, Eq)]
/// A load to be covered and the distinct bin sizes available to cover it.
/// Both are fixed for the lifetime of the instance.
pub struct BinFitInstance {
    load: u64,
    /// Distinct bin sizes, sorted ascending
    bins: Vec<u64>,
}

impl BinFitInstance {
    /// Validates the raw input. Duplicate bin sizes collapse into one.
    pub fn new(load: i64, bins: &[i64]) -> Result<Self> {
        let load = u64::try_from(load).map_err(|_| {
            BinFitError::InvalidInput(format!("load must be non-negative, got {load}"))
        })?;
        if bins.is_empty() {
            return Err(BinFitError::InvalidInput(
                "at least one bin size is required".to_string(),
            ));
        }
        if let Some(bad) = bins.iter().find(|&&b| b <= 0) {
            return Err(BinFitError::InvalidInput(format!(
                "bin sizes must be positive, got {bad}"
            )));
        }

        let bins = bins
            .iter()
            .map(|&b| b as u64)
            .sorted_unstable()
            .dedup()
            .collect_vec();

        Ok(Self { load, bins })
    }

    pub fn load(&self) -> u64 {
        self.load
    }

    pub fn bins(&self) -> &[u64] {
        &self.bins
    }

    pub fn min_bin(&self) -> u64 {
        self.bins[0]
    }

    pub fn contains_bin(&self, size: u64) -> bool {
        self.bins.binary_search(&size).is_ok()
    }

    /// Length beyond which no combination can improve on a shorter one: `ceil(load / min(bins))`.
    /// Dropping any element from a longer feasible combination keeps it feasible while strictly lowering its overcapacity.
    pub fn max_useful_len(&self) -> usize {
        let k = self.load.div_ceil(self.min_bin());
        usize::try_from(k).unwrap_or(usize::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn bins_are_sorted_and_deduplicated() {
        let instance = BinFitInstance::new(9, &[5, 2, 3, 2, 5]).unwrap();
        assert_eq!(instance.bins(), &[2, 3, 5]);
        assert_eq!(instance.load(), 9);
        assert_eq!(instance.min_bin(), 2);
        assert!(instance.contains_bin(3));
        assert!(!instance.contains_bin(4));
    }

    #[test_case(-1, &[2, 3, 5]; "negative load")]
    #[test_case(6, &[]; "no bins")]
    #[test_case(6, &[2, 0, 5]; "zero bin")]
    #[test_case(6, &[2, -3]; "negative bin")]
    fn invalid_input_is_rejected(load: i64, bins: &[i64]) {
        let err = BinFitInstance::new(load, bins).unwrap_err();
        assert!(matches!(err, BinFitError::InvalidInput(_)), "{err:?}");
    }

    #[test_case(0, &[2, 3, 5], 0)]
    #[test_case(6, &[2, 3, 5], 3)]
    #[test_case(9, &[2, 3, 5], 5)]
    #[test_case(9, &[10], 1)]
    fn max_useful_len(load: i64, bins: &[i64], expected: usize) {
        let instance = BinFitInstance::new(load, bins).unwrap();
        assert_eq!(instance.max_useful_len(), expected);
    }
}
