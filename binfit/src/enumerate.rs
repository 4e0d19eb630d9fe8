use crate::entities::{BinFitInstance, Combination};
use itertools::{Either, Itertools};
use std::iter;
use std::ops::RangeInclusive;

/// Generates the feasible combinations of an instance (`capacity >= load`) by iterative deepening on their length.
///
/// Lengths are visited in increasing order and every length is a separate layer,
/// so a consumer can stop as soon as a layer satisfies it.
/// The search never exceeds [`BinFitInstance::max_useful_len`], which keeps it finite,
/// and can be capped further by the caller.
///
/// Nothing is cached: every call to [`Enumerator::candidates`] or [`Enumerator::layers`] starts a fresh generation.
#[derive(Debug, Clone, Copy)]
pub struct Enumerator<'a> {
    instance: &'a BinFitInstance,
    max_len: usize,
}

impl<'a> Enumerator<'a> {
    pub fn new(instance: &'a BinFitInstance, max_len: Option<usize>) -> Self {
        let bound = instance.max_useful_len();
        let max_len = max_len.map_or(bound, |cap| cap.min(bound));
        Self { instance, max_len }
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Lengths that are searched, in increasing order.
    /// A zero load is covered by the empty combination alone.
    pub fn lengths(&self) -> RangeInclusive<usize> {
        let min_len = match self.instance.load() {
            0 => 0,
            _ => 1,
        };
        min_len..=self.max_len
    }

    /// Feasible combinations of exactly `len` bins, in lexicographic order
    pub fn layer(self, len: usize) -> impl Iterator<Item = Combination> + 'a {
        let instance = self.instance;
        let load = instance.load();
        let candidates = match len {
            0 => Either::Left(iter::once(Combination::empty())),
            _ => Either::Right(
                instance
                    .bins()
                    .iter()
                    .copied()
                    .combinations_with_replacement(len)
                    .map(Combination::new),
            ),
        };
        candidates.filter(move |c| c.capacity() >= load)
    }

    /// Layers containing at least one feasible combination, as `(length, combinations)`
    pub fn layers(self) -> impl Iterator<Item = (usize, Vec<Combination>)> + 'a {
        self.lengths()
            .map(move |len| (len, self.layer(len).collect_vec()))
            .filter(|(_, layer)| !layer.is_empty())
    }

    /// Every feasible combination, by non-decreasing length
    pub fn candidates(self) -> impl Iterator<Item = Combination> + 'a {
        self.lengths().flat_map(move |len| self.layer(len))
    }
}
