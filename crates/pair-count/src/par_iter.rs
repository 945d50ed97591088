//! This module provides adapters for counting complete values from parallel iterators.

use core::hash::{BuildHasher, Hash};

use rayon::prelude::*;

use crate::{num_traits::*, *};

/// A parallel iterator adapter for hashable, totally ordered values
///
/// Each rayon task builds its own [`Tally`], the partial tallies are then combined with
/// [`Tally::merge`]. The pair count only depends on how often each value occurs, so the result
/// equals the sequential one. See [`crate::iter::ValueIterator`] for more details.
pub struct ParallelValueIterator<I: ParallelIterator>(I);

/// A trait for converting an [`IntoParallelIterator`] into a [`ParallelValueIterator`]
pub trait IntoParallelValueIterator: IntoParallelIterator {
    fn into_value_par_iter(self) -> ParallelValueIterator<Self::Iter>;
}

impl<I: IntoParallelIterator> IntoParallelValueIterator for I {
    fn into_value_par_iter(self) -> ParallelValueIterator<Self::Iter> {
        ParallelValueIterator(self.into_par_iter())
    }
}

impl<E, C, I, S> PairTally<Tally<E, C, S>> for ParallelValueIterator<I>
where
    E: Eq + Hash + Ord + Clone + Send,
    C: Count + Send,
    I: ParallelIterator<Item = E>,
    S: BuildHasher + Default + Send,
{
    fn tally(self) -> Tally<E, C, S> {
        self.0
            .fold(Tally::default, |mut acc, value| {
                acc.observe(value);
                acc
            })
            .reduce(Tally::default, Tally::merge)
    }
}

impl<I> ParallelValueIterator<I>
where
    I: ParallelIterator,
    I::Item: Eq + Hash + Ord + Clone,
{
    /// Count fully represented values with the default counter and hasher
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyInput`] if the iterator yields nothing.
    pub fn count_complete(self) -> Result<usize> {
        let tally: Tally<I::Item> = self.tally();
        tally.complete()
    }
}
