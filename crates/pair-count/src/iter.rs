//! This module provides adapters for counting complete values from iterators.

use core::hash::{BuildHasher, Hash};

use crate::{num_traits::*, *};

/// A wrapper around an iterator whose items are hashable and totally ordered
/// (i.e. implemented [`Hash`], [`Eq`] and [`Ord`]).
///
/// This is the general purpose adapter. Values may be signed, sparse or non-integer.
///
/// ## Tips
///
/// [`PairTally::tally`] returns a [`Tally`] generic over its counter and hasher, so annotate the
/// return type to pick a faster hasher or a narrower counter.
pub struct ValueIterator<I: Iterator>(I);

/// A trait for converting an [`IntoIterator`] into a [`ValueIterator`]
pub trait IntoValueIterator: IntoIterator {
    fn into_value_iter(self) -> ValueIterator<Self::IntoIter>;
}

impl<I: IntoIterator> IntoValueIterator for I {
    fn into_value_iter(self) -> ValueIterator<Self::IntoIter> {
        ValueIterator(self.into_iter())
    }
}

impl<E, C, I, S> PairTally<Tally<E, C, S>> for ValueIterator<I>
where
    E: Eq + Hash + Ord + Clone,
    C: Count,
    I: Iterator<Item = E>,
    S: BuildHasher + Default,
{
    fn tally(self) -> Tally<E, C, S> {
        self.0.collect()
    }
}

impl<I> ValueIterator<I>
where
    I: Iterator,
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

/// A wrapper around an iterator whose items implement the [`ToUsize`] trait and have a known
/// upper bound.
///
/// Occurrences are counted in a dense vector indexed by value instead of a hash map, which is
/// much faster for small non-negative values.
///
/// # Panics
///
/// Counting panics if an item is greater than the upper bound.
pub struct BoundedIterator<I: Iterator> {
    iter: I,
    upper_bound: usize,
}

/// A trait for converting an [`IntoIterator`] into a [`BoundedIterator`]
pub trait IntoBoundedIterator: IntoIterator {
    /// Converts the iterator into a [`BoundedIterator`]
    ///
    /// All items in the iterator must be within the range `0..=upper_bound`.
    fn into_bounded_iter(self, upper_bound: usize) -> BoundedIterator<Self::IntoIter>;
}

impl<I: IntoIterator> IntoBoundedIterator for I {
    fn into_bounded_iter(self, upper_bound: usize) -> BoundedIterator<I::IntoIter> {
        BoundedIterator {
            iter: self.into_iter(),
            upper_bound,
        }
    }
}

impl<E, I> BoundedIterator<I>
where
    E: ToUsize,
    I: Iterator<Item = E>,
{
    /// Occurrences of each value in `0..=upper_bound`, with trailing zeros removed
    ///
    /// The last element, if any, is the occurrence count of the maximum.
    pub fn occurrences<C: Count>(self) -> Vec<C> {
        let len = self.upper_bound + 1;
        let mut occurrences = self.iter.fold(vec![C::ZERO; len], |mut acc, item| {
            let slot = &mut acc[item.to_usize()];
            *slot = slot.saturating_add(C::ONE);
            acc
        });
        remove_trailing_zeros(&mut occurrences);
        occurrences
    }

    /// Count fully represented values from a dense occurrence table
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyInput`] if the iterator yields nothing.
    pub fn count_complete(self) -> Result<usize> {
        let occurrences: Vec<usize> = self.occurrences();
        let Some(&maximum) = occurrences.last() else {
            return Err(Error::EmptyInput);
        };

        let raw: usize = occurrences.iter().map(|count| count.pair_weight()).sum();
        Ok(raw - usize::from(maximum >= 2))
    }
}
