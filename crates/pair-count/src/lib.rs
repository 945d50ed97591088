#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![doc = include_str!("../README.md")]

use core::hash::Hash;

pub mod prelude {
    //! Import of useful traits and types from the crate

    #[cfg(feature = "parallel")]
    pub use crate::par_iter::*;
    pub use crate::{Error, PairTally, Result, Tally, count, iter::*, num_traits::*};
}

mod error;
pub use error::{Error, Result};

mod tally;
pub use tally::Tally;

pub mod iter;
pub mod num_traits;
#[cfg(feature = "parallel")]
pub mod par_iter;

/// A trait for tallying the occurrences of values in a sequence
///
/// The returned tally can then be completed into the number of fully represented values, see
/// [`Tally::complete`].
pub trait PairTally<R> {
    /// Observe every item of the iterator, in order
    ///
    /// # Example
    ///
    /// ```
    /// use pair_count::prelude::*;
    ///
    /// let items = vec![4, 1, 4, 2];
    /// let tally: Tally<i32, u8> = items.into_value_iter().tally();
    /// assert_eq!(tally.occurrences(&4), 2);
    /// assert_eq!(tally.complete(), Ok(3));
    /// ```
    fn tally(self) -> R;
}

/// Count the values of a sequence that are fully represented.
///
/// Each value counts once when first seen and once more when its pair completes. The maximum is
/// complete after a single occurrence, so its pair, if any, is not counted. Input that breaks the
/// "at most twice, maximum at most once" rule is tolerated.
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] for an empty sequence.
///
/// # Example
///
/// ```
/// assert_eq!(pair_count::count([1, 2, 2, 3, 3, 5, 5, 5]), Ok(6));
/// assert_eq!(pair_count::count([7, 7]), Ok(1));
/// assert!(pair_count::count(Vec::<i32>::new()).is_err());
/// ```
pub fn count<I>(values: I) -> Result<usize>
where
    I: IntoIterator,
    I::Item: Eq + Hash + Ord + Clone,
{
    iter::IntoValueIterator::into_value_iter(values).count_complete()
}
