//! The occurrence table behind every pair count.

use core::hash::{BuildHasher, Hash};
use std::collections::{
    HashMap,
    hash_map::{Entry, RandomState},
};

use tracing::debug;

use crate::{Error, Result, num_traits::*};

/// Running state of a pair count over a sequence of values
///
/// Every value adds one to the raw total on its first sighting and one more when its pair
/// completes, i.e. on its second occurrence. Later occurrences are still recorded in the
/// occurrence table but leave the raw total untouched. The maximum needs only one occurrence to
/// be complete, so [`Tally::complete`] takes back its pair bonus, if it got one.
///
/// The counter type `C` and hasher `S` can be chosen freely, e.g. a narrow counter with
/// `nohash_hasher::BuildNoHashHasher` for integer values.
#[derive(Debug, Clone)]
pub struct Tally<E, C = usize, S = RandomState> {
    occurrences: HashMap<E, C, S>,
    maximum: Option<E>,
    raw: usize,
}

impl<E, C> Tally<E, C, RandomState> {
    /// Creates an empty tally using the default hasher.
    pub fn new() -> Self {
        Self::with_hasher(RandomState::new())
    }
}

impl<E, C, S> Tally<E, C, S> {
    /// Creates an empty tally which will use the given hash builder for its occurrence table.
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            occurrences: HashMap::with_hasher(hasher),
            maximum: None,
            raw: 0,
        }
    }

    /// The largest value observed so far
    pub fn maximum(&self) -> Option<&E> {
        self.maximum.as_ref()
    }

    /// Number of distinct values observed
    pub fn distinct(&self) -> usize {
        self.occurrences.len()
    }

    /// Distinct values plus completed pairs, before the maximum is accounted for
    pub fn raw_total(&self) -> usize {
        self.raw
    }

    pub fn is_empty(&self) -> bool {
        self.maximum.is_none()
    }

    /// The full occurrence table, mapping each value to how often it was observed
    pub fn table(&self) -> &HashMap<E, C, S> {
        &self.occurrences
    }
}

impl<E, C, S> Tally<E, C, S>
where
    E: Eq + Hash + Ord + Clone,
    C: Count,
    S: BuildHasher,
{
    /// Records one more occurrence of `value`.
    pub fn observe(&mut self, value: E) {
        if self.maximum.as_ref().is_none_or(|max| value > *max) {
            self.maximum = Some(value.clone());
        }

        match self.occurrences.entry(value) {
            Entry::Vacant(entry) => {
                entry.insert(C::ONE);
                self.raw += 1;
            }
            Entry::Occupied(mut entry) => {
                let count = entry.get_mut();
                *count = count.saturating_add(C::ONE);
                if *count == C::TWO {
                    self.raw += 1;
                }
            }
        }
    }

    /// Combines two tallies as if their sequences had been observed one after the other.
    ///
    /// The smaller occurrence table is merged into the larger one.
    pub fn merge(self, other: Self) -> Self {
        let (smaller, mut larger) = if self.occurrences.len() < other.occurrences.len() {
            (self, other)
        } else {
            (other, self)
        };

        if let Some(max) = smaller.maximum {
            if larger.maximum.as_ref().is_none_or(|larger_max| max > *larger_max) {
                larger.maximum = Some(max);
            }
        }

        for (value, count) in smaller.occurrences {
            let slot = larger.occurrences.entry(value).or_insert(C::ZERO);
            let before = slot.pair_weight();
            *slot = slot.saturating_add(count);
            larger.raw += slot.pair_weight() - before;
        }

        larger
    }

    /// How often `value` was observed, zero if never
    pub fn occurrences(&self, value: &E) -> C {
        self.occurrences.get(value).copied().unwrap_or(C::ZERO)
    }

    /// Returns the number of fully represented values.
    ///
    /// This is the raw total, minus one if the maximum was seen at least twice. Sequences that
    /// break the "at most twice, maximum at most once" rule are still counted, see
    /// [`Tally::is_well_formed`] to detect them.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyInput`] if no value was observed, as there is no maximum.
    pub fn complete(&self) -> Result<usize> {
        let Some(maximum) = &self.maximum else {
            debug!("rejected empty sequence");
            return Err(Error::EmptyInput);
        };

        let paired_maximum = self.occurrences(maximum) >= C::TWO;
        let result = self.raw - usize::from(paired_maximum);

        debug!(
            distinct = self.distinct(),
            raw = self.raw,
            result,
            "completed tally"
        );
        Ok(result)
    }

    /// Whether the observed sequence is non-empty and every value occurs at most twice, except
    /// the maximum which occurs at most once.
    pub fn is_well_formed(&self) -> bool {
        let Some(maximum) = &self.maximum else {
            return false;
        };

        self.occurrences.iter().all(|(value, &count)| {
            if value == maximum {
                count <= C::ONE
            } else {
                count <= C::TWO
            }
        })
    }
}

impl<E, C, S: Default> Default for Tally<E, C, S> {
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<E, C, S> Extend<E> for Tally<E, C, S>
where
    E: Eq + Hash + Ord + Clone,
    C: Count,
    S: BuildHasher,
{
    fn extend<T: IntoIterator<Item = E>>(&mut self, iter: T) {
        for value in iter {
            self.observe(value);
        }
    }
}

impl<E, C, S> FromIterator<E> for Tally<E, C, S>
where
    E: Eq + Hash + Ord + Clone,
    C: Count,
    S: BuildHasher + Default,
{
    fn from_iter<T: IntoIterator<Item = E>>(iter: T) -> Self {
        let mut tally = Self::default();
        tally.extend(iter);
        tally
    }
}
