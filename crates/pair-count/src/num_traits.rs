//! This module contains the number traits used by the occurrence tables

/// A trait for safely and infallibly converting a type to a usize.
///
/// Used by [`crate::iter::BoundedIterator`] to index its dense occurrence table.
///
/// This trait is only implemented for unsigned integers whose bit width is less than or equal to
/// the system's pointer width, so `u64` is not available on 32 bits systems.
///
/// For signed integers, shift them by the minimum value first. Shifting preserves order, so the
/// maximum of the shifted values is still the shifted maximum.
pub trait ToUsize {
    fn to_usize(self) -> usize;
}

macro_rules! impl_to_usize {
    ($($uint_type:ty),*) => {
        $(
            impl ToUsize for $uint_type {
                fn to_usize(self) -> usize {
                    self as usize
                }
            }
        )*
    };
}

impl_to_usize!(u8, u16, usize);

#[cfg(any(target_pointer_width = "32", target_pointer_width = "64"))]
impl_to_usize!(u32);

#[cfg(target_pointer_width = "64")]
impl_to_usize!(u64);

/// An unsigned counter of occurrences
///
/// Increments saturate instead of wrapping. A saturated counter still compares greater than
/// [`Count::TWO`], so narrow counters give the same pair counts as wide ones.
pub trait Count: Sized + Copy + PartialOrd {
    const ZERO: Self;
    const ONE: Self;
    const TWO: Self;

    fn saturating_add(self, other: Self) -> Self;

    /// Contribution of a value seen `self` times to the raw total, i.e. `min(self, 2)`.
    fn pair_weight(self) -> usize {
        if self >= Self::TWO {
            2
        } else if self >= Self::ONE {
            1
        } else {
            0
        }
    }
}

macro_rules! impl_count_for_uint {
    ($($uint_type:ty),*) => {
        $(
            impl Count for $uint_type {
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const TWO: Self = 2;

                fn saturating_add(self, other: Self) -> Self {
                    <$uint_type>::saturating_add(self, other)
                }
            }
        )*
    };
}

impl_count_for_uint!(u8, u16, u32, u64, u128, usize);

/// Remove trailing zeros from a dense occurrence table
///
/// Afterwards the last element, if any, belongs to the maximum observed value.
pub(crate) fn remove_trailing_zeros<C: Count>(vec: &mut Vec<C>) {
    let len = vec
        .iter()
        .rposition(|&count| count != C::ZERO)
        .map_or(0, |last| last + 1);
    vec.truncate(len);
    vec.shrink_to_fit();
}
