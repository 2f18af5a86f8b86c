//! Scalar reductions over numeric sequences.
//!
//! Empty input is never an error here: [`sum`] and [`mean`] yield zero and
//! [`minmax`] yields `(0, 0)`. Zero is used instead of NaN or infinities so
//! that an empty sequence cannot poison downstream arithmetic.

use crate::error::{Result, SeqError};
use crate::traverse::{reduce, try_reduce};
use core::ops::Add;
use num_traits::{CheckedAdd, NumCast, PrimInt, Zero, float::FloatCore};

/// Arithmetic sum; `0` for an empty sequence.
///
/// # Examples
/// - `sum(&[1, 2, 3])` → `6`
/// - `sum::<f64>(&[])` → `0.0`
pub fn sum<T>(seq: &[T]) -> T
where
    T: Copy + Zero + Add<Output = T>,
{
    reduce(seq, T::zero(), |acc, &x, _| acc + x)
}

/// Arithmetic mean, `sum / len`; `0` for an empty sequence, never NaN.
///
/// # Examples
/// - `mean(&[1.0, 2.0, 3.0])` → `2.0`
/// - `mean::<f32>(&[])` → `0.0`
pub fn mean<T: FloatCore>(seq: &[T]) -> T {
    if seq.is_empty() {
        return T::zero();
    }
    // Every usize converts to a float, possibly rounded.
    <T as NumCast>::from(seq.len()).map_or_else(T::zero, |len| sum(seq) / len)
}

/// Integer sum that reports overflow instead of wrapping or panicking.
///
/// # Errors
///
/// [`SeqError::Overflow`] names the index of the element whose addition
/// overflowed.
pub fn checked_sum<T>(seq: &[T]) -> Result<T>
where
    T: Copy + Zero + CheckedAdd,
{
    try_reduce(seq, T::zero(), |acc, x, index| {
        acc.checked_add(x).ok_or_else(|| {
            tracing::debug!(index, "checked sum overflowed");
            SeqError::Overflow { index }
        })
    })
}

/// Integer mean with truncating division; `0` for an empty sequence.
///
/// # Errors
///
/// - [`SeqError::Overflow`] if the running sum overflows `T`
/// - [`SeqError::LengthNotRepresentable`] if `seq.len()` does not fit in `T`
///
/// # Examples
/// - `checked_mean(&[1, 2, 3, 4])` → `Ok(2)`
/// - `checked_mean(&[100u8, 100, 100])` → `Err(Overflow { index: 2 })`
pub fn checked_mean<T: PrimInt>(seq: &[T]) -> Result<T> {
    if seq.is_empty() {
        return Ok(T::zero());
    }
    let len = seq.len();
    let divisor = <T as NumCast>::from(len).ok_or(SeqError::LengthNotRepresentable { len })?;
    Ok(checked_sum(seq)? / divisor)
}

/// Minimum and maximum in a single pass; `(0, 0)` for an empty sequence.
///
/// Values that do not compare equal to themselves (floating-point NaN) are
/// skipped, so a sequence holding only NaNs is treated like an empty one.
///
/// # Examples
///
/// ```
/// use seqops_core::minmax;
///
/// assert_eq!(minmax(&[3, 1, 2]), (1, 3));
/// assert_eq!(minmax::<i32>(&[]), (0, 0));
/// assert_eq!(minmax(&[f64::NAN, 2.5, -1.0]), (-1.0, 2.5));
/// ```
pub fn minmax<T>(seq: &[T]) -> (T, T)
where
    T: Copy + PartialOrd + Zero,
{
    let mut values = seq.iter().copied().filter(is_comparable);
    let Some(first) = values.next() else {
        return (T::zero(), T::zero());
    };
    let (mut lo, mut hi) = (first, first);
    for x in values {
        if x < lo {
            lo = x;
        }
        if x > hi {
            hi = x;
        }
    }
    (lo, hi)
}

/// Smallest value, see [`minmax`].
pub fn min<T>(seq: &[T]) -> T
where
    T: Copy + PartialOrd + Zero,
{
    minmax(seq).0
}

/// Largest value, see [`minmax`].
pub fn max<T>(seq: &[T]) -> T
where
    T: Copy + PartialOrd + Zero,
{
    minmax(seq).1
}

#[inline]
pub(crate) fn is_comparable<T: PartialOrd>(value: &T) -> bool {
    value.partial_cmp(value).is_some()
}

#[cfg(test)]
#[path = "reduce_test.rs"]
mod reduce_test;
