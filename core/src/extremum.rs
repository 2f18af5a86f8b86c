//! Best-element search by score.
//!
//! The selector maps each element to an optional score. Elements whose score
//! is `None`, or does not compare equal to itself (NaN), take no part in the
//! search. Comparison is strict, so among elements with the same best score
//! the first one wins. The element is returned, never the score.

use crate::reduce::is_comparable;
use num_traits::float::FloatCore;

/// Element with the lowest score, or `None` when no element was scored.
///
/// # Examples
///
/// ```
/// use seqops_core::find_min;
///
/// struct Item { v: i32 }
/// let items = [Item { v: 5 }, Item { v: 1 }, Item { v: 3 }, Item { v: 1 }];
///
/// let best = find_min(&items, |item, _| Some(item.v)).unwrap();
/// assert!(core::ptr::eq(best, &items[1]));
/// ```
pub fn find_min<T, S, F>(seq: &[T], f: F) -> Option<&T>
where
    S: PartialOrd,
    F: FnMut(&T, usize) -> Option<S>,
{
    find_by(seq, f, |candidate, best| candidate < best)
}

/// Element with the highest score, or `None` when no element was scored.
///
/// # Examples
/// - `find_max(&["a", "ccc", "bb"], |s, _| Some(s.len()))` → `Some(&"ccc")`
/// - `find_max(&[1, 2], |_, _| None::<i32>)` → `None`
pub fn find_max<T, S, F>(seq: &[T], f: F) -> Option<&T>
where
    S: PartialOrd,
    F: FnMut(&T, usize) -> Option<S>,
{
    find_by(seq, f, |candidate, best| candidate > best)
}

/// Alias for [`find_max`].
pub fn find_best<T, S, F>(seq: &[T], f: F) -> Option<&T>
where
    S: PartialOrd,
    F: FnMut(&T, usize) -> Option<S>,
{
    find_max(seq, f)
}

/// Absolute difference between two scores, used by [`find_nearest`].
///
/// Integers use `abs_diff`, which returns the unsigned counterpart and cannot
/// overflow even for `i64::MIN` against `i64::MAX`. Floats use `|a - b|`; a
/// NaN distance is skipped like any other NaN score.
pub trait Distance: Copy {
    type Output: PartialOrd;

    fn distance(self, other: Self) -> Self::Output;
}

macro_rules! impl_int_distance {
    ($($int:ty => $out:ty),* $(,)?) => {
        $(
            impl Distance for $int {
                type Output = $out;

                #[inline]
                fn distance(self, other: Self) -> $out {
                    self.abs_diff(other)
                }
            }
        )*
    };
}

impl_int_distance! {
    i8 => u8, i16 => u16, i32 => u32, i64 => u64, i128 => u128, isize => usize,
    u8 => u8, u16 => u16, u32 => u32, u64 => u64, u128 => u128, usize => usize,
}

macro_rules! impl_float_distance {
    ($($float:ty),*) => {
        $(
            impl Distance for $float {
                type Output = $float;

                #[inline]
                fn distance(self, other: Self) -> $float {
                    FloatCore::abs(self - other)
                }
            }
        )*
    };
}

impl_float_distance!(f32, f64);

/// Element whose score is closest to `target`.
///
/// Distance is [`Distance::distance`], so signed scores at opposite ends of
/// their range compare correctly. Ties go to the first element.
///
/// # Examples
/// - `find_nearest(&[10u32, 25, 17], |x, _| Some(*x), 20)` → `Some(&17)`
/// - `find_nearest(&[i32::MIN, 0], |x, _| Some(*x), i32::MAX)` → `Some(&0)`
pub fn find_nearest<T, S, F>(seq: &[T], mut f: F, target: S) -> Option<&T>
where
    S: Distance,
    F: FnMut(&T, usize) -> Option<S>,
{
    find_min(seq, |elem, i| Some(f(elem, i)?.distance(target)))
}

fn find_by<T, S, F, B>(seq: &[T], mut f: F, mut better: B) -> Option<&T>
where
    S: PartialOrd,
    F: FnMut(&T, usize) -> Option<S>,
    B: FnMut(&S, &S) -> bool,
{
    let mut best: Option<(&T, S)> = None;
    for (i, elem) in seq.iter().enumerate() {
        let Some(score) = f(elem, i) else { continue };
        if !is_comparable(&score) {
            continue;
        }
        let replace = match &best {
            Some((_, best_score)) => better(&score, best_score),
            None => true,
        };
        if replace {
            best = Some((elem, score));
        }
    }
    best.map(|(elem, _)| elem)
}

#[cfg(test)]
#[path = "extremum_test.rs"]
mod extremum_test;
