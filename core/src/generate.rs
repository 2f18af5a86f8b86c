//! Building sequences from index spaces.

use crate::Vec;

/// Upper bound on the elements reserved before generation starts.
///
/// `count` and `width * height` are only an upper bound on the output, since
/// the closure may skip most indices. Larger outputs grow the `Vec` as usual.
pub const MAX_RESERVE: usize = 4096;

fn with_reserve<U>(hint: usize) -> Vec<U> {
    Vec::with_capacity(hint.min(MAX_RESERVE))
}

/// Build a sequence from `f(i)` for `i` in `0..count`, skipping `None`.
///
/// The result holds at most `count` elements. At most [`MAX_RESERVE`]
/// elements are reserved up front.
///
/// # Examples
/// - `generate(4, |i| Some(i * i))` → `[0, 1, 4, 9]`
/// - `generate(6, |i| (i % 3 == 0).then_some(i))` → `[0, 3]`
/// - `generate(0, f)` → `[]`, `f` is never called
pub fn generate<U, F>(count: usize, mut f: F) -> Vec<U>
where
    F: FnMut(usize) -> Option<U>,
{
    let mut out = with_reserve(count);
    for i in 0..count {
        if let Some(value) = f(i) {
            out.push(value);
        }
    }
    out
}

/// Fallible [`generate`]. The first `Err` stops generation and is returned
/// unchanged.
pub fn try_generate<U, E, F>(count: usize, mut f: F) -> Result<Vec<U>, E>
where
    F: FnMut(usize) -> Result<Option<U>, E>,
{
    let mut out = with_reserve(count);
    for i in 0..count {
        if let Some(value) = f(i)? {
            out.push(value);
        }
    }
    Ok(out)
}

/// Generate over a `width` × `height` grid, flattened in row-major order.
///
/// Rows (`y`) form the outer loop and columns (`x`) the inner one, so `x`
/// varies fastest. `None` cells are skipped. Callers who need a nested
/// container can call [`generate`] twice instead. The up-front reservation is
/// capped at [`MAX_RESERVE`] like [`generate`].
///
/// # Examples
///
/// ```
/// use seqops_core::generate_2d;
///
/// let cells = generate_2d(2, 2, |x, y| Some(format!("{x}-{y}")));
/// assert_eq!(cells, ["0-0", "1-0", "0-1", "1-1"]);
/// ```
pub fn generate_2d<U, F>(width: usize, height: usize, mut f: F) -> Vec<U>
where
    F: FnMut(usize, usize) -> Option<U>,
{
    let cells = width.saturating_mul(height);
    if cells > MAX_RESERVE {
        tracing::debug!(width, height, reserved = MAX_RESERVE, "large grid, capping reservation");
    }
    let mut out = with_reserve(cells);
    for y in 0..height {
        for x in 0..width {
            if let Some(value) = f(x, y) {
                out.push(value);
            }
        }
    }
    out
}

#[cfg(test)]
#[path = "generate_test.rs"]
mod generate_test;
