//! Traversal and transformation over slices.
//!
//! All operations make a single left-to-right pass and hand the closure the
//! element together with its 0-based index. Operations that build a new
//! sequence allocate their output once, sized for the input.

use crate::Vec;
use core::hash::Hash;
use hashbrown::HashMap;

// ============================================================================
// Iteration
// ============================================================================

/// Call `f` for each element in order, stopping at the first `Some`.
///
/// Returns the value that stopped the traversal, or `None` after a full pass.
/// This doubles as a "find and stop" primitive.
///
/// # Examples
///
/// ```
/// use seqops_core::foreach;
///
/// let names = ["ash", "birch", "cedar"];
/// let hit = foreach(&names, |name, i| name.starts_with('b').then_some(i));
/// assert_eq!(hit, Some(1));
///
/// let mut seen = 0;
/// let hit: Option<()> = foreach(&names, |_, _| {
///     seen += 1;
///     None
/// });
/// assert_eq!((hit, seen), (None, 3));
/// ```
pub fn foreach<T, R, F>(seq: &[T], mut f: F) -> Option<R>
where
    F: FnMut(&T, usize) -> Option<R>,
{
    for (i, elem) in seq.iter().enumerate() {
        if let Some(stop) = f(elem, i) {
            return Some(stop);
        }
    }
    None
}

/// Left fold: `f(acc, element, index)` produces the next accumulator.
///
/// Iterative, so arbitrarily long sequences never grow the stack.
///
/// # Examples
/// - `reduce(&[1, 2, 3], 0, |acc, x, _| acc + x)` → `6`
/// - `reduce(&[], seed, f)` → `seed`
pub fn reduce<T, A, F>(seq: &[T], seed: A, mut f: F) -> A
where
    F: FnMut(A, &T, usize) -> A,
{
    let mut acc = seed;
    for (i, elem) in seq.iter().enumerate() {
        acc = f(acc, elem, i);
    }
    acc
}

/// Fallible left fold. The first `Err` returned by `f` ends the pass and is
/// returned unchanged.
pub fn try_reduce<T, A, E, F>(seq: &[T], seed: A, mut f: F) -> Result<A, E>
where
    F: FnMut(A, &T, usize) -> Result<A, E>,
{
    let mut acc = seed;
    for (i, elem) in seq.iter().enumerate() {
        acc = f(acc, elem, i)?;
    }
    Ok(acc)
}

// ============================================================================
// Map / Filter
// ============================================================================

/// Build a new sequence from `f(element, index)`, dropping every element for
/// which `f` yields `None`.
///
/// Relative order of the surviving elements is preserved, so `map` doubles
/// as a fused map + filter.
///
/// # Examples
///
/// ```
/// use seqops_core::map;
///
/// let doubled_odds = map(&[1, 2, 3, 4, 5], |x, _| (x % 2 == 1).then(|| x * 2));
/// assert_eq!(doubled_odds, vec![2, 6, 10]);
///
/// // A present zero is kept; only `None` removes.
/// assert_eq!(map(&[1, 2], |x, _| Some(x - 1)), vec![0, 1]);
/// ```
pub fn map<T, U, F>(seq: &[T], mut f: F) -> Vec<U>
where
    F: FnMut(&T, usize) -> Option<U>,
{
    let mut out = Vec::with_capacity(seq.len());
    for (i, elem) in seq.iter().enumerate() {
        if let Some(mapped) = f(elem, i) {
            out.push(mapped);
        }
    }
    out
}

/// Fallible [`map`]. `Ok(None)` drops the element; the first `Err` aborts the
/// pass and is returned unchanged.
pub fn try_map<T, U, E, F>(seq: &[T], mut f: F) -> Result<Vec<U>, E>
where
    F: FnMut(&T, usize) -> Result<Option<U>, E>,
{
    let mut out = Vec::with_capacity(seq.len());
    for (i, elem) in seq.iter().enumerate() {
        if let Some(mapped) = f(elem, i)? {
            out.push(mapped);
        }
    }
    Ok(out)
}

/// Clone into a new sequence the elements for which `f` is true.
///
/// # Examples
/// - `filter(&[1, 2, 3, 4], |x, _| x % 2 == 0)` → `[2, 4]`
/// - `filter(&[], f)` → `[]`
pub fn filter<T, F>(seq: &[T], mut f: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, usize) -> bool,
{
    map(seq, |elem, i| f(elem, i).then(|| elem.clone()))
}

/// Fallible [`filter`].
pub fn try_filter<T, E, F>(seq: &[T], mut f: F) -> Result<Vec<T>, E>
where
    T: Clone,
    F: FnMut(&T, usize) -> Result<bool, E>,
{
    try_map(seq, |elem, i| Ok(f(elem, i)?.then(|| elem.clone())))
}

/// Exact complement of [`filter`]: keeps the elements for which `f` is false.
///
/// # Examples
/// - `remove_if(&[1, 2, 3, 4], |x, _| x % 2 == 0)` → `[1, 3]`
pub fn remove_if<T, F>(seq: &[T], mut f: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, usize) -> bool,
{
    map(seq, |elem, i| (!f(elem, i)).then(|| elem.clone()))
}

/// Split in one pass into `(matching, rest)`.
///
/// Equivalent to `(filter(seq, f), remove_if(seq, f))`, with `f` called
/// exactly once per element.
///
/// # Examples
/// - `partition(&[1, 2, 3, 4, 5], |x, _| *x > 2)` → `([3, 4, 5], [1, 2])`
pub fn partition<T, F>(seq: &[T], mut f: F) -> (Vec<T>, Vec<T>)
where
    T: Clone,
    F: FnMut(&T, usize) -> bool,
{
    let mut matching = Vec::new();
    let mut rest = Vec::new();
    for (i, elem) in seq.iter().enumerate() {
        if f(elem, i) {
            matching.push(elem.clone());
        } else {
            rest.push(elem.clone());
        }
    }
    (matching, rest)
}

// ============================================================================
// Grouping
// ============================================================================

/// Bucket elements by the key `f(element, index)`.
///
/// A group is created the first time its key is seen; each group keeps the
/// original relative order of its elements. The map itself has no order, use
/// [`group_by_ordered`] when the order in which keys first appear matters.
///
/// # Examples
///
/// ```
/// use seqops_core::group_by;
///
/// let groups = group_by(&[1, 2, 3, 4], |x, _| x % 2);
/// assert_eq!(groups[&0], vec![2, 4]);
/// assert_eq!(groups[&1], vec![1, 3]);
/// ```
pub fn group_by<T, K, F>(seq: &[T], mut f: F) -> HashMap<K, Vec<T>>
where
    T: Clone,
    K: Eq + Hash,
    F: FnMut(&T, usize) -> K,
{
    let mut groups: HashMap<K, Vec<T>> = HashMap::new();
    for (i, elem) in seq.iter().enumerate() {
        groups.entry(f(elem, i)).or_default().push(elem.clone());
    }
    groups
}

/// Like [`group_by`], but returns the groups in the order their keys were
/// first encountered.
///
/// # Examples
/// - `group_by_ordered(&["bb", "a", "cc", "d"], |s, _| s.len())` →
///   `[(2, ["bb", "cc"]), (1, ["a", "d"])]`
pub fn group_by_ordered<T, K, F>(seq: &[T], mut f: F) -> Vec<(K, Vec<T>)>
where
    T: Clone,
    K: Eq + Hash + Clone,
    F: FnMut(&T, usize) -> K,
{
    let mut slots: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(K, Vec<T>)> = Vec::new();
    for (i, elem) in seq.iter().enumerate() {
        let key = f(elem, i);
        let slot = match slots.get(&key) {
            Some(&slot) => slot,
            None => {
                slots.insert(key.clone(), groups.len());
                groups.push((key, Vec::new()));
                groups.len() - 1
            }
        };
        groups[slot].1.push(elem.clone());
    }
    groups
}

// ============================================================================
// Zip
// ============================================================================

/// Combine two sequences pairwise with `f(a, b, index)`.
///
/// Runs `min(left.len(), right.len())` times; `None` results are dropped,
/// following the same convention as [`map`].
///
/// # Edge Cases
///
/// - **Stops at the shorter sequence**: `zip(&[1, 2, 3], &[10, 20], add)` → `[11, 22]`
/// - Either side empty → `[]`
pub fn zip<A, B, U, F>(left: &[A], right: &[B], mut f: F) -> Vec<U>
where
    F: FnMut(&A, &B, usize) -> Option<U>,
{
    let len = left.len().min(right.len());
    let mut out = Vec::with_capacity(len);
    for (i, (a, b)) in left.iter().zip(right).enumerate() {
        if let Some(combined) = f(a, b, i) {
            out.push(combined);
        }
    }
    out
}

#[cfg(test)]
#[path = "traverse_test.rs"]
mod traverse_test;
