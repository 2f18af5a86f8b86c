//! Short-circuiting predicate queries and linear search.
//!
//! Empty sequences follow the usual vacuous-truth rules: [`any`] is false,
//! [`all`] and [`none`] are true.

/// True if `f` holds for at least one element. Stops at the first hit.
pub fn any<T, F>(seq: &[T], mut f: F) -> bool
where
    F: FnMut(&T, usize) -> bool,
{
    seq.iter().enumerate().any(|(i, elem)| f(elem, i))
}

/// True if `f` holds for no element. Stops at the first hit.
pub fn none<T, F>(seq: &[T], f: F) -> bool
where
    F: FnMut(&T, usize) -> bool,
{
    !any(seq, f)
}

/// True if `f` holds for every element. Stops at the first miss.
pub fn all<T, F>(seq: &[T], mut f: F) -> bool
where
    F: FnMut(&T, usize) -> bool,
{
    seq.iter().enumerate().all(|(i, elem)| f(elem, i))
}

/// Number of elements for which `f` holds.
///
/// # Examples
/// - `count(&[1, 2, 3, 4, 5], |x, _| x % 2 == 1)` → `3`
pub fn count<T, F>(seq: &[T], mut f: F) -> usize
where
    F: FnMut(&T, usize) -> bool,
{
    let mut hits = 0;
    for (i, elem) in seq.iter().enumerate() {
        if f(elem, i) {
            hits += 1;
        }
    }
    hits
}

/// True if some element equals `value`.
pub fn contains<T: PartialEq>(seq: &[T], value: &T) -> bool {
    seq.iter().any(|elem| elem == value)
}

/// First element for which `f` holds.
///
/// This is a linear scan; the sequence does not need to be sorted.
///
/// # Examples
///
/// ```
/// use seqops_core::find_match;
///
/// let words = ["kiwi", "banana", "cherry"];
/// assert_eq!(find_match(&words, |w, _| w.len() > 5), Some(&"banana"));
/// assert_eq!(find_match(&words, |w, _| w.is_empty()), None);
/// ```
pub fn find_match<T, F>(seq: &[T], mut f: F) -> Option<&T>
where
    F: FnMut(&T, usize) -> bool,
{
    seq.iter()
        .enumerate()
        .find(|&(i, elem)| f(elem, i))
        .map(|(_, elem)| elem)
}

/// Index of the first element for which `f` holds.
pub fn find_index<T, F>(seq: &[T], mut f: F) -> Option<usize>
where
    F: FnMut(&T, usize) -> bool,
{
    seq.iter().enumerate().position(|(i, elem)| f(elem, i))
}

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;
