//! In-place compaction.
//!
//! These operations rewrite a container without allocating a new one. They
//! walk the slots with two cursors over the same storage: `read` visits every
//! slot once, `write` marks where the next survivor goes. Because `write`
//! only advances when `read` does, `write <= read` holds throughout and no
//! slot is overwritten before it has been read. After the pass the slots from
//! `write` to the original end are cleared, shrinking the container to the
//! number of survivors.

use crate::Vec;
use alloc::collections::VecDeque;
use smallvec::{Array, SmallVec};

/// A dense container that can be compacted in place.
pub trait Compactable {
    type Item;

    /// All live slots, in order, as one contiguous slice.
    fn slots_mut(&mut self) -> &mut [Self::Item];

    /// Drop every slot at or past `len`.
    fn truncate_slots(&mut self, len: usize);
}

impl<T> Compactable for Vec<T> {
    type Item = T;

    fn slots_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }

    fn truncate_slots(&mut self, len: usize) {
        self.truncate(len);
    }
}

impl<A: Array> Compactable for SmallVec<A> {
    type Item = A::Item;

    fn slots_mut(&mut self) -> &mut [A::Item] {
        self.as_mut_slice()
    }

    fn truncate_slots(&mut self, len: usize) {
        self.truncate(len);
    }
}

impl<T> Compactable for VecDeque<T> {
    type Item = T;

    fn slots_mut(&mut self) -> &mut [T] {
        self.make_contiguous()
    }

    fn truncate_slots(&mut self, len: usize) {
        self.truncate(len);
    }
}

/// Replace every element with `f(element, index)` in place, dropping the
/// elements for which `f` yields `None`.
///
/// Produces the same elements, in the same order, as [`crate::map`] on a copy
/// of the input. Returns the container it was given.
///
/// # Examples
///
/// ```
/// use seqops_core::map_inplace;
///
/// let mut scores = vec![3, -1, 4, -1, 5];
/// map_inplace(&mut scores, |x, _| (*x >= 0).then(|| x * 10));
/// assert_eq!(scores, vec![30, 40, 50]);
/// ```
pub fn map_inplace<S, F>(seq: &mut S, mut f: F) -> &mut S
where
    S: Compactable,
    F: FnMut(&S::Item, usize) -> Option<S::Item>,
{
    let slots = seq.slots_mut();
    let len = slots.len();
    let mut write = 0;
    for read in 0..len {
        if let Some(mapped) = f(&slots[read], read) {
            slots[write] = mapped;
            write += 1;
        }
    }
    finish(seq, len, write)
}

/// Alias for [`map_inplace`].
pub fn remap<S, F>(seq: &mut S, f: F) -> &mut S
where
    S: Compactable,
    F: FnMut(&S::Item, usize) -> Option<S::Item>,
{
    map_inplace(seq, f)
}

/// Keep, in place, only the elements for which `f` is true.
///
/// Survivors are moved down by swapping, so elements are never cloned.
///
/// # Examples
/// - `filter_inplace(&mut vec![1, 2, 3, 4], |x, _| x % 2 == 0)` → `[2, 4]`
pub fn filter_inplace<S, F>(seq: &mut S, mut f: F) -> &mut S
where
    S: Compactable,
    F: FnMut(&S::Item, usize) -> bool,
{
    let slots = seq.slots_mut();
    let len = slots.len();
    let mut write = 0;
    for read in 0..len {
        if f(&slots[read], read) {
            slots.swap(write, read);
            write += 1;
        }
    }
    finish(seq, len, write)
}

/// Drop, in place, the elements for which `f` is true.
pub fn remove_if_inplace<S, F>(seq: &mut S, mut f: F) -> &mut S
where
    S: Compactable,
    F: FnMut(&S::Item, usize) -> bool,
{
    filter_inplace(seq, |elem, i| !f(elem, i))
}

fn finish<S: Compactable>(seq: &mut S, len: usize, kept: usize) -> &mut S {
    debug_assert!(kept <= len);
    seq.truncate_slots(kept);
    tracing::trace!(kept, cleared = len - kept, "compacted sequence in place");
    seq
}

#[cfg(test)]
#[path = "compact_test.rs"]
mod compact_test;
