#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

//! Generic sequence-processing primitives.
//!
//! Every operation is a free function over a slice (or, for the in-place
//! family, over a [`Compactable`] container) plus a caller-supplied closure.
//! Transforming closures return `Option<U>`: `None` drops the element from
//! the output, which lets a single `map` both transform and filter.
//!
//! Indices handed to closures are 0-based.

// This works on std and no_std and is harmless.
extern crate alloc;

// Re-exported so modules can refer to these without the `alloc::` prefix.
#[doc(hidden)]
pub mod shim {
    pub use alloc::{vec, vec::Vec};
}

#[allow(unused_imports)]
pub(crate) use shim::*;

pub mod compact;
pub mod error;
pub mod extremum;
pub mod generate;
pub mod query;
pub mod reduce;
pub mod traverse;

pub use compact::{Compactable, filter_inplace, map_inplace, remap, remove_if_inplace};
pub use error::{Result, SeqError};
pub use extremum::{Distance, find_best, find_max, find_min, find_nearest};
pub use generate::{MAX_RESERVE, generate, generate_2d, try_generate};
pub use query::{all, any, contains, count, find_index, find_match, none};
pub use reduce::{checked_mean, checked_sum, max, mean, min, minmax, sum};
pub use traverse::{
    filter, foreach, group_by, group_by_ordered, map, partition, reduce, remove_if, try_filter,
    try_map, try_reduce, zip,
};
