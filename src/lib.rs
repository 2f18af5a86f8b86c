//! seqops - Generic sequence-processing primitives
//!
//! # Overview
//!
//! seqops is a flat set of sequence algorithms meant to sit underneath
//! application code:
//!
//! - Traversal: `foreach`, `reduce`
//! - Transformation: `map`, `filter`, `remove_if`, `partition`, `group_by`, `zip`
//! - In-place compaction: `map_inplace` / `remap`, `filter_inplace`, `remove_if_inplace`
//! - Generation: `generate`, `generate_2d`
//! - Queries: `any`, `all`, `none`, `count`, `contains`, `find_match`
//! - Reductions: `sum`, `mean`, `minmax`, `min`, `max`
//! - Best-element search: `find_min`, `find_max` / `find_best`, `find_nearest`
//!
//! Closures receive each element together with its 0-based index. A
//! transforming closure returns `Option<U>`, and `None` means "leave this
//! element out", so `map` filters and transforms in the same pass.
//!
//! # Quick Start
//!
//! ```
//! use seqops::{filter_inplace, find_min, map, minmax, sum};
//!
//! let readings = vec![12.5, -1.0, 9.0, 15.5, -3.0];
//!
//! // Transform and filter in one pass.
//! let valid = map(&readings, |r, _| (*r >= 0.0).then(|| r * 2.0));
//! assert_eq!(valid, vec![25.0, 18.0, 31.0]);
//!
//! // Reductions treat empty input as zero.
//! assert_eq!(sum(&valid), 74.0);
//! assert_eq!(minmax::<f64>(&[]), (0.0, 0.0));
//!
//! // Best-element search returns the element, not the score.
//! let closest = find_min(&readings, |r, _| Some((r - 10.0_f64).abs()));
//! assert_eq!(closest, Some(&9.0));
//!
//! // In-place compaction reuses the container.
//! let mut buffer = readings.clone();
//! filter_inplace(&mut buffer, |r, _| *r < 0.0);
//! assert_eq!(buffer, vec![-1.0, -3.0]);
//! ```
//!
//! # Errors
//!
//! Closures that can fail go through the `try_*` variants (`try_map`,
//! `try_filter`, `try_reduce`, `try_generate`), which stop at the first
//! error and return it unchanged. The library reports its own invalid input
//! through [`SeqError`], used by the checked integer reductions:
//!
//! ```
//! use seqops::{SeqError, checked_mean};
//!
//! assert_eq!(checked_mean(&[2u8, 4, 6]), Ok(4));
//! assert_eq!(checked_mean(&[200u8, 100]), Err(SeqError::Overflow { index: 1 }));
//! ```

// Re-export the whole API from seqops_core
pub use seqops_core::{
    Compactable, Distance, Result, SeqError, all, any, checked_mean, checked_sum, contains, count,
    filter, filter_inplace, find_best, find_index, find_match, find_max, find_min, find_nearest,
    foreach, generate, generate_2d, group_by, group_by_ordered, map, map_inplace, max, mean, min,
    minmax, none, partition, reduce, remap, remove_if, remove_if_inplace, sum, try_filter,
    try_generate, try_map, try_reduce, zip,
};

