//! Tests for traversal and transformation

use super::*;
use pretty_assertions::assert_eq;

// ============================================================================
// foreach Tests
// ============================================================================

#[test]
fn test_foreach_visits_in_order() {
    let mut visited = Vec::new();
    let stop: Option<()> = foreach(&['a', 'b', 'c'], |c, i| {
        visited.push((i, *c));
        None
    });

    assert_eq!(stop, None);
    assert_eq!(visited, vec![(0, 'a'), (1, 'b'), (2, 'c')]);
}

#[test]
fn test_foreach_stops_on_first_value() {
    let mut calls = 0;
    let stop = foreach(&[4, 8, 15, 16, 23], |x, i| {
        calls += 1;
        (x % 2 == 1).then_some((i, *x))
    });

    assert_eq!(stop, Some((2, 15)));
    assert_eq!(calls, 3);
}

#[test]
fn test_foreach_empty() {
    let stop = foreach(&[] as &[i32], |_, _| Some(()));
    assert_eq!(stop, None);
}

// ============================================================================
// reduce Tests
// ============================================================================

#[test]
fn test_reduce_left_fold() {
    // Non-commutative fold exposes the order.
    let digits = reduce(&[1, 2, 3], 0, |acc, d, _| acc * 10 + d);
    assert_eq!(digits, 123);
}

#[test]
fn test_reduce_passes_index() {
    let weighted = reduce(&[10, 20, 30], 0, |acc, x, i| acc + x * i as i32);
    assert_eq!(weighted, 20 + 60);
}

#[test]
fn test_reduce_empty_returns_seed() {
    assert_eq!(reduce(&[] as &[u8], 42u32, |_, _, _| 0), 42);
}

#[test]
fn test_reduce_long_sequence() {
    let ones = vec![1u64; 1_000_000];
    assert_eq!(reduce(&ones, 0u64, |acc, x, _| acc + x), 1_000_000);
}

#[test]
fn test_try_reduce_propagates_error() {
    let mut calls = 0;
    let result: Result<i32, &str> = try_reduce(&[1, 2, -1, 4], 0, |acc, x, _| {
        calls += 1;
        if *x < 0 { Err("negative") } else { Ok(acc + x) }
    });

    assert_eq!(result, Err("negative"));
    assert_eq!(calls, 3);
}

#[test]
fn test_try_reduce_ok() {
    let result: Result<i32, ()> = try_reduce(&[1, 2, 3], 0, |acc, x, _| Ok(acc + x));
    assert_eq!(result, Ok(6));
}

// ============================================================================
// map Tests
// ============================================================================

#[test]
fn test_map_transforms_every_element() {
    assert_eq!(map(&[1, 2, 3], |x, _| Some(x * 2)), vec![2, 4, 6]);
}

#[test]
fn test_map_drops_absent_results() {
    let input = [5, -2, 7, -9, 0];
    let out = map(&input, |x, _| (*x >= 0).then_some(*x));

    assert_eq!(out, vec![5, 7, 0]);
    assert!(out.len() <= input.len());
}

#[test]
fn test_map_changes_type() {
    let lens = map(&["a", "bb", "ccc"], |s, _| Some(s.len()));
    assert_eq!(lens, vec![1, 2, 3]);
}

#[test]
fn test_map_receives_original_index() {
    // Indices refer to input positions, not output positions.
    let out = map(&[10, 11, 12, 13], |x, i| (x % 2 == 1).then_some(i));
    assert_eq!(out, vec![1, 3]);
}

#[test]
fn test_map_empty() {
    let out: Vec<i32> = map(&[] as &[i32], |x, _| Some(*x));
    assert!(out.is_empty());
}

#[test]
fn test_try_map() {
    let parsed: Result<Vec<i32>, core::num::ParseIntError> =
        try_map(&["1", "", "3"], |s, _| {
            if s.is_empty() {
                Ok(None)
            } else {
                s.parse().map(Some)
            }
        });
    assert_eq!(parsed, Ok(vec![1, 3]));

    let failed: Result<Vec<i32>, _> = try_map(&["1", "x", "3"], |s, _| s.parse().map(Some));
    assert!(failed.is_err());
}

// ============================================================================
// filter / remove_if / partition Tests
// ============================================================================

#[test]
fn test_filter() {
    assert_eq!(filter(&[1, 2, 3, 4, 5, 6], |x, _| x % 3 == 0), vec![3, 6]);
}

#[test]
fn test_filter_by_index() {
    let evens = filter(&['a', 'b', 'c', 'd', 'e'], |_, i| i % 2 == 0);
    assert_eq!(evens, vec!['a', 'c', 'e']);
}

#[test]
fn test_try_filter_propagates_error() {
    let result: Result<Vec<i32>, i32> =
        try_filter(&[1, 2, 3], |x, _| if *x == 2 { Err(*x) } else { Ok(true) });
    assert_eq!(result, Err(2));
}

#[test]
fn test_remove_if() {
    assert_eq!(remove_if(&[1, 2, 3, 4, 5, 6], |x, _| x % 3 == 0), vec![1, 2, 4, 5]);
}

#[test]
fn test_filter_and_remove_if_split_input() {
    let input = vec![9, 4, 7, 1, 8, 2, 6];
    let pred = |x: &i32, _: usize| *x > 5;

    let kept = filter(&input, pred);
    let removed = remove_if(&input, pred);

    assert_eq!(kept, vec![9, 7, 8, 6]);
    assert_eq!(removed, vec![4, 1, 2]);
    assert_eq!(kept.len() + removed.len(), input.len());
}

#[test]
fn test_partition_matches_filter_and_remove_if() {
    let input = vec![9, 4, 7, 1, 8, 2, 6];
    let pred = |x: &i32, _: usize| *x > 5;

    let (matching, rest) = partition(&input, pred);

    assert_eq!(matching, filter(&input, pred));
    assert_eq!(rest, remove_if(&input, pred));
}

#[test]
fn test_partition_calls_predicate_once_per_element() {
    let mut calls = 0;
    let (odd, even) = partition(&[1, 2, 3, 4, 5], |x, _| {
        calls += 1;
        x % 2 == 1
    });

    assert_eq!(calls, 5);
    assert_eq!(odd, vec![1, 3, 5]);
    assert_eq!(even, vec![2, 4]);
}

// ============================================================================
// group_by Tests
// ============================================================================

#[test]
fn test_group_by_parity() {
    let groups = group_by(&[1, 2, 3, 4], |x, _| x % 2);

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[&0], vec![2, 4]);
    assert_eq!(groups[&1], vec![1, 3]);
}

#[test]
fn test_group_by_preserves_order_within_group() {
    let words = ["pear", "fig", "plum", "kiwi", "yam", "lime"];
    let groups = group_by(&words, |w, _| w.len());

    assert_eq!(groups[&4], vec!["pear", "plum", "kiwi", "lime"]);
    assert_eq!(groups[&3], vec!["fig", "yam"]);
}

#[test]
fn test_group_by_empty() {
    let groups = group_by(&[] as &[i32], |x, _| *x);
    assert!(groups.is_empty());
}

#[test]
fn test_group_by_ordered_first_encounter_order() {
    let groups = group_by_ordered(&["bb", "a", "cc", "d", "eee"], |s, _| s.len());

    assert_eq!(
        groups,
        vec![
            (2, vec!["bb", "cc"]),
            (1, vec!["a", "d"]),
            (3, vec!["eee"]),
        ]
    );
}

// ============================================================================
// zip Tests
// ============================================================================

#[test]
fn test_zip_stops_at_shorter() {
    assert_eq!(zip(&[1, 2, 3], &[10, 20], |a, b, _| Some(a + b)), vec![11, 22]);
    assert_eq!(zip(&[1], &[10, 20, 30], |a, b, _| Some(a + b)), vec![11]);
}

#[test]
fn test_zip_mixed_types_and_index() {
    let labels = zip(&["x", "y", "z"], &[1.5, 2.5, 3.5], |name, v, i| {
        (i != 1).then(|| alloc::format!("{name}={v}"))
    });
    assert_eq!(labels, vec!["x=1.5", "z=3.5"]);
}

#[test]
fn test_zip_empty() {
    let out = zip(&[] as &[i32], &[1, 2], |a, b, _| Some(a + b));
    assert!(out.is_empty());
}
