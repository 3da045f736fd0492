#![no_std]

//! Linear-scan algorithms for locating equal-key runs in sorted slices.
//!
//! In a slice sorted by key, all entries sharing a key sit in one contiguous
//! run. The functions here report the boundaries of that run using plain
//! forward and backward scans: for the small slices these are meant for, a
//! linear scan has a lower constant-factor cost than a branchy binary search.
//! The "not found" sentinel is always the slice length, which doubles as the
//! one-past-end index and never falls inside the valid range `[0, len)`.
#![deny(missing_docs)]

use core::borrow::Borrow;
use core::ops::Range;

/// Returns the index of the first entry equal to the search key, scanning
/// forward from the start, or `slice.len()` when no entry matches.
///
/// Callers must check for the sentinel before indexing.
///
/// # Example
/// ```
/// use run_search::run_start;
///
/// let slice = ['a', 'b', 'b', 'c'];
///
/// assert_eq!(run_start(&slice, &'b'), 1);
/// assert_eq!(run_start(&slice, &'d'), 4);
/// ```
pub fn run_start<K: PartialEq, T: Borrow<K>>(slice: &[T], key: &K) -> usize {
    slice
        .iter()
        .position(|entry| entry.borrow() == key)
        .unwrap_or(slice.len())
}

/// Returns the index one past the last entry equal to the search key, found
/// by scanning backward from the end, or `slice.len()` when no entry matches.
///
/// The sentinel is indistinguishable from a run that reaches the end of the
/// slice; both mean "there is no entry past this run".
///
/// # Example
/// ```
/// use run_search::run_end;
///
/// let slice = ['a', 'b', 'b', 'c'];
///
/// assert_eq!(run_end(&slice, &'b'), 3);
/// assert_eq!(run_end(&slice, &'c'), 4);
/// assert_eq!(run_end(&slice, &'d'), 4);
/// ```
pub fn run_end<K: PartialEq, T: Borrow<K>>(slice: &[T], key: &K) -> usize {
    match slice.iter().rposition(|entry| entry.borrow() == key) {
        Some(index) => index + 1,
        None => slice.len(),
    }
}

/// Returns the half-open index range `[run_start, run_end)` of the equal-key
/// run, or the empty range `len..len` when no entry matches.
///
/// # Example
/// ```
/// use run_search::run_range;
///
/// let slice = ['a', 'b', 'b', 'c'];
///
/// assert_eq!(run_range(&slice, &'b'), 1..3);
/// assert!(run_range(&slice, &'d').is_empty());
/// ```
pub fn run_range<K: PartialEq, T: Borrow<K>>(slice: &[T], key: &K) -> Range<usize> {
    run_start(slice, key)..run_end(slice, key)
}
