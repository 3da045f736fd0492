#![no_std]

mod entry;

#[cfg(feature = "serde")]
mod serde;

use core::cmp::Ordering;
use core::fmt::Debug;

pub use entry::Entry;
use run_search::*;

/// `SortedMultiMap` is a constant-size, zero-allocation associative container
/// backed by an array, holding exactly `N` key-value pairs.
///
/// The pairs are supplied all at once, sorted by key during construction, and
/// never change afterwards: there is no insertion, removal, or rebalancing.
/// Keys may repeat, and after the sort every set of equal keys occupies one
/// contiguous run, which the query methods report the boundaries of.
///
/// Since the container is immutable once built, any number of threads may
/// query it concurrently without synchronization.
///
/// All lookups are linear scans. The container targets small `N`, where a
/// scan beats binary search on constant factors and branch predictability.
pub struct SortedMultiMap<K, V, const N: usize> {
    inner: [Entry<K, V>; N],
}

impl<K, V, const N: usize> PartialEq for SortedMultiMap<K, V, N>
where
    K: PartialEq,
    V: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.entries() == other.entries()
    }
}

impl<K, V, const N: usize> Eq for SortedMultiMap<K, V, N>
where
    K: PartialEq,
    V: PartialEq,
{
}

impl<K: Debug, V: Debug, const N: usize> Debug for SortedMultiMap<K, V, N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.entries().iter()).finish()
    }
}

impl<K: Clone, V: Clone, const N: usize> Clone for SortedMultiMap<K, V, N> {
    fn clone(&self) -> Self {
        SortedMultiMap {
            inner: self.inner.clone(),
        }
    }
}

impl<K, V, const N: usize> SortedMultiMap<K, V, N> {
    /// Builds the map from exactly `N` pairs, ordered by the natural order
    /// of `K`.
    ///
    /// The sort is stable: pairs with equal keys keep the relative order
    /// they had in `pairs`.
    pub fn from_entries(pairs: [(K, V); N]) -> Self
    where
        K: Ord,
    {
        Self::from_entries_by(pairs, K::cmp)
    }

    /// Builds the map from exactly `N` pairs, ordered by a caller-supplied
    /// strict total order over `K`.
    ///
    /// The sort is stable: pairs the comparator considers equal keep the
    /// relative order they had in `pairs`.
    pub fn from_entries_by(
        pairs: [(K, V); N],
        compare: impl FnMut(&K, &K) -> Ordering,
    ) -> Self {
        Self::from_entry_array(pairs.map(Entry::from), compare)
    }

    fn from_entry_array(
        mut inner: [Entry<K, V>; N],
        mut compare: impl FnMut(&K, &K) -> Ordering,
    ) -> Self {
        // Insertion sort: stable and allocation-free. `core` offers no
        // stable sort without `alloc`, and for the small `N` this container
        // targets the quadratic worst case is immaterial.
        for sorted in 1..N {
            let mut index = sorted;
            while index > 0 && compare(&inner[index - 1].key, &inner[index].key) == Ordering::Greater
            {
                inner.swap(index - 1, index);
                index -= 1;
            }
        }

        SortedMultiMap { inner }
    }

    /// Returns the value of the leftmost entry with a matching key, found by
    /// a forward scan, or `None` when the key is absent.
    pub fn get(&self, key: &K) -> Option<&V>
    where
        K: PartialEq,
    {
        // run_start returns N when nothing matches, which `get` rejects
        self.inner
            .get(run_start(self.entries(), key))
            .map(|entry| &entry.value)
    }

    /// Returns `true` iff [`get`](Self::get) would return a value.
    pub fn contains_key(&self, key: &K) -> bool
    where
        K: PartialEq,
    {
        self.get(key).is_some()
    }

    /// Returns the value at the start of the equal-key run; identical to
    /// [`get`](Self::get).
    ///
    /// This is exact-key lookup: when the key is absent the result is
    /// `None`, never the value of the next greater key.
    pub fn lower_bound(&self, key: &K) -> Option<&V>
    where
        K: PartialEq,
    {
        self.get(key)
    }

    /// Returns the value one position past the equal-key run, found by a
    /// backward scan.
    ///
    /// `None` when the key is absent, and also when the run reaches the end
    /// of the array, since no entry exists past it. Together with
    /// [`lower_bound`](Self::lower_bound) this expresses the half-open
    /// `[lower_bound, upper_bound)` convention as point values.
    pub fn upper_bound(&self, key: &K) -> Option<&V>
    where
        K: PartialEq,
    {
        self.inner
            .get(run_end(self.entries(), key))
            .map(|entry| &entry.value)
    }

    /// Borrows a lazy view over the values of the equal-key run, in stored
    /// order; empty when the key is absent.
    ///
    /// The view is restartable: calling this again, or cloning the returned
    /// iterator, yields an independent traversal of the same run.
    pub fn equal_range(&self, key: &K) -> ValueRange<'_, K, V>
    where
        K: PartialEq,
    {
        ValueRange {
            inner: self.inner[run_range(self.entries(), key)].iter(),
        }
    }

    /// Returns the number of entries with a matching key; `0` signals
    /// absence.
    pub fn count(&self, key: &K) -> usize
    where
        K: PartialEq,
    {
        self.equal_range(key).len()
    }
}

impl<K, V, const N: usize> SortedMultiMap<K, V, N> {
    /// Borrow a slice view into the entries stored in the `SortedMultiMap`
    pub fn entries(&self) -> &[Entry<K, V>] {
        &self.inner
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Entry<K, V>> {
        self.inner.iter()
    }

    /// Get a key-value pair based on its index in the backing array.
    pub fn get_index(&self, index: usize) -> Option<&Entry<K, V>> {
        self.inner.get(index)
    }

    /// Returns the first kv pair in the `SortedMultiMap`, if any exists
    pub fn first(&self) -> Option<&Entry<K, V>> {
        self.inner.first()
    }

    /// Returns the last kv pair in the `SortedMultiMap`, if any exists
    pub fn last(&self) -> Option<&Entry<K, V>> {
        self.inner.last()
    }

    /// Number of entries; always `N`, known at compile time.
    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }
}

/// Iterator over the values of one equal-key run, returned by
/// [`SortedMultiMap::equal_range`].
#[derive(Clone)]
pub struct ValueRange<'a, K, V> {
    inner: core::slice::Iter<'a, Entry<K, V>>,
}

impl<'a, K, V> Iterator for ValueRange<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|entry| &entry.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for ValueRange<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|entry| &entry.value)
    }
}

impl<K, V> ExactSizeIterator for ValueRange<'_, K, V> {}
