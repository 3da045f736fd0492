use core::{borrow::Borrow, fmt::Debug};

/// One key-value pair in the backing array of a multimap.
///
/// Unlike a plain map entry, the key carries no uniqueness claim: several
/// entries in the same container may hold equal keys, and after the
/// construction sort they sit next to each other.
#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Entry<K, V> {
    /// Lookup and ordering component; duplicates allowed
    pub key: K,

    /// Payload, opaque to the container
    pub value: V,
}

impl<K, V> Entry<K, V> {
    /// Pairs a key with a value
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }
}

impl<K, V> From<(K, V)> for Entry<K, V> {
    fn from((key, value): (K, V)) -> Self {
        Self { key, value }
    }
}

// Lets the run-scan primitives treat a slice of entries as a slice of keys
impl<K, V> Borrow<K> for Entry<K, V> {
    fn borrow(&self) -> &K {
        &self.key
    }
}

impl<K: Debug, V: Debug> Debug for Entry<K, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_fmt(format_args!("({:?}, {:?})", &self.key, &self.value))
    }
}
