use core::marker::PhantomData;
use core::mem::{ManuallyDrop, MaybeUninit};

use serde::de::{IgnoredAny, SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Serialize};

use crate::entry::Entry;
use crate::SortedMultiMap;

impl<K, V, const N: usize> Serialize for SortedMultiMap<K, V, N>
where
    K: Serialize,
    V: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(N))?;
        for entry in self.entries() {
            seq.serialize_element(entry)?;
        }
        seq.end()
    }
}

/// Entries deserialized so far; drops its initialized prefix if
/// deserialization fails partway through.
struct PartialArray<K, V, const N: usize> {
    inner: [MaybeUninit<Entry<K, V>>; N],
    len: usize,
}

impl<K, V, const N: usize> PartialArray<K, V, N> {
    fn empty() -> Self {
        PartialArray {
            inner: unsafe {
                MaybeUninit::<[MaybeUninit<Entry<K, V>>; N]>::uninit().assume_init()
            },
            len: 0,
        }
    }

    fn push(&mut self, entry: Entry<K, V>) {
        debug_assert!(self.len < N);
        self.inner[self.len].write(entry);
        self.len += 1;
    }

    fn into_array(self) -> [Entry<K, V>; N] {
        debug_assert!(self.len == N);
        let this = ManuallyDrop::new(self);

        // SAFETY: all N slots were written, and `this` will not be dropped
        unsafe { core::ptr::read(this.inner.as_ptr() as *const [Entry<K, V>; N]) }
    }
}

impl<K, V, const N: usize> Drop for PartialArray<K, V, N> {
    fn drop(&mut self) {
        for slot in &mut self.inner[..self.len] {
            // SAFETY: slots below `len` are initialized
            unsafe { slot.assume_init_drop() };
        }
    }
}

struct SortedMultiMapDeserializer<K, V, const N: usize>(PhantomData<(K, V, [(); N])>);

impl<'de, K, V, const N: usize> Visitor<'de> for SortedMultiMapDeserializer<K, V, N>
where
    K: Deserialize<'de> + Ord,
    V: Deserialize<'de>,
{
    type Value = SortedMultiMap<K, V, N>;

    fn expecting(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
        formatter.write_str("a sequence of exactly N entries for SortedMultiMap")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut partial = PartialArray::empty();

        while partial.len < N {
            match seq.next_element::<Entry<K, V>>()? {
                Some(entry) => partial.push(entry),
                None => return Err(serde::de::Error::invalid_length(partial.len, &self)),
            }
        }

        if seq.next_element::<IgnoredAny>()?.is_some() {
            return Err(serde::de::Error::custom(
                "SortedMultiMap exceeded its capacity during deserialization",
            ));
        }

        // Re-sort rather than trusting the input to be ordered
        Ok(SortedMultiMap::from_entry_array(
            partial.into_array(),
            K::cmp,
        ))
    }
}

impl<'de, K, V, const N: usize> Deserialize<'de> for SortedMultiMap<K, V, N>
where
    K: Deserialize<'de> + Ord,
    V: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(SortedMultiMapDeserializer(PhantomData))
    }
}
