use std::borrow::Borrow;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

// ---------------------------------------------------------------------------
// Grouped – insertion-ordered key → value mapping
// ---------------------------------------------------------------------------

/// Values keyed by a grouping key, iterated in the order keys were first seen.
///
/// This is the one group-then-reduce primitive behind every aggregator:
/// [`Grouped::from_rows`] buckets rows, [`Grouped::map_values`] reduces each
/// bucket.
#[derive(Debug, Clone, PartialEq)]
pub struct Grouped<K, V> {
    entries: Vec<(K, V)>,
}

impl<K, V> Default for Grouped<K, V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<K, V> Grouped<K, Vec<V>>
where
    K: Eq + Hash + Clone,
{
    /// Bucket `rows` by `key`, collecting `value` of each row into its bucket.
    ///
    /// Only keys that occur in `rows` get a bucket, so no bucket is ever empty.
    pub fn from_rows<T, I, FK, FV>(rows: I, key: FK, value: FV) -> Self
    where
        I: IntoIterator<Item = T>,
        FK: Fn(&T) -> K,
        FV: Fn(&T) -> V,
    {
        let mut index: HashMap<K, usize> = HashMap::new();
        let mut entries: Vec<(K, Vec<V>)> = Vec::new();

        for row in rows {
            let k = key(&row);
            let v = value(&row);
            match index.get(&k) {
                Some(&slot) => entries[slot].1.push(v),
                None => {
                    index.insert(k.clone(), entries.len());
                    entries.push((k, vec![v]));
                }
            }
        }

        Grouped { entries }
    }
}

impl<K, V> Grouped<K, V> {
    /// Reduce every group's value, keeping key order.
    pub fn map_values<W, F>(self, mut f: F) -> Grouped<K, W>
    where
        F: FnMut(V) -> W,
    {
        Grouped {
            entries: self.entries.into_iter().map(|(k, v)| (k, f(v))).collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    #[cfg(test)]
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(k, _)| k)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_entries(self) -> Vec<(K, V)> {
        self.entries
    }
}

impl<K: PartialEq, V> Grouped<K, V> {
    /// Value for `key`, if the key occurred in the input.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.entries
            .iter()
            .find(|(k, _)| <K as Borrow<Q>>::borrow(k) == key)
            .map(|(_, v)| v)
    }
}

/// Distinct values of `key` over `rows`, in first-occurrence order.
pub fn distinct_in_order<T, K, F>(rows: &[T], key: F) -> Vec<K>
where
    K: Eq + Hash + Clone,
    F: Fn(&T) -> K,
{
    let mut seen = HashSet::new();
    rows.iter()
        .map(key)
        .filter(|k| seen.insert(k.clone()))
        .collect()
}
