/*
    Hash map
*/

use std::fmt;

use tracing::debug;

use super::*;

impl<V, H: KeyHash> HashedMap<V, H> {
    /// Creates an empty `HashedMap`.
    pub fn new() -> Self {
        Self {
            inner: HashMap::with_hasher(BuildPassThrough),
        }
    }

    /// Creates an empty `HashedMap` with room for `capacity` keys.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: HashMap::with_capacity_and_hasher(capacity, BuildPassThrough),
        }
    }

    /// Creates a `HashedMap` over [`Fraction::grid`], computing each
    /// value from its key.
    pub fn from_grid(bound: i32, mut value: impl FnMut(&Fraction) -> V) -> Self {
        let map: Self = Fraction::grid(bound)
            .map(|f| {
                let v = value(&f);
                (f, v)
            })
            .collect();
        debug!(hash = H::NAME, bound, len = map.len(), "built hashed map");
        map
    }

    /// Returns the name of the hash strategy.
    pub fn strategy(&self) -> &'static str {
        H::NAME
    }

    /// Inserts a key-value pair, returning the previous value of an equal key.
    pub fn insert(&mut self, key: Fraction, value: V) -> Option<V> {
        self.inner.insert(HashKey::new(key), value)
    }

    /// Returns the value stored under a key equal to `key`.
    pub fn get(&self, key: &Fraction) -> Option<&V> {
        self.inner.get(&HashKey::new(*key))
    }

    /// Returns true if a key equal to `key` is present.
    pub fn contains_key(&self, key: &Fraction) -> bool {
        self.inner.contains_key(&HashKey::new(*key))
    }

    /// Removes the entry for a key equal to `key`.
    pub fn remove(&mut self, key: &Fraction) -> Option<V> {
        self.inner.remove(&HashKey::new(*key))
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterates over entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&Fraction, &V)> {
        self.inner.iter().map(|(k, v)| (&k.frac, v))
    }

    /// Iterates over keys in arbitrary order.
    pub fn keys(&self) -> impl Iterator<Item = &Fraction> {
        self.inner.keys().map(|k| &k.frac)
    }

    /// Computes occupancy statistics for the keys of this map spread over
    /// `buckets` buckets by `H`.
    pub fn bucket_stats(&self, buckets: usize) -> BucketStats {
        BucketStats::collect::<H, _>(self.keys(), buckets)
    }
}

impl<V, H: KeyHash> Default for HashedMap<V, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, H: KeyHash> FromIterator<(Fraction, V)> for HashedMap<V, H> {
    fn from_iter<I: IntoIterator<Item = (Fraction, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<V, H: KeyHash> Extend<(Fraction, V)> for HashedMap<V, H> {
    fn extend<I: IntoIterator<Item = (Fraction, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            // keep the first representation of each key
            self.inner.entry(HashKey::new(k)).or_insert(v);
        }
    }
}

impl<V: fmt::Debug, H: KeyHash> fmt::Debug for HashedMap<V, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
