/*
    Ordered map
*/

use std::fmt;

use tracing::debug;

use super::*;

impl<V, O: KeyOrder> OrderedMap<V, O> {
    /// Creates an empty `OrderedMap`.
    pub fn new() -> Self {
        Self {
            inner: BTreeMap::new(),
        }
    }

    /// Creates an `OrderedMap` over [`Fraction::grid`], computing each
    /// value from its key.
    pub fn from_grid(bound: i32, mut value: impl FnMut(&Fraction) -> V) -> Self {
        let map: Self = Fraction::grid(bound)
            .map(|f| {
                let v = value(&f);
                (f, v)
            })
            .collect();
        debug!(order = O::NAME, bound, len = map.len(), "built ordered map");
        map
    }

    /// Returns the name of the ordering strategy.
    pub fn strategy(&self) -> &'static str {
        O::NAME
    }

    /// Inserts a key-value pair, returning the previous value of an equal key.
    pub fn insert(&mut self, key: Fraction, value: V) -> Option<V> {
        self.inner.insert(OrderKey::new(key), value)
    }

    /// Returns the value stored under a key equal to `key`.
    pub fn get(&self, key: &Fraction) -> Option<&V> {
        self.inner.get(&OrderKey::new(*key))
    }

    /// Returns the stored key equal to `key`, with its stored representation.
    pub fn get_key(&self, key: &Fraction) -> Option<&Fraction> {
        self.inner
            .get_key_value(&OrderKey::new(*key))
            .map(|(k, _)| &k.frac)
    }

    /// Returns true if a key equal to `key` is present.
    pub fn contains_key(&self, key: &Fraction) -> bool {
        self.inner.contains_key(&OrderKey::new(*key))
    }

    /// Removes the entry for a key equal to `key`.
    pub fn remove(&mut self, key: &Fraction) -> Option<V> {
        self.inner.remove(&OrderKey::new(*key))
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterates over entries in strategy order.
    pub fn iter(&self) -> impl Iterator<Item = (&Fraction, &V)> {
        self.inner.iter().map(|(k, v)| (&k.frac, v))
    }

    /// Iterates over keys in strategy order.
    pub fn keys(&self) -> impl Iterator<Item = &Fraction> {
        self.inner.keys().map(|k| &k.frac)
    }

    /// Returns the smallest key.
    pub fn first_key(&self) -> Option<&Fraction> {
        self.inner.keys().next().map(|k| &k.frac)
    }

    /// Returns the largest key.
    pub fn last_key(&self) -> Option<&Fraction> {
        self.inner.keys().next_back().map(|k| &k.frac)
    }
}

impl<V, O: KeyOrder> Default for OrderedMap<V, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, O: KeyOrder> FromIterator<(Fraction, V)> for OrderedMap<V, O> {
    fn from_iter<I: IntoIterator<Item = (Fraction, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<V, O: KeyOrder> Extend<(Fraction, V)> for OrderedMap<V, O> {
    fn extend<I: IntoIterator<Item = (Fraction, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            // keep the first representation of each key
            self.inner.entry(OrderKey::new(k)).or_insert(v);
        }
    }
}

impl<V: fmt::Debug, O: KeyOrder> fmt::Debug for OrderedMap<V, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
