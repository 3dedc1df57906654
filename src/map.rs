/*
    Associative containers keyed by `Fraction`
*/

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use crate::hash::{BuildPassThrough, MixHash};
use crate::{Fraction, KeyHash, KeyOrder, Mathematical};

mod hashed;
mod ordered;
mod stats;

pub use stats::*;

// A key compared only through the strategy `O`.
struct OrderKey<O> {
    frac: Fraction,
    _order: PhantomData<fn() -> O>,
}

// A key hashed only through the strategy `H` and compared mathematically.
struct HashKey<H> {
    frac: Fraction,
    _hash: PhantomData<fn() -> H>,
}

impl<O> OrderKey<O> {
    fn new(frac: Fraction) -> Self {
        Self {
            frac,
            _order: PhantomData,
        }
    }
}

impl<H> HashKey<H> {
    fn new(frac: Fraction) -> Self {
        Self {
            frac,
            _hash: PhantomData,
        }
    }
}

impl<O: KeyOrder> PartialEq for OrderKey<O> {
    fn eq(&self, other: &Self) -> bool {
        O::cmp(&self.frac, &other.frac) == Ordering::Equal
    }
}

impl<O: KeyOrder> Eq for OrderKey<O> {}

impl<O: KeyOrder> PartialOrd for OrderKey<O> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<O: KeyOrder> Ord for OrderKey<O> {
    fn cmp(&self, other: &Self) -> Ordering {
        O::cmp(&self.frac, &other.frac)
    }
}

impl<H> PartialEq for HashKey<H> {
    fn eq(&self, other: &Self) -> bool {
        self.frac == other.frac
    }
}

impl<H> Eq for HashKey<H> {}

impl<H: KeyHash> Hash for HashKey<H> {
    fn hash<S: Hasher>(&self, state: &mut S) {
        state.write_u64(H::hash(&self.frac));
    }
}

/** An ordered map keyed by `Fraction`.
 *
 * The ordering strategy `O` is fixed by the type, so one map never mixes
 * orderings. It also decides key identity: under [`Mathematical`], `1/2`
 * and `3/6` are the same key; under [`crate::Lexicographic`] they are two
 * keys. When an inserted key is already present, the stored key keeps its
 * original representation and only the value is replaced. Collecting or
 * extending keeps the first entry for each key instead.
 *
 */
pub struct OrderedMap<V, O: KeyOrder = Mathematical> {
    inner: BTreeMap<OrderKey<O>, V>,
}

/** A hash map keyed by `Fraction`.
 *
 * Keys are compared mathematically and bucketed by the strategy `H`.
 * `H` must hash equal fractions identically, which every strategy in
 * [`crate::hash`] does by hashing the reduced form.
 *
 */
pub struct HashedMap<V, H: KeyHash = MixHash> {
    inner: HashMap<HashKey<H>, V, BuildPassThrough>,
}
