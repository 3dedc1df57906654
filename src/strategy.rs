/*
    Traits relevant to key strategies
*/

use std::cmp::Ordering;

use crate::Fraction;

/// An ordering strategy for `Fraction` keys.
///
/// An ordered container is parameterized by exactly one `KeyOrder`;
/// it decides which keys the container considers the same.
pub trait KeyOrder {
    /// Human-readable name used in reports.
    const NAME: &'static str;

    /// Compares two keys.
    fn cmp(a: &Fraction, b: &Fraction) -> Ordering;
}

/// A hashing strategy for `Fraction` keys.
///
/// Any strategy used by a hash container must satisfy
/// `a == b => hash(a) == hash(b)` under mathematical equality.
pub trait KeyHash {
    /// Human-readable name used in reports.
    const NAME: &'static str;

    /// Hashes a key to a full word.
    fn hash(f: &Fraction) -> u64;
}

/// Orders keys by their rational value.
#[derive(Copy, Clone, Debug, Default)]
pub struct Mathematical;

/// Orders keys by numerator, then by denominator.
/// `1/2` and `3/6` are distinct under this ordering.
#[derive(Copy, Clone, Debug, Default)]
pub struct Lexicographic;

impl KeyOrder for Mathematical {
    const NAME: &'static str = "mathematical";

    fn cmp(a: &Fraction, b: &Fraction) -> Ordering {
        Ord::cmp(a, b)
    }
}

impl KeyOrder for Lexicographic {
    const NAME: &'static str = "lexicographic";

    fn cmp(a: &Fraction, b: &Fraction) -> Ordering {
        a.lexi_cmp(b)
    }
}
