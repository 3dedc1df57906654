/*
    Hash strategies for `Fraction`
*/

use super::*;
use crate::{Fraction, KeyHash, Rational, Reduce};

// Sign-extends an `i32` to a full word.
#[inline]
fn word(x: i32) -> u64 {
    x as i64 as u64
}

// Components of the canonical form. A degenerate fraction has none, so
// its stored components are used instead.
#[inline]
fn canonical_parts(f: &Fraction) -> (i32, i32) {
    f.reduce()
        .map(|r| r.parts())
        .unwrap_or((f.numer(), f.denom()))
}

/// Xor of the reduced numerator and denominator.
///
/// Kept as a counterexample: it is symmetric, so `2/3` and `3/2` collide,
/// and any pair with equal components hashes to zero.
#[derive(Copy, Clone, Debug, Default)]
pub struct XorHash;

/// Packs the reduced numerator and denominator into one word with a shift
/// and xor, then multiplies by an odd constant.
///
/// Order-sensitive, but the single multiply mixes poorly into the low bits.
#[derive(Copy, Clone, Debug, Default)]
pub struct ShiftXorHash;

/// Folds the reduced numerator and then the reduced denominator through
/// [`combine64`], starting from seed 0.
///
/// This is the strategy used by `Hash for Fraction`.
#[derive(Copy, Clone, Debug, Default)]
pub struct MixHash;

impl KeyHash for XorHash {
    const NAME: &'static str = "xor";

    fn hash(f: &Fraction) -> u64 {
        let (num, den) = canonical_parts(f);
        word(num ^ den)
    }
}

impl KeyHash for ShiftXorHash {
    const NAME: &'static str = "shift-xor";

    fn hash(f: &Fraction) -> u64 {
        let (num, den) = canonical_parts(f);
        let packed = (u64::from(num as u32) << 32) ^ u64::from(den as u32);
        packed.wrapping_mul(FIBONACCI)
    }
}

impl KeyHash for MixHash {
    const NAME: &'static str = "mix";

    fn hash(f: &Fraction) -> u64 {
        let (num, den) = canonical_parts(f);
        combine64(combine64(0, word(num)), word(den))
    }
}
