/*
    Constructors and getters
*/

use super::*;
use crate::Rational;

impl Fraction {
    /// Creates a new `Fraction` from a numerator and denominator.
    /// No validation or reduction is performed.
    pub const fn new(num: i32, den: i32) -> Self {
        Self { num, den }
    }

    /// Creates a `Fraction` encoding the integer `n`, that is, `n/1`.
    pub const fn from_int(n: i32) -> Self {
        Self { num: n, den: 1 }
    }

    /// Returns the stored components as a pair.
    pub const fn parts(&self) -> (i32, i32) {
        (self.num, self.den)
    }
}

impl Rational for Fraction {
    type Int = i32;

    fn numer(&self) -> i32 {
        self.num
    }

    fn denom(&self) -> i32 {
        self.den
    }

    fn is_zero(&self) -> bool {
        self.num == 0 && self.den != 0
    }

    fn is_negative(&self) -> bool {
        self.num != 0 && self.den != 0 && ((self.num < 0) != (self.den < 0))
    }

    fn is_degenerate(&self) -> bool {
        self.den == 0
    }
}

// Implementing `Default` for `Fraction`
impl Default for Fraction {
    fn default() -> Self {
        Self::from_int(0)
    }
}

impl From<i32> for Fraction {
    fn from(n: i32) -> Self {
        Self::from_int(n)
    }
}

impl From<(i32, i32)> for Fraction {
    fn from((num, den): (i32, i32)) -> Self {
        Self::new(num, den)
    }
}
