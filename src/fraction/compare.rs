/*
    Equality and ordering
*/

use std::cmp::Ordering;

use super::*;

impl Fraction {
    // Cross products `(self.num * other.den, self.den * other.num)`,
    // widened so that no 32-bit input can overflow.
    #[inline]
    fn cross(&self, other: &Self) -> (i64, i64) {
        (
            i64::from(self.num) * i64::from(other.den),
            i64::from(self.den) * i64::from(other.num),
        )
    }

    /// Returns true if this `Fraction` is strictly less than `other`
    /// as a rational number.
    pub fn less_than(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Less
    }

    /// Compares the stored representations, numerator first and then
    /// denominator. This ordering has no mathematical meaning:
    /// `1/2` sorts before `3/6` although they are equal.
    pub fn lexi_cmp(&self, other: &Self) -> Ordering {
        self.num
            .cmp(&other.num)
            .then_with(|| self.den.cmp(&other.den))
    }

    /// Returns true if this `Fraction` sorts before `other` under
    /// [`Fraction::lexi_cmp`].
    pub fn lexi_less(&self, other: &Self) -> bool {
        self.lexi_cmp(other) == Ordering::Less
    }
}

impl PartialEq for Fraction {
    fn eq(&self, other: &Self) -> bool {
        let (lhs, rhs) = self.cross(other);
        lhs == rhs
    }
}

impl Eq for Fraction {}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        // a/b < c/d  <=>  a*d < b*c  when b, d > 0. Multiplying through by
        // a negative denominator flips the inequality; two flips cancel.
        let (lhs, rhs) = self.cross(other);
        let ord = lhs.cmp(&rhs);
        if (self.den < 0) != (other.den < 0) {
            ord.reverse()
        } else {
            ord
        }
    }
}
