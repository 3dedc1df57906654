/*
    Reduction
*/

use super::util::gcd;
use super::*;
use crate::Reduce;

impl Reduce for Fraction {
    type Error = FractionError;

    /// Divides both components by their greatest common divisor.
    ///
    /// The sign of the divisor follows the denominator, so the result
    /// always has a positive denominator and zero reduces to `0/1`.
    /// Fails with [`FractionError::ZeroDenominator`] if the denominator is
    /// zero and with [`FractionError::Overflow`] if a component of the
    /// result does not fit in an `i32` (only possible at `i32::MIN`).
    fn reduce(&self) -> Result<Self> {
        if self.den == 0 {
            return Err(FractionError::ZeroDenominator { num: self.num });
        }

        // widen so that |i32::MIN| is representable
        let num = i64::from(self.num);
        let den = i64::from(self.den);
        let mut div = gcd(num.abs(), den.abs());
        if den < 0 {
            div = -div;
        }

        let overflow = |_: std::num::TryFromIntError| FractionError::Overflow(*self);
        Ok(Self {
            num: i32::try_from(num / div).map_err(overflow)?,
            den: i32::try_from(den / div).map_err(overflow)?,
        })
    }
}

impl Fraction {
    /// Returns true if this `Fraction` is already in canonical form:
    /// positive denominator and coprime components.
    pub fn is_reduced(&self) -> bool {
        self.den > 0
            && gcd(i64::from(self.num).abs(), i64::from(self.den)) == 1
    }
}
