/*
    Conversions to and from `Fraction`
*/

use std::fmt;
use std::str::FromStr;

use num_traits::cast::ToPrimitive;
use rand::Rng;

use super::*;

// Renders the stored components; rendering never reduces.
impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.num, self.den)
    }
}

// Parses `num/den` or a bare integer `num`
impl FromStr for Fraction {
    type Err = FractionError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = |_: std::num::ParseIntError| FractionError::Parse(s.to_owned());
        match s.trim().split_once('/') {
            Some((num, den)) => Ok(Self::new(
                num.trim().parse().map_err(invalid)?,
                den.trim().parse().map_err(invalid)?,
            )),
            None => Ok(Self::from_int(s.trim().parse().map_err(invalid)?)),
        }
    }
}

// Integer conversions truncate toward zero, like the float impls.
impl ToPrimitive for Fraction {
    fn to_i64(&self) -> Option<i64> {
        if self.den == 0 {
            None
        } else {
            Some(i64::from(self.num) / i64::from(self.den))
        }
    }

    fn to_u64(&self) -> Option<u64> {
        self.to_i64().and_then(|i| u64::try_from(i).ok())
    }

    fn to_f64(&self) -> Option<f64> {
        if self.den == 0 {
            None
        } else {
            Some(f64::from(self.num) / f64::from(self.den))
        }
    }
}

macro_rules! assert_valid_bound {
    ($bound:expr) => {
        assert!(
            $bound > 0,
            "invalid bound, must be a positive integer: {}",
            $bound
        );
    };
}

// Generators
impl Fraction {
    /// Returns a `Fraction` whose numerator and denominator are drawn
    /// uniformly from `[-bound, bound]`, redrawing the denominator until
    /// it is nonzero.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, bound: i32) -> Self {
        assert_valid_bound!(bound);
        let num = rng.gen_range(-bound..=bound);
        let den = loop {
            let d = rng.gen_range(-bound..=bound);
            if d != 0 {
                break d;
            }
        };
        Self::new(num, den)
    }

    /// Iterates over every `Fraction` with numerator and denominator in
    /// `[-bound, bound]` and a nonzero denominator, numerator-major.
    /// The grid holds `(2 * bound + 1) * 2 * bound` fractions.
    pub fn grid(bound: i32) -> impl Iterator<Item = Fraction> {
        assert_valid_bound!(bound);
        (-bound..=bound).flat_map(move |num| {
            (-bound..=bound)
                .filter(|&den| den != 0)
                .map(move |den| Fraction::new(num, den))
        })
    }
}
