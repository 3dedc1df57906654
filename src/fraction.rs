/*
    Definition of `Fraction` struct
*/

use thiserror::Error;

mod compare;
mod convert;
mod number;
mod reduce;
mod util;

/// Default magnitude bound for generated fractions.
pub const DEFAULT_BOUND: i32 = 1000;

/** A fraction of two 32-bit integers.
 *
 * A `Fraction` stores its numerator and denominator exactly as given:
 * `1/2` and `3/6` are different representations of the same rational
 * number. Equality and the default ordering are mathematical, so those two
 * compare equal; [`Fraction::lexi_cmp`] compares representations instead.
 *
 * A zero denominator is accepted on construction but does not encode a
 * number. Reduction of such a value fails and comparisons involving it
 * are unspecified.
 *
 */
#[derive(Copy, Clone, Debug)]
pub struct Fraction {
    num: i32,
    den: i32,
}

/// Errors raised by `Fraction` operations on degenerate input.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum FractionError {
    /// The denominator was zero.
    #[error("cannot reduce {num}/0: zero denominator")]
    ZeroDenominator { num: i32 },
    /// The canonical form does not fit in 32-bit components.
    #[error("reducing {0} overflows a 32-bit component")]
    Overflow(Fraction),
    /// The text was not of the form `num` or `num/den`.
    #[error("invalid fraction literal `{0}`")]
    Parse(String),
}

/// Result alias for `Fraction` operations.
pub type Result<T> = std::result::Result<T, FractionError>;
