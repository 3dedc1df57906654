/*
    Defines a rational number
*/

/// The rational number view.
///
/// A `Rational` is a ratio of two stored integers. Nothing about the
/// representation is assumed to be canonical: `1/2` and `3/6` are different
/// representations of the same number.
pub trait Rational: Copy {
    /// The integer type of both components.
    type Int;

    /// Returns the stored numerator.
    fn numer(&self) -> Self::Int;

    /// Returns the stored denominator.
    fn denom(&self) -> Self::Int;

    /// Returns true if this `Rational` encodes zero.
    fn is_zero(&self) -> bool;

    /// Returns true if this `Rational` encodes a number strictly below zero.
    fn is_negative(&self) -> bool;

    /// Returns true if the denominator is zero.
    /// Such a value does not encode a number and most operations on it
    /// are unspecified.
    fn is_degenerate(&self) -> bool;
}
