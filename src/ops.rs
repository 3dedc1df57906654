/*
    Operations
*/

use crate::Rational;

/// Canonicalization of a `Rational`.
///
/// Two mathematically equal values must reduce to identical
/// representations, and reducing twice is the same as reducing once.
pub trait Reduce: Rational {
    /// The error raised when no canonical form exists.
    type Error;

    /// Returns the canonical representation of this value.
    fn reduce(&self) -> Result<Self, Self::Error>;
}
