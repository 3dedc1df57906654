/*
    Top-level
*/

mod number;
mod ops;
mod strategy;

pub mod fraction;
pub mod hash;
pub mod map;

pub use fraction::{Fraction, FractionError};
pub use number::*;
pub use ops::*;
pub use strategy::*;
