/*
    Hashing
*/

mod combine;
mod hasher;
mod strategies;

pub use combine::*;
pub use hasher::*;
pub use strategies::*;

/// Multiplier of the 64-bit mixer.
pub const M64: u64 = 0xc6a4a7935bd1e99;

/// Right shift of the 64-bit mixer.
pub const R64: u32 = 47;

/// First multiplier of the 32-bit mixer.
pub const C1: u32 = 0xcc9e2d51;

/// Second multiplier of the 32-bit mixer.
pub const C2: u32 = 0x1b873593;

/// Additive constant of both mixers; keeps a zero input from hashing to zero.
pub const OFFSET: u32 = 0xe6546b64;

/// Odd multiplier (2^64 / golden ratio) of [`ShiftXorHash`].
pub const FIBONACCI: u64 = 0x9e3779b97f4a7c15;
