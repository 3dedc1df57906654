/*
    Adapters to `std::hash`
*/

use std::hash::{BuildHasher, Hash, Hasher};

use super::*;
use crate::{Fraction, KeyHash};

/// A `Hasher` that passes a precomputed word through unchanged.
///
/// Keys hashed with it should write exactly one `u64`, the output of a
/// [`KeyHash`] strategy, so that the strategy alone decides the bucket.
/// Any other writes are folded in with [`combine64`].
#[derive(Copy, Clone, Debug, Default)]
pub struct PassThroughHasher {
    state: u64,
}

impl Hasher for PassThroughHasher {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        for chunk in bytes.chunks(8) {
            let mut buf = [0u8; 8];
            buf[..chunk.len()].copy_from_slice(chunk);
            self.state = combine64(self.state, u64::from_le_bytes(buf));
        }
    }

    fn write_u64(&mut self, i: u64) {
        self.state = i;
    }
}

/// Builds [`PassThroughHasher`]s.
#[derive(Copy, Clone, Debug, Default)]
pub struct BuildPassThrough;

impl BuildHasher for BuildPassThrough {
    type Hasher = PassThroughHasher;

    fn build_hasher(&self) -> PassThroughHasher {
        PassThroughHasher::default()
    }
}

// Consistent with mathematical equality: equal fractions reduce to the
// same components.
impl Hash for Fraction {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(<MixHash as KeyHash>::hash(self));
    }
}
