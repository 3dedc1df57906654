/*
    Hash combination
*/

use super::*;

/// Folds `value` into the running hash `seed` using the 64-bit
/// multiply/xor-shift mixer. All arithmetic wraps.
///
/// The function is pure: the same `(seed, value)` always produces the
/// same result, in every process.
#[inline]
pub const fn combine64(seed: u64, value: u64) -> u64 {
    let mut k = value.wrapping_mul(M64);
    k ^= k >> R64;
    k = k.wrapping_mul(M64);

    let mut h = seed ^ k;
    h = h.wrapping_mul(M64);
    h.wrapping_add(OFFSET as u64)
}

/// Folds `value` into the running hash `seed` using the 32-bit
/// multiply/rotate mixer. All arithmetic wraps.
#[inline]
pub const fn combine32(seed: u32, value: u32) -> u32 {
    let mut k = value.wrapping_mul(C1);
    k = k.rotate_left(15);
    k = k.wrapping_mul(C2);

    let mut h = seed ^ k;
    h = h.rotate_left(13);
    h.wrapping_mul(5).wrapping_add(OFFSET)
}

/// Folds `value` into `seed` with the mixer matching the native word size.
#[cfg(target_pointer_width = "64")]
#[inline]
pub const fn combine(seed: usize, value: usize) -> usize {
    combine64(seed as u64, value as u64) as usize
}

/// Folds `value` into `seed` with the mixer matching the native word size.
#[cfg(not(target_pointer_width = "64"))]
#[inline]
pub const fn combine(seed: usize, value: usize) -> usize {
    combine32(seed as u32, value as u32) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_does_not_hash_to_zero() {
        assert_eq!(combine64(0, 0), OFFSET as u64);
        assert_eq!(combine32(0, 0), OFFSET);
    }

    #[test]
    fn native_word() {
        #[cfg(target_pointer_width = "64")]
        assert_eq!(combine(3, 7) as u64, combine64(3, 7));
        #[cfg(target_pointer_width = "32")]
        assert_eq!(combine(3, 7) as u32, combine32(3, 7));
    }
}
