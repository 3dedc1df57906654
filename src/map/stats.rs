/*
    Bucket occupancy statistics
*/

use std::fmt;

use super::*;

/// Occupancy of a fixed number of hash buckets.
///
/// Each key lands in bucket `hash % buckets`. The root-mean-square
/// occupancy `sqrt(sum(n_i^2) / buckets)` grows with clustering; for a
/// hash that spreads keys uniformly it approaches
/// [`BucketStats::uniform_rms`].
#[derive(Clone, Debug, PartialEq)]
pub struct BucketStats {
    /// Number of keys hashed.
    pub keys: usize,
    /// Number of buckets.
    pub buckets: usize,
    /// Number of buckets holding at least one key.
    pub used: usize,
    /// Largest number of keys in one bucket.
    pub max_load: usize,
    /// Root-mean-square bucket occupancy.
    pub rms: f64,
}

impl BucketStats {
    /// Hashes every key with `H` into `buckets` buckets.
    /// Panics if `buckets` is zero.
    pub fn collect<'a, H, I>(keys: I, buckets: usize) -> Self
    where
        H: KeyHash,
        I: IntoIterator<Item = &'a Fraction>,
    {
        assert!(buckets > 0, "invalid bucket count, must be positive: {}", buckets);

        let mut loads = vec![0usize; buckets];
        let mut count = 0;
        for key in keys {
            // `buckets` fits in a u64 on every supported target
            let slot = (H::hash(key) % buckets as u64) as usize;
            loads[slot] += 1;
            count += 1;
        }

        let sum_sq: f64 = loads.iter().map(|&n| (n as f64) * (n as f64)).sum();
        Self {
            keys: count,
            buckets,
            used: loads.iter().filter(|&&n| n > 0).count(),
            max_load: loads.iter().copied().max().unwrap_or(0),
            rms: (sum_sq / buckets as f64).sqrt(),
        }
    }

    /// Returns the mean number of keys per bucket.
    pub fn load_factor(&self) -> f64 {
        self.keys as f64 / self.buckets as f64
    }

    /// Returns the expected root-mean-square occupancy for the same number
    /// of keys thrown uniformly at random, `sqrt(l + l^2)` for load factor `l`.
    pub fn uniform_rms(&self) -> f64 {
        let l = self.load_factor();
        (l + l * l).sqrt()
    }
}

impl fmt::Display for BucketStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "keys={} buckets={} used={} max={} rms={:.3} (uniform {:.3})",
            self.keys,
            self.buckets,
            self.used,
            self.max_load,
            self.rms,
            self.uniform_rms()
        )
    }
}
