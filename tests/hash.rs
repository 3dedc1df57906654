use std::collections::{HashMap, HashSet};
use std::hash::{BuildHasher, Hash, Hasher};

use frac_map::hash::*;
use frac_map::*;

fn frac(num: i32, den: i32) -> Fraction {
    Fraction::new(num, den)
}

#[test]
fn combine64_vectors() {
    // hand-computed from the mixer definition
    let k = 1u64.wrapping_mul(M64);
    let k = (k ^ (k >> 47)).wrapping_mul(M64);
    let expected = k.wrapping_mul(M64).wrapping_add(0xe6546b64);
    assert_eq!(combine64(0, 1), expected);

    assert_eq!(combine64(0, 0), 0xe6546b64);
    assert_eq!(combine64(7, 0), 7u64.wrapping_mul(M64).wrapping_add(0xe6546b64));
}

#[test]
fn combine32_vectors() {
    assert_eq!(combine32(0, 0), 0xe6546b64);

    let k = 1u32.wrapping_mul(C1).rotate_left(15).wrapping_mul(C2);
    let expected = k.rotate_left(13).wrapping_mul(5).wrapping_add(0xe6546b64);
    assert_eq!(combine32(0, 1), expected);
}

#[test]
fn combine_is_deterministic() {
    for seed in [0u64, 1, 0xdead_beef, u64::MAX] {
        for value in [0u64, 1, 42, u64::MAX] {
            assert_eq!(combine64(seed, value), combine64(seed, value));
        }
    }
    assert_eq!(combine(5, 9), combine(5, 9));
}

#[test]
fn combine_is_order_sensitive() {
    let ab = combine64(combine64(0, 2), 3);
    let ba = combine64(combine64(0, 3), 2);
    assert_ne!(ab, ba);
}

#[test]
fn combine_avalanche() {
    // nearby inputs should almost never collide
    let outputs: HashSet<u64> = (0u64..100_000).map(|x| combine64(0, x)).collect();
    assert!(outputs.len() >= 99_990, "collisions: {}", 100_000 - outputs.len());

    // nor should their low bits cluster
    let low: HashSet<u64> = (0u64..4096).map(|x| combine64(0, x) & 0xfff).collect();
    assert!(low.len() > 2000, "distinct low 12 bits: {}", low.len());

    let outputs: HashSet<u32> = (0u32..100_000).map(|x| combine32(0, x)).collect();
    assert!(outputs.len() >= 99_990, "collisions: {}", 100_000 - outputs.len());
}

#[test]
fn strategies_respect_equality() {
    let pairs = [
        (frac(1, 2), frac(3, 6)),
        (frac(-1, 2), frac(1, -2)),
        (frac(-4, -8), frac(1, 2)),
        (frac(0, 5), frac(0, -9)),
        (frac(1000, -100), frac(-10, 1)),
    ];
    for (a, b) in pairs {
        assert_eq!(a, b);
        assert_eq!(MixHash::hash(&a), MixHash::hash(&b), "{} vs {}", a, b);
        assert_eq!(XorHash::hash(&a), XorHash::hash(&b), "{} vs {}", a, b);
        assert_eq!(ShiftXorHash::hash(&a), ShiftXorHash::hash(&b), "{} vs {}", a, b);
    }
}

#[test]
fn mix_hash_definition() {
    let f = frac(-6, 4);
    let expected = combine64(combine64(0, -3i64 as u64), 2);
    assert_eq!(MixHash::hash(&f), expected);
}

#[test]
fn xor_hash_defects() {
    // symmetric
    assert_eq!(XorHash::hash(&frac(2, 3)), XorHash::hash(&frac(3, 2)));
    assert_eq!(XorHash::hash(&frac(5, 7)), XorHash::hash(&frac(7, 5)));
    // equal components hash to zero
    assert_eq!(XorHash::hash(&frac(4, 4)), 0);
    // the better strategies tell them apart
    assert_ne!(ShiftXorHash::hash(&frac(2, 3)), ShiftXorHash::hash(&frac(3, 2)));
    assert_ne!(MixHash::hash(&frac(2, 3)), MixHash::hash(&frac(3, 2)));
}

#[test]
fn distinct_values_rarely_collide() {
    let keys: Vec<Fraction> = Fraction::grid(60)
        .filter(|f| f.is_reduced())
        .collect();
    let mix: HashSet<u64> = keys.iter().map(MixHash::hash).collect();
    let xor: HashSet<u64> = keys.iter().map(XorHash::hash).collect();
    assert_eq!(mix.len(), keys.len());
    assert!(xor.len() < keys.len() / 2, "xor distinct: {}", xor.len());
}

#[test]
fn degenerate_fractions_hash() {
    // no canonical form; stored components are used
    assert_eq!(MixHash::hash(&frac(0, 0)), combine64(combine64(0, 0), 0));
    assert_eq!(XorHash::hash(&frac(3, 0)), 3);
}

#[test]
fn std_hash_uses_mix() {
    let build = BuildPassThrough;
    let mut h = build.build_hasher();
    frac(3, 6).hash(&mut h);
    assert_eq!(h.finish(), MixHash::hash(&frac(1, 2)));

    let mut h1 = std::collections::hash_map::DefaultHasher::new();
    let mut h2 = std::collections::hash_map::DefaultHasher::new();
    frac(2, 4).hash(&mut h1);
    frac(-1, -2).hash(&mut h2);
    assert_eq!(h1.finish(), h2.finish());
}

#[test]
fn std_hash_map_key() {
    let mut m = HashMap::new();
    m.insert(frac(1, 2), "half");
    m.insert(frac(3, 6), "still half");
    m.insert(frac(2, 3), "two thirds");
    assert_eq!(m.len(), 2);
    assert_eq!(m[&frac(-5, -10)], "still half");
}

#[test]
fn pass_through_folds_raw_bytes() {
    let mut h = PassThroughHasher::default();
    h.write(&[1, 0, 0, 0, 0, 0, 0, 0]);
    assert_eq!(h.finish(), combine64(0, 1));
}
