use num_integer::Integer;
use num_traits::Zero;

// Greatest common divisor by Euclid's algorithm (repeated remainder).
// Both arguments must be non-negative; `gcd(0, 0)` is 0.
pub(crate) fn gcd<T: Integer + Copy>(mut a: T, mut b: T) -> T {
    if a < b {
        std::mem::swap(&mut a, &mut b);
    }
    while !b.is_zero() {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}
