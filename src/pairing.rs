//! The Cantor pairing function and its inverse over arbitrary-precision unsigned integers.
//!
//! `pair(x, y) = (x + y) * (x + y + 1) / 2 + y` is a bijection from pairs of non-negative integers
//! onto the non-negative integers. Pairs are laid out along anti-diagonals:
//!
//! ```text
//!   y\x | 0  1  2  3
//!   ----+------------
//!    0  | 0  1  3  6
//!    1  | 2  4  7
//!    2  | 5  8
//!    3  | 9
//! ```
//!
//! Inverting it needs the index `w = x + y` of the anti-diagonal, which takes an exact integer
//! square root. All arithmetic here is exact; nothing goes through floating point.

use num_bigint::BigUint;

/// Combines `first` and `second` into a single integer.
///
/// Example:
/// ```
/// use cantorstack::pairing::pair;
/// use num_bigint::BigUint;
/// assert_eq!(pair(&BigUint::from(2u32), &BigUint::from(1u32)), BigUint::from(7u32));
/// ```
pub fn pair(first: &BigUint, second: &BigUint) -> BigUint {
    let w = first + second;
    let t = (&w * (&w + 1u32)) >> 1;
    t + second
}

/// Splits `combined` back into the `(first, second)` it was [`pair`]ed from.
///
/// Example:
/// ```
/// use cantorstack::pairing::unpair;
/// use num_bigint::BigUint;
/// assert_eq!(unpair(&BigUint::from(7u32)), (BigUint::from(2u32), BigUint::from(1u32)));
/// ```
pub fn unpair(combined: &BigUint) -> (BigUint, BigUint) {
    // w = floor((sqrt(8z + 1) - 1) / 2); sqrt(8z + 1) >= 1 so this never underflows.
    let w = (isqrt(&((combined << 3u32) + 1u32)) - 1u32) >> 1;
    let t = (&w * &w + &w) >> 1;
    let second = combined - t;
    let first = w - &second;
    (first, second)
}

/// Returns `floor(sqrt(n))`: the largest integer whose square does not exceed `n`.
///
/// Newton iteration on integers (num-bigint's [`BigUint::sqrt`]), exact for any magnitude.
///
/// Example:
/// ```
/// use cantorstack::pairing::isqrt;
/// use num_bigint::BigUint;
/// assert_eq!(isqrt(&BigUint::from(99u32)), BigUint::from(9u32));
/// assert_eq!(isqrt(&BigUint::from(100u32)), BigUint::from(10u32));
/// ```
pub fn isqrt(n: &BigUint) -> BigUint {
    n.sqrt()
}
