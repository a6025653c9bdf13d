use core::marker::PhantomData;

use num_bigint::BigUint;

use super::Codec;

/// Passthrough [`Codec`] for primitive integers.
///
/// - Unsigned integers map to themselves.
/// - Signed integers are zigzag-mapped (`0, -1, 1, -2, 2, ...` to `0, 1, 2, 3, 4, ...`) so that
///   negative values stay representable and small magnitudes stay small.
///
/// Decoding an integer that does not fit `T` keeps only its low bits, like an `as` cast.
///
/// Example:
/// ```
/// use cantorstack::codec::{Codec, IntCodec};
/// use num_bigint::BigUint;
/// let c = IntCodec::<i64>::new();
/// assert_eq!(c.encode(&-3), BigUint::from(5u32));
/// assert_eq!(c.decode(&c.encode(&i64::MIN)), i64::MIN);
/// ```
#[derive(Copy, Clone, Default, Debug, PartialEq, Eq)]
pub struct IntCodec<T>(PhantomData<fn(T) -> T>);

impl<T> IntCodec<T> {
    /// Creates the codec.
    pub const fn new() -> Self { Self(PhantomData) }
}

/// Low 128 bits of `n`.
fn low_u128(n: &BigUint) -> u128 {
    let mut digits = n.iter_u64_digits();
    let lo = digits.next().unwrap_or(0) as u128;
    let hi = digits.next().unwrap_or(0) as u128;
    (hi << 64) | lo
}

fn zigzag(x: i128) -> u128 { ((x << 1) ^ (x >> 127)) as u128 }

fn unzigzag(z: u128) -> i128 { ((z >> 1) as i128) ^ -((z & 1) as i128) }

macro_rules! unsigned_codec {
    ($($t:ty),*) => {$(
        impl Codec<$t> for IntCodec<$t> {
            fn encode(&self, value: &$t) -> BigUint { BigUint::from(*value) }
            fn decode(&self, encoded: &BigUint) -> $t { low_u128(encoded) as $t }
        }
    )*};
}

macro_rules! signed_codec {
    ($($t:ty),*) => {$(
        impl Codec<$t> for IntCodec<$t> {
            fn encode(&self, value: &$t) -> BigUint { BigUint::from(zigzag(*value as i128)) }
            fn decode(&self, encoded: &BigUint) -> $t { unzigzag(low_u128(encoded)) as $t }
        }
    )*};
}

unsigned_codec!(u8, u16, u32, u64, u128, usize);
signed_codec!(i8, i16, i32, i64, i128, isize);
