//! Defines the [`Codec`] trait: how values get in and out of a [`crate::CantorStack`].

mod bytes;
mod int;
mod text;

use core::marker::PhantomData;

use num_bigint::BigUint;

pub use self::{
    bytes::BytesCodec,
    int::IntCodec,
    text::{TextCodec, TextEncoding},
};

/// A two-way mapping between values of type `T` and non-negative integers.
///
/// Implementations must round-trip: `decode(&encode(v)) == v` for every `v` that will be
/// pushed. This is not checked anywhere; a codec that breaks it makes the stack return garbage,
/// but never corrupts the elements below.
///
/// `decode` is total: it may be handed any integer, and should return _something_ (e.g. a
/// truncated or lossy value) rather than panic.
pub trait Codec<T> {
    /// Maps a value to its integer representation.
    fn encode(&self, value: &T) -> BigUint;

    /// Maps an integer back to a value.
    fn decode(&self, encoded: &BigUint) -> T;
}

impl<T, C: Codec<T> + ?Sized> Codec<T> for &C {
    fn encode(&self, value: &T) -> BigUint { (**self).encode(value) }
    fn decode(&self, encoded: &BigUint) -> T { (**self).decode(encoded) }
}

/// A [`Codec`] made of a pair of closures.
///
/// Example:
/// ```
/// use cantorstack::codec::{Codec, FnCodec};
/// use num_bigint::BigUint;
/// let c = FnCodec::new(|b: &BigUint| b.bits() as u8, |v: &u8| BigUint::from(1u32) << *v);
/// assert_eq!(c.encode(&4), BigUint::from(16u32));
/// assert_eq!(c.decode(&BigUint::from(16u32)), 5);
/// ```
pub struct FnCodec<T, D, E>
    where D: Fn(&BigUint) -> T, E: Fn(&T) -> BigUint {
    decode: D,
    encode: E,
    _marker: PhantomData<fn(T) -> T>,
}

impl<T, D, E> FnCodec<T, D, E>
    where D: Fn(&BigUint) -> T, E: Fn(&T) -> BigUint {
    /// Creates a codec from its `decode` and `encode` halves (in that order).
    pub fn new(decode: D, encode: E) -> Self {
        Self { decode, encode, _marker: PhantomData }
    }
}

impl<T, D, E> Codec<T> for FnCodec<T, D, E>
    where D: Fn(&BigUint) -> T, E: Fn(&T) -> BigUint {
    fn encode(&self, value: &T) -> BigUint { (self.encode)(value) }
    fn decode(&self, encoded: &BigUint) -> T { (self.decode)(encoded) }
}

impl<T, D, E> Clone for FnCodec<T, D, E>
    where D: Fn(&BigUint) -> T + Clone, E: Fn(&T) -> BigUint + Clone {
    fn clone(&self) -> Self { Self::new(self.decode.clone(), self.encode.clone()) }
}
