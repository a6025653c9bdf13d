use alloc::vec::Vec;

use num_bigint::BigUint;

use super::Codec;

/// Marker prepended to every byte string before it is read as a big-endian integer.
/// Without it, `[0, 1]` and `[1]` would collide, and so would `[]` and `[0]`.
const MARKER: u8 = 0x01;

/// [`Codec`] for byte strings: `MARKER ++ bytes`, read as a big-endian unsigned integer.
///
/// Example:
/// ```
/// use cantorstack::codec::{BytesCodec, Codec};
/// use num_bigint::BigUint;
/// let c = BytesCodec;
/// assert_eq!(c.encode(&vec![0xAB]), BigUint::from(0x01ABu32));
/// assert_eq!(c.decode(&c.encode(&vec![0, 0, 7])), vec![0, 0, 7]);
/// ```
#[derive(Copy, Clone, Default, Debug, PartialEq, Eq)]
pub struct BytesCodec;

pub(crate) fn pack(bytes: &[u8]) -> BigUint {
    let mut buf = Vec::with_capacity(bytes.len() + 1);
    buf.push(MARKER);
    buf.extend_from_slice(bytes);
    BigUint::from_bytes_be(&buf)
}

/// Inverse of [`pack`]. Whatever the leading byte is, it is taken as the marker and dropped.
pub(crate) fn unpack(packed: &BigUint) -> Vec<u8> {
    let mut buf = packed.to_bytes_be();
    buf.remove(0);
    buf
}

impl Codec<Vec<u8>> for BytesCodec {
    fn encode(&self, value: &Vec<u8>) -> BigUint { pack(value) }
    fn decode(&self, encoded: &BigUint) -> Vec<u8> { unpack(encoded) }
}
