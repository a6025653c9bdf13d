use alloc::{
    string::String,
    vec::Vec,
};
use core::char::REPLACEMENT_CHARACTER;

use num_bigint::BigUint;

use super::{bytes, Codec};

/// Character encodings supported by [`TextCodec`].
#[derive(Copy, Clone, Default, Debug, PartialEq, Eq, Hash)]
pub enum TextEncoding {
    #[default]
    Utf8,
    Utf16Be,
    Utf16Le,
    /// ISO-8859-1: one byte per char, `U+0000..=U+00FF` only.
    Latin1,
    /// 7-bit US-ASCII.
    Ascii,
}

impl TextEncoding {
    /// Encodes `s` into bytes. Chars the encoding cannot represent become `?`.
    pub fn encode(self, s: &str) -> Vec<u8> {
        match self {
            TextEncoding::Utf8 => s.as_bytes().to_vec(),
            TextEncoding::Utf16Be => s.encode_utf16().flat_map(u16::to_be_bytes).collect(),
            TextEncoding::Utf16Le => s.encode_utf16().flat_map(u16::to_le_bytes).collect(),
            TextEncoding::Latin1 => s.chars().map(|c| narrow(c, 0xFF)).collect(),
            TextEncoding::Ascii => s.chars().map(|c| narrow(c, 0x7F)).collect(),
        }
    }

    /// Decodes `bytes` into a string. Malformed input becomes U+FFFD.
    pub fn decode(self, bytes: &[u8]) -> String {
        match self {
            TextEncoding::Utf8 => String::from_utf8_lossy(bytes).into_owned(),
            TextEncoding::Utf16Be => decode_utf16(bytes, u16::from_be_bytes),
            TextEncoding::Utf16Le => decode_utf16(bytes, u16::from_le_bytes),
            TextEncoding::Latin1 => bytes.iter().map(|&b| b as char).collect(),
            TextEncoding::Ascii => bytes.iter()
                .map(|&b| if b <= 0x7F { b as char } else { REPLACEMENT_CHARACTER })
                .collect(),
        }
    }
}

fn narrow(c: char, max: u32) -> u8 {
    if c as u32 <= max { c as u32 as u8 } else { b'?' }
}

fn decode_utf16(bytes: &[u8], unit: fn([u8; 2]) -> u16) -> String {
    let chunks = bytes.chunks_exact(2);
    let odd = !chunks.remainder().is_empty();
    let mut s = char::decode_utf16(chunks.map(|c| unit([c[0], c[1]])))
        .map(|r| r.unwrap_or(REPLACEMENT_CHARACTER))
        .collect::<String>();
    if odd {
        s.push(REPLACEMENT_CHARACTER);
    }
    s
}

/// [`Codec`] for strings: text is encoded to bytes with a [`TextEncoding`], then packed like
/// [`crate::codec::BytesCodec`].
///
/// Round-trips every string the chosen encoding can represent.
///
/// Example:
/// ```
/// use cantorstack::codec::{Codec, TextCodec, TextEncoding};
/// let c = TextCodec::new(TextEncoding::Utf16Le);
/// let s = String::from("héllo, 世界");
/// assert_eq!(c.decode(&c.encode(&s)), s);
/// ```
#[derive(Copy, Clone, Default, Debug, PartialEq, Eq)]
pub struct TextCodec {
    encoding: TextEncoding,
}

impl TextCodec {
    /// Creates a codec converting text with `encoding`.
    pub fn new(encoding: TextEncoding) -> Self { Self { encoding } }

    /// Returns the character encoding of this codec.
    pub fn encoding(&self) -> TextEncoding { self.encoding }
}

impl Codec<String> for TextCodec {
    fn encode(&self, value: &String) -> BigUint { bytes::pack(&self.encoding.encode(value)) }
    fn decode(&self, encoded: &BigUint) -> String { self.encoding.decode(&bytes::unpack(encoded)) }
}
