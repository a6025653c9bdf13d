#![doc = include_str!("../README.md")]
#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod codec;
pub mod pairing;
mod error;
mod stack;

pub use self::{
    codec::Codec,
    error::{StackError, StackResult},
    stack::{CantorStack, Drain, IntoIter},
};
