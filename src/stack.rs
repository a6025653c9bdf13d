use core::{
    fmt::{Debug, Formatter},
    iter::FusedIterator,
    marker::PhantomData,
};

use num_bigint::BigUint;
use num_traits::Zero;

use crate::codec::{Codec, FnCodec};
use crate::error::{StackError, StackResult};
use crate::pairing::{pair, unpair};

/// An unbounded LIFO stack whose entire contents live in a single [`BigUint`].
///
/// Each element is [`Codec::encode`]d to an integer `e`, then folded into the running `base` as
/// `base = pair(base, e)` (see [`crate::pairing`]). Popping [`unpair`]s the base back into the
/// previous base and the top element.
///
/// - `T`: the element type.
/// - `C`: the [`Codec`] converting between `T` and integers, fixed at construction.
///
/// There is no capacity limit, but every push roughly squares the base, i.e. doubles its bit
/// length. Memory and the cost of each operation therefore double per element: a few hundred
/// bits at depth 8, ~12k bits at depth 14, ~1M bits at depth 20. Practical depth is about 20 to
/// 25 elements.
///
/// ## Summary of supported operations
///
/// - {push,pop} at the top of the stack; peek at the top without removing it.
/// - Element count, emptiness, clearing.
///
/// ## Iterator support
///
/// **Iterating a `CantorStack` consumes it.** There is no way to visit the elements without
/// popping them, so there is no non-destructive iterator:
///
/// - [`Self::drain`] borrows the stack mutably and pops one element per step; whatever the
///   iterator has yielded is gone from the stack.
/// - The stack implements [`IntoIterator`] by value, which drains it the same way.
/// - The stack implements [`Extend`], pushing each element in order.
/// - With a [`Default`] codec, the stack implements [`FromIterator`] and can therefore be
///   [`Iterator::collect`]ed into.
///
/// Example:
/// ```
/// use cantorstack::{CantorStack, codec::IntCodec};
/// let mut s: CantorStack<i32, _> = CantorStack::new(IntCodec::<i32>::new());
/// s.extend([1, 2, 3]);
/// assert_eq!(s.len(), 3);
/// assert_eq!(s.pop(), Ok(3));
/// assert_eq!(s.drain().collect::<Vec<_>>(), vec![2, 1]);
/// // NOTE: the stack has been drained by the line above.
/// assert!(s.is_empty());
/// ```
///
pub struct CantorStack<T, C: Codec<T>> {
    base: BigUint,
    len: usize,
    codec: C,
    _marker: PhantomData<fn(T) -> T>,
}

impl<T, C: Codec<T>> CantorStack<T, C> {
    /// Creates an empty stack using `codec` to convert elements.
    pub fn new(codec: C) -> Self {
        Self {
            base: BigUint::zero(),
            len: 0,
            codec,
            _marker: PhantomData,
        }
    }

    /// Returns the codec of this stack.
    pub fn codec(&self) -> &C { &self.codec }

    /// Returns the number of elements currently in the stack.
    pub fn len(&self) -> usize { self.len }

    /// Returns whether this stack is empty.
    ///
    /// Note that this is tracked separately from the base: a base of `0` can still hold elements
    /// (`pair(0, 0) == 0`).
    pub fn is_empty(&self) -> bool { self.len == 0 }

    /// Pushes an element onto the top of this stack.
    pub fn push(&mut self, elem: T) {
        let e = self.codec.encode(&elem);
        self.base = pair(&self.base, &e);
        self.len += 1;
    }

    /// Removes the element on top and returns it.
    /// Returns [`StackError::Empty`] (leaving the stack untouched) if the stack is empty.
    pub fn pop(&mut self) -> StackResult<T> {
        if self.is_empty() {
            return Err(StackError::Empty);
        }
        let (rest, e) = unpair(&self.base);
        let elem = self.codec.decode(&e);
        self.base = rest;
        self.len -= 1;
        Ok(elem)
    }

    /// Returns a copy of the element on top, or `None` if the stack is empty.
    pub fn peek(&self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let (_, e) = unpair(&self.base);
        Some(self.codec.decode(&e))
    }

    /// Removes all elements.
    pub fn clear(&mut self) {
        self.base.set_zero();
        self.len = 0;
    }

    /// Returns an iterator that pops elements off the top of this stack, last pushed first.
    ///
    /// Every element the iterator yields is removed from the stack. Dropping the iterator early
    /// leaves the remaining elements in place.
    pub fn drain(&mut self) -> Drain<'_, T, C> {
        Drain { stack: self }
    }
}

impl<T, D, E> CantorStack<T, FnCodec<T, D, E>>
    where D: Fn(&BigUint) -> T, E: Fn(&T) -> BigUint {
    /// Creates an empty stack from a `decode` and an `encode` function (in that order).
    ///
    /// Example:
    /// ```
    /// use cantorstack::CantorStack;
    /// use num_bigint::BigUint;
    /// use num_traits::ToPrimitive;
    /// let mut s = CantorStack::from_fns(
    ///     |b: &BigUint| b.to_u64().unwrap_or(0),
    ///     |v: &u64| BigUint::from(*v),
    /// );
    /// s.push(10);
    /// s.push(20);
    /// assert_eq!(s.pop(), Ok(20));
    /// ```
    pub fn from_fns(decode: D, encode: E) -> Self {
        Self::new(FnCodec::new(decode, encode))
    }
}

impl<T, C: Codec<T> + Default> Default for CantorStack<T, C> {
    fn default() -> Self { Self::new(C::default()) }
}

impl<T, C: Codec<T> + Clone> Clone for CantorStack<T, C> {
    fn clone(&self) -> Self {
        Self {
            base: self.base.clone(),
            len: self.len,
            codec: self.codec.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T, C: Codec<T>> Extend<T> for CantorStack<T, C> {
    fn extend<It: IntoIterator<Item=T>>(&mut self, iter: It) {
        for elem in iter {
            self.push(elem);
        }
    }
}

impl<T, C: Codec<T> + Default> FromIterator<T> for CantorStack<T, C> {
    fn from_iter<It: IntoIterator<Item=T>>(iter: It) -> Self {
        let mut s = Self::default();
        s.extend(iter);
        s
    }
}

impl<T, C: Codec<T>> IntoIterator for CantorStack<T, C> {
    type Item = T;
    type IntoIter = IntoIter<T, C>;
    fn into_iter(self) -> Self::IntoIter { IntoIter { stack: self } }
}

impl<T: Debug, C: Codec<T>> Debug for CantorStack<T, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CantorStack")
            .field("len", &self.len)
            .field("top", &self.peek())
            .finish()
    }
}

/// Draining iterator returned by [`CantorStack::drain`].
pub struct Drain<'a, T, C: Codec<T>> {
    stack: &'a mut CantorStack<T, C>,
}

impl<T, C: Codec<T>> Iterator for Drain<'_, T, C> {
    type Item = T;
    fn next(&mut self) -> Option<T> { self.stack.pop().ok() }
    fn size_hint(&self) -> (usize, Option<usize>) { (self.stack.len, Some(self.stack.len)) }
}

impl<T, C: Codec<T>> ExactSizeIterator for Drain<'_, T, C> {}

impl<T, C: Codec<T>> FusedIterator for Drain<'_, T, C> {}

/// Owning iterator returned by [`CantorStack::into_iter`].
pub struct IntoIter<T, C: Codec<T>> {
    stack: CantorStack<T, C>,
}

impl<T, C: Codec<T>> Iterator for IntoIter<T, C> {
    type Item = T;
    fn next(&mut self) -> Option<T> { self.stack.pop().ok() }
    fn size_hint(&self) -> (usize, Option<usize>) { (self.stack.len, Some(self.stack.len)) }
}

impl<T, C: Codec<T>> ExactSizeIterator for IntoIter<T, C> {}

impl<T, C: Codec<T>> FusedIterator for IntoIter<T, C> {}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::format;
    use std::string::{String, ToString};
    use std::vec;
    use std::vec::Vec;

    use crate::codec::{BytesCodec, IntCodec, TextCodec, TextEncoding};
    use super::*;

    type IntStack = CantorStack<i32, IntCodec<i32>>;

    #[test]
    fn pushes() {
        let mut s = IntStack::default();
        assert_eq!(s.len(), 0);
        assert!(s.is_empty());
        s.push(1);
        assert_eq!(s.len(), 1);
        s.push(2);
        assert_eq!(s.len(), 2);
        s.push(3);
        assert_eq!(s.len(), 3);
        assert!(!s.is_empty());

        assert_eq!(s.pop(), Ok(3));
        assert_eq!(s.len(), 2);
        assert_eq!(s.pop(), Ok(2));
        assert_eq!(s.len(), 1);
        assert_eq!(s.pop(), Ok(1));
        assert_eq!(s.len(), 0);
        assert_eq!(s.pop(), Err(StackError::Empty));
        assert_eq!(s.len(), 0);
    }

    #[test]
    fn base_follows_pairing() {
        type S = CantorStack<u32, IntCodec<u32>>;
        let mut s = S::default();
        s.push(1);
        assert_eq!(s.base, BigUint::from(2u32)); // pair(0, 1)
        s.push(0);
        assert_eq!(s.base, BigUint::from(3u32)); // pair(2, 0)
        s.push(2);
        assert_eq!(s.base, BigUint::from(17u32)); // pair(3, 2)
        assert_eq!(s.peek(), Some(2));
        assert_eq!(s.drain().collect::<Vec<_>>(), vec![2, 0, 1]);
        assert!(s.base.is_zero());
    }

    #[test]
    fn zero_base_with_elements() {
        type S = CantorStack<u8, IntCodec<u8>>;
        let mut s = S::default();
        s.push(0);
        s.push(0);
        assert!(s.base.is_zero());
        assert_eq!(s.len(), 2);
        assert!(!s.is_empty());
        assert_eq!(s.pop(), Ok(0));
        assert_eq!(s.pop(), Ok(0));
        assert_eq!(s.pop(), Err(StackError::Empty));
    }

    #[test]
    fn empty_pop_leaves_state() {
        let mut s = IntStack::default();
        assert_eq!(s.pop(), Err(StackError::Empty));
        assert!(s.base.is_zero());
        assert_eq!(s.len(), 0);
        s.push(5);
        assert_eq!(s.pop(), Ok(5));
        assert_eq!(s.pop(), Err(StackError::Empty));
        assert_eq!(s.len(), 0);
    }

    #[test]
    fn size_tracking() {
        let mut s = IntStack::default();
        for k in 0..12 {
            for j in 0..=k {
                s.clear();
                s.extend(0..k);
                for _ in 0..j {
                    s.pop().unwrap();
                }
                assert_eq!(s.len(), (k - j) as usize);
            }
        }
    }

    #[test]
    fn signed_boundaries() {
        let mut s = IntStack::default();
        let values = [0, -1, 1, i32::MIN, i32::MAX, -42, 42];
        s.extend(values);
        let popped = s.into_iter().collect::<Vec<_>>();
        assert_eq!(popped, values.iter().rev().copied().collect::<Vec<_>>());
    }

    #[test]
    fn deep_stack() {
        type S = CantorStack<u16, IntCodec<u16>>;
        let mut s = S::default();
        let values = (1..=14u16).map(|i| i * 37 % 251).collect::<Vec<_>>();
        let mut prev_bits = 0;
        for &v in &values {
            s.push(v);
            let bits = s.base.bits();
            // pair(b, e) >= b * b / 2, and < 4 * b * b once b > e
            assert!(bits + 2 >= 2 * prev_bits);
            if prev_bits > 8 {
                assert!(bits <= 2 * prev_bits + 2);
            }
            prev_bits = bits;
        }
        assert_eq!(s.len(), 14);
        assert!(prev_bits > 1 << 12);
        assert_eq!(s.peek(), values.last().copied());
        let popped = s.drain().collect::<Vec<_>>();
        assert_eq!(popped, values.into_iter().rev().collect::<Vec<_>>());
        assert!(s.base.is_zero());
    }

    #[test]
    fn collect() {
        let s = [5, -6, 7].into_iter().collect::<IntStack>();
        assert_eq!(s.len(), 3);
        assert_eq!(s.into_iter().collect::<Vec<_>>(), vec![7, -6, 5]);
    }

    #[test]
    fn panicking_decode_keeps_element() {
        let mut s = CantorStack::from_fns(
            |b: &BigUint| {
                assert!(*b != BigUint::from(13u32), "cannot decode 13");
                b.bits()
            },
            |v: &u64| BigUint::from(*v),
        );
        s.push(1);
        s.push(13);
        let r = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| s.pop()));
        assert!(r.is_err());
        assert_eq!(s.len(), 2);
        s.clear();
        s.push(4);
        assert_eq!(s.pop(), Ok(3));
    }

    #[test]
    fn text() {
        let mut s = CantorStack::new(TextCodec::new(TextEncoding::Utf8));
        s.push("a".to_string());
        s.push("bb".to_string());
        assert_eq!(s.pop(), Ok("bb".to_string()));
        assert_eq!(s.pop(), Ok("a".to_string()));
        assert_eq!(s.pop(), Err(StackError::Empty));
    }

    #[test]
    fn bytes() {
        let mut s: CantorStack<Vec<u8>, _> = CantorStack::new(BytesCodec);
        s.push(vec![]);
        s.push(vec![0, 0]);
        s.push(vec![0xFF; 64]);
        assert_eq!(s.drain().collect::<Vec<_>>(), vec![vec![0xFF; 64], vec![0, 0], vec![]]);
    }

    #[test]
    fn from_fns() {
        let mut s = CantorStack::from_fns(
            |b: &BigUint| b.bits(),
            |v: &u64| (BigUint::from(1u32) << *v) - 1u32,
        );
        s.push(3);
        s.push(0);
        s.push(70);
        assert_eq!(s.peek(), Some(70));
        assert_eq!(s.into_iter().collect::<Vec<_>>(), vec![70, 0, 3]);
    }

    #[test]
    fn drain_is_consuming() {
        let mut s = IntStack::default();
        s.extend([1, 2, 3, 4]);
        let mut d = s.drain();
        assert_eq!(d.len(), 4);
        assert_eq!(d.next(), Some(4));
        assert_eq!(d.len(), 3);
        drop(d);
        assert_eq!(s.len(), 3);
        assert_eq!(s.drain().take(2).collect::<Vec<_>>(), vec![3, 2]);
        assert_eq!(s.len(), 1);
        assert_eq!(s.drain().collect::<Vec<_>>(), vec![1]);
        let mut d = s.drain();
        assert_eq!(d.next(), None);
        assert_eq!(d.next(), None);
    }

    #[test]
    fn peek_does_not_pop() {
        let mut s = IntStack::default();
        assert_eq!(s.peek(), None);
        s.push(-7);
        assert_eq!(s.peek(), Some(-7));
        assert_eq!(s.peek(), Some(-7));
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn clone_is_independent() {
        let mut a = IntStack::default();
        a.extend([10, 20]);
        let b = a.clone();
        assert_eq!(a.pop(), Ok(20));
        assert_eq!(b.len(), 2);
        assert_eq!(b.into_iter().collect::<Vec<_>>(), vec![20, 10]);
    }

    #[test]
    fn debug_does_not_drain() {
        let mut s = CantorStack::new(TextCodec::default());
        s.push(String::from("x"));
        assert_eq!(format!("{:?}", s), r#"CantorStack { len: 1, top: Some("x") }"#);
        assert_eq!(s.len(), 1);
    }
}
