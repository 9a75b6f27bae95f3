//! Ripple-carry addition.

use std::ops::Add;

use crate::biguint::{required_word_count, BigUint};
use crate::word::Word;

/// Add `a + b` word by word into `out`, zero-extending both operands, and
/// return the carry out of the top word.
///
/// The carry is detected from unsigned wraparound rather than by widening.
#[inline]
fn ripple_add<W: Word>(a: &BigUint<W>, b: &BigUint<W>, out: &mut [W]) -> W {
    let mut carry = W::ZERO;
    for (i, res) in out.iter_mut().enumerate() {
        let ai = a.word(i);
        let bi = b.word(i);
        let current = ai.wrapping_add(bi);
        let partial = current.wrapping_add(carry);
        carry = if current < ai || partial < current {
            W::ONE
        } else {
            W::ZERO
        };
        *res = partial;
    }
    carry
}

impl<W: Word> BigUint<W> {
    /// Widening addition. The result has `max(bits) + 1` bits of capacity, so
    /// the sum always fits.
    ///
    /// ```
    /// use numbers::BigUint;
    ///
    /// let a = BigUint::<u8>::from_word(8, 128);
    /// let sum = a.add(&a);
    /// assert_eq!(sum.words(), &[0, 1]);
    /// assert_eq!(sum.bits(), 9);
    /// ```
    pub fn add(&self, other: &Self) -> Self {
        let bits = self.bits().max(other.bits()) + 1;
        let mut words = vec![W::ZERO; required_word_count::<W>(bits)];
        // The top word sits past both operands whenever the guard bit opens a
        // new word, so it ends up holding the terminal carry.
        ripple_add(self, other, &mut words);
        Self::from_raw(bits, words)
    }

    /// Truncating addition: the result keeps `max(bits)` of capacity and the
    /// sum is reduced modulo `2^max(bits)`.
    ///
    /// ```
    /// use numbers::BigUint;
    ///
    /// let a = BigUint::<u8>::from_word(8, 200);
    /// let b = BigUint::<u8>::from_word(8, 100);
    /// assert_eq!(a.add_in_place(&b).words(), &[44]);
    /// ```
    pub fn add_in_place(&self, other: &Self) -> Self {
        let bits = self.bits().max(other.bits());
        let mut words = vec![W::ZERO; required_word_count::<W>(bits)];
        ripple_add(self, other, &mut words);
        Self::from_raw(bits, words).truncated()
    }
}

impl<W: Word> Add for &BigUint<W> {
    type Output = BigUint<W>;

    fn add(self, rhs: Self) -> BigUint<W> {
        BigUint::add(self, rhs)
    }
}

impl<W: Word> Add<W> for &BigUint<W> {
    type Output = BigUint<W>;

    fn add(self, rhs: W) -> BigUint<W> {
        BigUint::add(self, &BigUint::from_word(W::BITS as usize, rhs))
    }
}
