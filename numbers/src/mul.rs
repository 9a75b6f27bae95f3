//! Schoolbook multiplication.

use std::ops::Mul;

use crate::biguint::{required_word_count, BigUint};
use crate::word::Word;

/// Multiply-accumulate: (lo, carry) = a * b + c + carry_in
///
/// Never wraps: `(2^w - 1)^2 + 2 * (2^w - 1) = 2^2w - 1`.
#[inline(always)]
fn mac<W: Word>(a: W, b: W, c: W, carry: W) -> (W, W) {
    let sum = c.widen() + carry.widen() + a.widen() * b.widen();
    (W::low(sum), W::high(sum))
}

/// Accumulate `a * b` into a zeroed `result`. Partial products whose position
/// falls past the end of `result` are dropped.
fn schoolbook<W: Word>(a: &[W], b: &[W], result: &mut [W]) {
    let n = result.len();
    for (bi, &bw) in b.iter().enumerate() {
        if bi >= n {
            break;
        }
        let count = a.len().min(n - bi);
        let mut k = W::ZERO;
        for (ai, &aw) in a[..count].iter().enumerate() {
            let (lo, hi) = mac(aw, bw, result[ai + bi], k);
            result[ai + bi] = lo;
            k = hi;
        }
        if bi + count < n {
            result[bi + count] = k;
        }
    }
}

impl<W: Word> BigUint<W> {
    /// Widening multiplication. The result has `bits(self) + bits(other)` of
    /// capacity, enough for any product of the two.
    ///
    /// ```
    /// use numbers::BigUint;
    ///
    /// let a = BigUint::<u8>::from_word(8, 128);
    /// let product = a.multiply(&a);
    /// assert_eq!(product.words(), &[0, 64]);
    /// assert_eq!(product.bits(), 16);
    /// ```
    pub fn multiply(&self, other: &Self) -> Self {
        let bits = self.bits() + other.bits();
        let mut words = vec![W::ZERO; required_word_count::<W>(bits)];
        schoolbook(self.words(), other.words(), &mut words);
        Self::from_raw(bits, words)
    }

    /// Truncating multiplication: the result keeps `bits(self)` of capacity and
    /// the product is reduced modulo `2^bits(self)`.
    ///
    /// ```
    /// use numbers::BigUint;
    ///
    /// let a = BigUint::<u8>::from_words(16, [0, 1]);
    /// let b = BigUint::<u8>::from_word(8, 3);
    /// assert_eq!(a.multiply_in_place(&b).words(), &[0, 3]);
    /// ```
    pub fn multiply_in_place(&self, other: &Self) -> Self {
        let mut words = vec![W::ZERO; self.word_count()];
        schoolbook(self.words(), other.words(), &mut words);
        Self::from_raw(self.bits(), words).truncated()
    }
}

impl<W: Word> Mul for &BigUint<W> {
    type Output = BigUint<W>;

    fn mul(self, rhs: Self) -> BigUint<W> {
        self.multiply(rhs)
    }
}

impl<W: Word> Mul<W> for &BigUint<W> {
    type Output = BigUint<W>;

    fn mul(self, rhs: W) -> BigUint<W> {
        self.multiply(&BigUint::from_word(W::BITS as usize, rhs))
    }
}
