//! Fixed-capacity unsigned big integers.
//!
//! A `BigUint` is a little-endian run of words (`words[0]` is least
//! significant) plus a declared bit capacity. The word count is derived from
//! the capacity once, at construction, and never changes afterwards:
//! arithmetic that could outgrow it returns a new, wider value, and the
//! `*_in_place` variants keep the first operand's capacity and drop whatever
//! does not fit.
//!
//! A value never has a bit set at or above its capacity, even when the
//! capacity ends partway through the top word. Every constructor and
//! truncating operation masks to the capacity, which is what keeps the
//! widening results (`max + 1` for add, `a + b` for multiply) exact.

use std::fmt;
use std::ops::Index;

use crate::error::{NumbersError, Result};
use crate::radix::Radix;
use crate::word::Word;

/// Capacity used when callers have no better estimate.
pub const DEFAULT_BITS: usize = 256;

/// Number of `W` words needed to hold `bits` bits.
///
/// ```
/// use numbers::required_word_count;
///
/// assert_eq!(required_word_count::<u8>(8), 1);
/// assert_eq!(required_word_count::<u8>(9), 2);
/// assert_eq!(required_word_count::<u64>(4096), 64);
/// ```
#[inline]
pub fn required_word_count<W: Word>(bits: usize) -> usize {
    bits.div_ceil(W::BITS as usize)
}

/// Fixed-capacity unsigned integer.
///
/// Equality and ordering are by value, so values of different capacities
/// compare as if the shorter one were zero-extended.
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "RawBigUint<W>",
        bound(serialize = "W: serde::Serialize", deserialize = "W: serde::Deserialize<'de>")
    )
)]
pub struct BigUint<W: Word = u32> {
    bits: usize,
    words: Vec<W>,
}

// ============================================================================
// Construction
// ============================================================================

impl<W: Word> BigUint<W> {
    /// Wrap a word vector that is already the right length.
    #[inline]
    pub(crate) fn from_raw(bits: usize, words: Vec<W>) -> Self {
        debug_assert_eq!(words.len(), required_word_count::<W>(bits));
        Self { bits, words }
    }

    /// Zero with the given capacity.
    ///
    /// ```
    /// use numbers::BigUint;
    ///
    /// let z = BigUint::<u8>::zero(64);
    /// assert!(z.is_zero());
    /// assert_eq!(z.word_count(), 8);
    /// assert_eq!(z.highest_bit(), 0);
    /// ```
    pub fn zero(bits: usize) -> Self {
        Self {
            bits,
            words: vec![W::ZERO; required_word_count::<W>(bits)],
        }
    }

    /// One with the given capacity.
    pub fn one(bits: usize) -> Self {
        Self::from_word(bits, W::ONE)
    }

    /// A single word placed in the least significant position.
    ///
    /// With a zero capacity there is nowhere to put it and the result is zero.
    pub fn from_word(bits: usize, word: W) -> Self {
        let mut value = Self::zero(bits);
        if let Some(low) = value.words.first_mut() {
            *low = word;
        }
        value.truncated()
    }

    /// Build from little-endian words. Missing words read as zero; words and
    /// bits past the capacity are dropped.
    ///
    /// ```
    /// use numbers::BigUint;
    ///
    /// let v = BigUint::<u8>::from_words(16, [0x34, 0x12, 0xFF]);
    /// assert_eq!(v.words(), &[0x34, 0x12]);
    ///
    /// let w = BigUint::<u8>::from_words(12, [0xFF, 0xFF]);
    /// assert_eq!(w.words(), &[0xFF, 0x0F]);
    /// ```
    pub fn from_words<I: IntoIterator<Item = W>>(bits: usize, words: I) -> Self {
        let mut value = Self::zero(bits);
        for (slot, word) in value.words.iter_mut().zip(words) {
            *slot = word;
        }
        value.truncated()
    }

    /// Like [`BigUint::from_words`] but nothing is dropped: the word count must
    /// match the capacity and the value must fit in it.
    pub fn try_from_words(bits: usize, words: Vec<W>) -> Result<Self> {
        if words.len() != required_word_count::<W>(bits) {
            return Err(NumbersError::CapacityExceeded {
                bits,
                words: words.len(),
            });
        }
        let value = Self { bits, words };
        let highest_bit = value.highest_bit();
        if highest_bit > bits {
            return Err(NumbersError::ValueTooWide { bits, highest_bit });
        }
        Ok(value)
    }

    /// Clear any bits at or above the declared capacity.
    pub(crate) fn truncated(mut self) -> Self {
        let used = (self.bits % W::BITS as usize) as u32;
        if used != 0 {
            if let Some(top) = self.words.last_mut() {
                *top = top.low_bits(used);
            }
        }
        self
    }

    /// Copy into a new capacity. Growing zero-extends, shrinking drops the
    /// bits that no longer fit.
    pub fn resize(&self, bits: usize) -> Self {
        Self::from_words(bits, self.words.iter().copied())
    }
}

// ============================================================================
// Accessors
// ============================================================================

impl<W: Word> BigUint<W> {
    /// Declared capacity in bits.
    #[inline]
    pub fn bits(&self) -> usize {
        self.bits
    }

    /// Number of words backing this value.
    #[inline]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Words in little-endian order.
    #[inline]
    pub fn words(&self) -> &[W] {
        &self.words
    }

    /// Word `i`, or zero past the end.
    #[inline]
    pub fn word(&self, i: usize) -> W {
        self.words.get(i).copied().unwrap_or(W::ZERO)
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.words.iter().all(|&w| w == W::ZERO)
    }

    /// 1-based position of the most significant set bit; zero for zero.
    ///
    /// This is a bit count, not an index: `1` reports `1`, `255` reports `8`.
    ///
    /// ```
    /// use numbers::BigUint;
    ///
    /// assert_eq!(BigUint::<u8>::from_words(64, [1]).highest_bit(), 1);
    /// assert_eq!(BigUint::<u8>::from_words(64, [255, 127]).highest_bit(), 15);
    /// ```
    pub fn highest_bit(&self) -> usize {
        match self.words.iter().rposition(|&w| w != W::ZERO) {
            Some(i) => {
                let used = W::BITS - self.words[i].leading_zeros();
                i * W::BITS as usize + used as usize
            }
            None => 0,
        }
    }

    /// Words above the most significant nonzero word trimmed off.
    pub(crate) fn significant_words(&self) -> &[W] {
        let len = self
            .words
            .iter()
            .rposition(|&w| w != W::ZERO)
            .map_or(0, |i| i + 1);
        &self.words[..len]
    }
}

impl<W: Word> Index<usize> for BigUint<W> {
    type Output = W;

    fn index(&self, i: usize) -> &W {
        &self.words[i]
    }
}

impl<W: Word> Default for BigUint<W> {
    fn default() -> Self {
        Self::zero(DEFAULT_BITS)
    }
}

// ============================================================================
// Formatting
// ============================================================================

impl<W: Word> fmt::Debug for BigUint<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigUint<{}>(0x", self.bits)?;
        match self.significant_words().split_last() {
            None => write!(f, "0")?,
            Some((top, rest)) => {
                write!(f, "{:X}", top)?;
                let width = (W::BITS / 4) as usize;
                for word in rest.iter().rev() {
                    write!(f, "{:0width$X}", word, width = width)?;
                }
            }
        }
        write!(f, ")")
    }
}

impl<W: Word> fmt::Display for BigUint<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.pad("0");
        }
        let digits = self.to_digits(Radix::Decimal);
        let len = digits.iter().position(|&c| c == 0).unwrap_or(digits.len());
        let text: String = digits[..len].iter().rev().map(|&c| c as char).collect();
        f.pad(&text)
    }
}

// ============================================================================
// Serde
// ============================================================================

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawBigUint<W> {
    bits: usize,
    words: Vec<W>,
}

#[cfg(feature = "serde")]
impl<W: Word> TryFrom<RawBigUint<W>> for BigUint<W> {
    type Error = NumbersError;

    fn try_from(raw: RawBigUint<W>) -> Result<Self> {
        Self::try_from_words(raw.bits, raw.words)
    }
}

// ============================================================================
// Tests
// ============================================================================
