//! Machine words used as limbs, each paired with a double-width overflow type.
//!
//! | Word  | Overflow |
//! |-------|----------|
//! | `u8`  | `u16`    |
//! | `u16` | `u32`    |
//! | `u32` | `u64`    |
//! | `u64` | `u128`   |

use std::fmt;
use std::hash::Hash;
use std::ops::{Add, Mul};

/// An unsigned limb type.
///
/// `Overflow` is exactly twice as wide as the word, so `a * b + c + d` for any
/// four words never wraps. It is only used as scratch space while carries are
/// propagated; values are always stored as words.
pub trait Word:
    Copy + Default + Eq + Ord + Hash + fmt::Debug + fmt::Display + fmt::UpperHex + Send + Sync + 'static
{
    type Overflow: Copy + Eq + Ord + fmt::Debug + From<Self> + Add<Output = Self::Overflow> + Mul<Output = Self::Overflow>;

    /// Width of the word in bits.
    const BITS: u32;
    const ZERO: Self;
    const ONE: Self;
    const MAX: Self;

    /// Low half of a double-width value (truncating).
    fn low(wide: Self::Overflow) -> Self;

    /// High half of a double-width value.
    fn high(wide: Self::Overflow) -> Self;

    /// Build `high * 2^BITS + low`.
    fn join(high: Self, low: Self) -> Self::Overflow;

    #[inline]
    fn widen(self) -> Self::Overflow {
        Self::Overflow::from(self)
    }

    /// Every supported radix and digit fits in a byte, and every word is at
    /// least a byte wide.
    fn from_u8(value: u8) -> Self;

    /// Truncate to the low byte.
    fn low_byte(self) -> u8;

    fn wrapping_add(self, rhs: Self) -> Self;

    fn leading_zeros(self) -> u32;

    /// Keep only the low `n` bits, `1 <= n <= BITS`.
    fn low_bits(self, n: u32) -> Self;

    /// `(self / divisor, self % divisor)`. `divisor` must be nonzero.
    fn div_rem(self, divisor: Self) -> (Self, Self);

    /// Divide the two-word value `high:low` by a single word.
    ///
    /// Requires `high < divisor`, which keeps the quotient within one word.
    fn div_rem_wide(high: Self, low: Self, divisor: Self) -> (Self, Self);
}

macro_rules! impl_word {
    ($word:ty, $overflow:ty) => {
        impl Word for $word {
            type Overflow = $overflow;

            const BITS: u32 = <$word>::BITS;
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const MAX: Self = <$word>::MAX;

            #[inline(always)]
            fn low(wide: $overflow) -> Self {
                wide as $word
            }

            #[inline(always)]
            fn high(wide: $overflow) -> Self {
                (wide >> <$word>::BITS) as $word
            }

            #[inline(always)]
            fn join(high: Self, low: Self) -> $overflow {
                ((high as $overflow) << <$word>::BITS) | low as $overflow
            }

            #[inline(always)]
            fn from_u8(value: u8) -> Self {
                value as $word
            }

            #[inline(always)]
            fn low_byte(self) -> u8 {
                self as u8
            }

            #[inline(always)]
            fn wrapping_add(self, rhs: Self) -> Self {
                <$word>::wrapping_add(self, rhs)
            }

            #[inline(always)]
            fn leading_zeros(self) -> u32 {
                <$word>::leading_zeros(self)
            }

            #[inline(always)]
            fn low_bits(self, n: u32) -> Self {
                debug_assert!(n >= 1 && n <= <$word>::BITS);
                self & (<$word>::MAX >> (<$word>::BITS - n))
            }

            #[inline]
            fn div_rem(self, divisor: Self) -> (Self, Self) {
                (self / divisor, self % divisor)
            }

            #[inline]
            fn div_rem_wide(high: Self, low: Self, divisor: Self) -> (Self, Self) {
                debug_assert!(high < divisor);
                let wide = Self::join(high, low);
                let divisor = divisor as $overflow;
                ((wide / divisor) as $word, (wide % divisor) as $word)
            }
        }
    };
}

impl_word!(u8, u16);
impl_word!(u16, u32);
impl_word!(u32, u64);
impl_word!(u64, u128);
