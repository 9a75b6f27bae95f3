//! Digit tables and radix conversion for bases 2, 8, 10, 16 and 64.
//!
//! Digits are handled as raw values (`0..base`) or as ASCII characters.
//! Output buffers are least-significant digit first and padded with a `0`
//! byte sentinel, which is never a printable digit; readers stop at the first
//! sentinel.
//!
//! Parsing is lenient: any character outside a base's alphabet reads as the
//! digit `0`. The `try_*` variants report such characters instead.

use crate::biguint::{required_word_count, BigUint};
use crate::error::{NumbersError, Result};
use crate::word::Word;

/// Supported bases.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Radix {
    Binary,
    Octal,
    Decimal,
    Hexadecimal,
    Base64,
}

// ============================================================================
// Digit tables
// ============================================================================

/// Marks characters outside an alphabet.
const INVALID: u8 = u8::MAX;

const BINARY_ALPHABET: &[u8] = b"01";
const OCTAL_ALPHABET: &[u8] = b"01234567";
const DECIMAL_ALPHABET: &[u8] = b"0123456789";
const HEX_ALPHABET: &[u8] = b"0123456789ABCDEF";
const BASE64_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Character code -> digit value, built from the composing alphabet so the
/// two directions cannot drift apart.
const fn digit_table(alphabet: &[u8], fold_case: bool) -> [u8; 256] {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < alphabet.len() {
        let c = alphabet[i];
        table[c as usize] = i as u8;
        if fold_case {
            table[c.to_ascii_lowercase() as usize] = i as u8;
        }
        i += 1;
    }
    table
}

static BINARY_TABLE: [u8; 256] = digit_table(BINARY_ALPHABET, false);
static OCTAL_TABLE: [u8; 256] = digit_table(OCTAL_ALPHABET, false);
static DECIMAL_TABLE: [u8; 256] = digit_table(DECIMAL_ALPHABET, false);
static HEX_TABLE: [u8; 256] = digit_table(HEX_ALPHABET, true);
static BASE64_TABLE: [u8; 256] = digit_table(BASE64_ALPHABET, false);

// log2(10) and log10(2), rounded up. Integer ratios keep the estimators exact
// upper bounds for every digit count.
const LOG2_10_NUM: u128 = 33_219_280_949;
const LOG2_10_DEN: u128 = 10_000_000_000;
const LOG10_2_NUM: u128 = 30_103;
const LOG10_2_DEN: u128 = 100_000;

impl Radix {
    pub const ALL: [Radix; 5] = [
        Radix::Binary,
        Radix::Octal,
        Radix::Decimal,
        Radix::Hexadecimal,
        Radix::Base64,
    ];

    /// The numeric base.
    #[inline]
    pub const fn value(self) -> u32 {
        match self {
            Radix::Binary => 2,
            Radix::Octal => 8,
            Radix::Decimal => 10,
            Radix::Hexadecimal => 16,
            Radix::Base64 => 64,
        }
    }

    /// Digit characters in value order.
    #[inline]
    pub const fn alphabet(self) -> &'static [u8] {
        match self {
            Radix::Binary => BINARY_ALPHABET,
            Radix::Octal => OCTAL_ALPHABET,
            Radix::Decimal => DECIMAL_ALPHABET,
            Radix::Hexadecimal => HEX_ALPHABET,
            Radix::Base64 => BASE64_ALPHABET,
        }
    }

    #[inline]
    fn table(self) -> &'static [u8; 256] {
        match self {
            Radix::Binary => &BINARY_TABLE,
            Radix::Octal => &OCTAL_TABLE,
            Radix::Decimal => &DECIMAL_TABLE,
            Radix::Hexadecimal => &HEX_TABLE,
            Radix::Base64 => &BASE64_TABLE,
        }
    }

    #[inline]
    fn base<W: Word>(self) -> W {
        W::from_u8(self.value() as u8)
    }

    /// Value of a digit character; characters outside the alphabet read as 0.
    ///
    /// ```
    /// use numbers::Radix;
    ///
    /// assert_eq!(Radix::Hexadecimal.parse_digit(b'f'), 15);
    /// assert_eq!(Radix::Base64.parse_digit(b'/'), 63);
    /// assert_eq!(Radix::Decimal.parse_digit(b'x'), 0);
    /// ```
    #[inline]
    pub fn parse_digit(self, c: u8) -> u8 {
        self.try_parse_digit(c).unwrap_or(0)
    }

    /// Value of a digit character, or `None` outside the alphabet.
    #[inline]
    pub fn try_parse_digit(self, c: u8) -> Option<u8> {
        match self.table()[c as usize] {
            INVALID => None,
            d => Some(d),
        }
    }

    /// Character for a digit value.
    ///
    /// # Panics
    ///
    /// If `digit` is not below the base.
    #[inline]
    pub fn compose_digit(self, digit: u8) -> u8 {
        self.alphabet()[digit as usize]
    }

    /// Upper bound on the bits needed for `digits` digits in this base.
    ///
    /// ```
    /// use numbers::Radix;
    ///
    /// assert_eq!(Radix::Octal.required_bits(8), 24);
    /// assert_eq!(Radix::Decimal.required_bits(9), 30);
    /// assert_eq!(Radix::Base64.required_bits(64), 384);
    /// ```
    pub const fn required_bits(self, digits: usize) -> usize {
        match self {
            Radix::Binary => digits,
            Radix::Octal => 3 * digits,
            Radix::Decimal => 1 + (digits as u128 * LOG2_10_NUM / LOG2_10_DEN) as usize,
            Radix::Hexadecimal => 4 * digits,
            Radix::Base64 => 6 * digits,
        }
    }

    /// Upper bound on the digits needed to print any `bits`-bit value in this
    /// base.
    pub const fn required_digits(self, bits: usize) -> usize {
        match self {
            Radix::Binary => bits,
            Radix::Octal => 1 + bits / 3,
            Radix::Decimal => 1 + (bits as u128 * LOG10_2_NUM / LOG10_2_DEN) as usize,
            Radix::Hexadecimal => 1 + bits / 4,
            Radix::Base64 => 1 + bits / 6,
        }
    }
}

impl TryFrom<u32> for Radix {
    type Error = NumbersError;

    fn try_from(value: u32) -> Result<Self> {
        match value {
            2 => Ok(Radix::Binary),
            8 => Ok(Radix::Octal),
            10 => Ok(Radix::Decimal),
            16 => Ok(Radix::Hexadecimal),
            64 => Ok(Radix::Base64),
            other => Err(NumbersError::UnsupportedRadix(other)),
        }
    }
}

// ============================================================================
// Digit strings
// ============================================================================

/// Map every character of `text` to its digit value.
///
/// ```
/// use numbers::radix::{parse_digits, Radix};
///
/// assert_eq!(parse_digits(Radix::Decimal, "1234567890"), [1, 2, 3, 4, 5, 6, 7, 8, 9, 0]);
/// ```
pub fn parse_digits(radix: Radix, text: &str) -> Vec<u8> {
    text.bytes().map(|c| radix.parse_digit(c)).collect()
}

/// Like [`parse_digits`] but rejects characters outside the alphabet.
///
/// The reported position counts characters, not bytes.
pub fn try_parse_digits(radix: Radix, text: &str) -> Result<Vec<u8>> {
    text.chars()
        .enumerate()
        .map(|(position, digit)| {
            u8::try_from(digit)
                .ok()
                .and_then(|c| radix.try_parse_digit(c))
                .ok_or(NumbersError::InvalidDigit {
                    digit,
                    position,
                    radix: radix.value(),
                })
        })
        .collect()
}

/// Map every digit value to its character.
///
/// # Panics
///
/// If any digit is not below the base.
pub fn compose_digits(radix: Radix, digits: &[u8]) -> Vec<u8> {
    digits.iter().map(|&d| radix.compose_digit(d)).collect()
}

// ============================================================================
// Single-word conversion
// ============================================================================

/// Evaluate most-significant-first digits into one word, wrapping on
/// overflow.
///
/// ```
/// use numbers::radix::{from_digits, parse_digits, Radix};
///
/// let v: u32 = from_digits(Radix::Base64, &parse_digits(Radix::Base64, "y5I"));
/// assert_eq!(v, 208456);
/// ```
pub fn from_digits<W: Word>(radix: Radix, digits: &[u8]) -> W {
    let base = radix.base::<W>().widen();
    digits.iter().fold(W::ZERO, |value, &digit| {
        W::low(value.widen() * base + W::from_u8(digit).widen())
    })
}

/// Digit characters of one word, least significant first, padded with the
/// sentinel up to [`Radix::required_digits`] for the word width.
///
/// ```
/// use numbers::radix::{to_digits, Radix};
///
/// let digits = to_digits(Radix::Hexadecimal, 0xFFED56u32);
/// assert_eq!(digits.len(), 9);
/// assert_eq!(&digits[..7], b"65DEFF\0");
/// ```
pub fn to_digits<W: Word>(radix: Radix, value: W) -> Vec<u8> {
    let mut digits = vec![0u8; radix.required_digits(W::BITS as usize)];
    let base = radix.base::<W>();
    let mut n = value;
    let mut i = 0;
    while n != W::ZERO {
        let (q, r) = n.div_rem(base);
        digits[i] = radix.compose_digit(r.low_byte());
        i += 1;
        n = q;
    }
    digits
}

// ============================================================================
// Multi-word conversion
// ============================================================================

impl<W: Word> BigUint<W> {
    /// Evaluate most-significant-first digit values.
    ///
    /// The capacity comes from [`Radix::required_bits`] for the digit count,
    /// so it depends on how many digits were given, not on their values.
    ///
    /// ```
    /// use numbers::radix::parse_digits;
    /// use numbers::{BigUint, Radix};
    ///
    /// let v = BigUint::<u32>::from_digits(Radix::Hexadecimal, &parse_digits(Radix::Hexadecimal, "FFAADF"));
    /// assert_eq!(v.words(), &[0x00FFAADF]);
    /// ```
    #[tracing::instrument(
        "BigUint::from_digits",
        skip_all,
        level = "trace",
        fields(radix = radix.value(), digits = digits.len())
    )]
    pub fn from_digits(radix: Radix, digits: &[u8]) -> Self {
        let bits = radix.required_bits(digits.len());
        let mut words = vec![W::ZERO; required_word_count::<W>(bits)];
        let base = radix.base::<W>().widen();
        for &digit in digits {
            let mut carry = W::ZERO;
            for word in words.iter_mut() {
                let product = word.widen() * base + carry.widen();
                *word = W::low(product);
                carry = W::high(product);
            }
            let mut carry = W::from_u8(digit);
            for word in words.iter_mut() {
                let sum = word.widen() + carry.widen();
                *word = W::low(sum);
                carry = W::high(sum);
            }
        }
        Self::from_raw(bits, words)
    }

    /// Parse text leniently: unknown characters count as `0` digits.
    ///
    /// ```
    /// use numbers::{BigUint, Radix};
    ///
    /// let v = BigUint::<u32>::parse(Radix::Decimal, "1234567890");
    /// assert_eq!(v.word(0), 1234567890);
    /// ```
    pub fn parse(radix: Radix, text: &str) -> Self {
        Self::from_digits(radix, &parse_digits(radix, text))
    }

    /// Parse text, rejecting empty input and characters outside the alphabet.
    pub fn try_parse(radix: Radix, text: &str) -> Result<Self> {
        if text.is_empty() {
            return Err(NumbersError::Empty);
        }
        let digits = try_parse_digits(radix, text)?;
        Ok(Self::from_digits(radix, &digits))
    }

    /// Digit characters, least significant first, padded with the sentinel.
    ///
    /// The buffer holds [`Radix::required_digits`] for the declared capacity.
    /// A value that needs every position leaves no sentinel.
    ///
    /// ```
    /// use numbers::{BigUint, Radix};
    ///
    /// let v = BigUint::<u8>::from_words(16, [0x39, 0x30]);
    /// assert_eq!(&v.to_digits(Radix::Decimal)[..], b"54321");
    ///
    /// let w = BigUint::<u8>::from_words(16, [0x39, 0x05]);
    /// assert_eq!(&w.to_digits(Radix::Decimal)[..], b"7331\0");
    /// ```
    #[tracing::instrument(
        "BigUint::to_digits",
        skip_all,
        level = "trace",
        fields(radix = radix.value(), bits = self.bits())
    )]
    pub fn to_digits(&self, radix: Radix) -> Vec<u8> {
        let mut digits = vec![0u8; radix.required_digits(self.bits())];
        let base = radix.base::<W>();
        let mut words = self.words().to_vec();
        let mut i = 0;
        while words.iter().any(|&w| w != W::ZERO) {
            let mut rem = W::ZERO;
            for word in words.iter_mut().rev() {
                let (q, r) = W::div_rem_wide(rem, *word, base);
                *word = q;
                rem = r;
            }
            digits[i] = radix.compose_digit(rem.low_byte());
            i += 1;
        }
        digits
    }
}

impl<W: Word> std::str::FromStr for BigUint<W> {
    type Err = NumbersError;

    /// Checked decimal parse.
    fn from_str(s: &str) -> Result<Self> {
        Self::try_parse(Radix::Decimal, s)
    }
}
