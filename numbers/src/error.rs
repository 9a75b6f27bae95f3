//! Errors reported by the checked entry points.
//!
//! The arithmetic and the lenient codec never fail. These variants only come
//! out of the `try_*` functions, `FromStr`, and deserialization.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, NumbersError>;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum NumbersError {
    #[error("unsupported radix {0} (expected 2, 8, 10, 16 or 64)")]
    UnsupportedRadix(u32),

    #[error("invalid base-{radix} digit {digit:?} at position {position}")]
    InvalidDigit {
        digit: char,
        position: usize,
        radix: u32,
    },

    #[error("{words} words do not match a capacity of {bits} bits")]
    CapacityExceeded { bits: usize, words: usize },

    #[error("value needs {highest_bit} bits but the capacity is {bits}")]
    ValueTooWide { bits: usize, highest_bit: usize },

    #[error("empty digit string")]
    Empty,
}
