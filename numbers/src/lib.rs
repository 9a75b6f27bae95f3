//! Fixed-capacity unsigned big integers: ripple-carry addition, schoolbook
//! multiplication, radix conversion for bases 2, 8, 10, 16 and 64, and
//! integer logarithms.
//!
//! ```
//! use numbers::{BigUint, Radix};
//!
//! let max = BigUint::<u32>::parse(Radix::Hexadecimal, &"F".repeat(64));
//! assert_eq!(max.highest_bit(), 256);
//! assert_eq!(max.multiply(&max).highest_bit(), 512);
//! ```

mod add;
pub mod biguint;
mod cmp;
pub mod error;
pub mod log;
mod mul;
pub mod radix;
pub mod word;

pub use biguint::{required_word_count, BigUint, DEFAULT_BITS};
pub use error::{NumbersError, Result};
pub use log::logarithm;
pub use radix::Radix;
pub use word::Word;
