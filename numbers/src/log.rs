//! Integer logarithm.

use crate::biguint::BigUint;
use crate::word::Word;

/// `floor(log_base(value))`, with the capacity of `value`.
///
/// Counts how many times `base` can be multiplied into a running candidate
/// before it exceeds `value`. The candidate lives in `bits(base) +
/// bits(value)` of capacity: both inputs fit their capacities, and the last
/// product is at most `value * base`, so the truncating multiply never loses
/// anything.
///
/// `value` of zero or one, and bases below two, give zero.
///
/// ```
/// use numbers::{logarithm, BigUint, Radix};
///
/// let base = BigUint::<u32>::parse(Radix::Decimal, "10");
/// let value = BigUint::<u32>::parse(Radix::Decimal, "100000");
/// assert_eq!(logarithm(&base, &value), 5u32);
/// ```
#[tracing::instrument(
    "logarithm",
    skip_all,
    level = "debug",
    fields(base_bits = base.bits(), value_bits = value.bits())
)]
pub fn logarithm<W: Word>(base: &BigUint<W>, value: &BigUint<W>) -> BigUint<W> {
    let mut exponent = BigUint::zero(value.bits());
    // A base of 0 or 1 never outgrows the value.
    if *value == W::ONE || value.is_zero() || base.highest_bit() <= 1 {
        return exponent;
    }

    let one = BigUint::one(value.bits());
    let mut candidate = base.resize(base.bits() + value.bits());
    let mut steps = 0usize;
    while candidate <= *value {
        exponent = exponent.add_in_place(&one);
        candidate = candidate.multiply_in_place(base);
        steps += 1;
    }
    tracing::trace!(steps, "logarithm converged");
    exponent
}
