//! Property-based tests checked against `num-bigint` as a reference.
//!
//! Values are generated from random words at a random capacity; construction
//! drops whatever does not fit, so partial top words are exercised too.

use num_bigint::BigUint as RefUint;
use num_traits::One;
use numbers::radix::{from_digits, to_digits};
use numbers::{logarithm, BigUint, Radix};
use proptest::prelude::*;

// ============================================================================
// Helpers
// ============================================================================

fn reference_u8(v: &BigUint<u8>) -> RefUint {
    RefUint::from_bytes_le(v.words())
}

fn reference_u32(v: &BigUint<u32>) -> RefUint {
    RefUint::from_slice(v.words())
}

fn reference_u64(v: &BigUint<u64>) -> RefUint {
    let bytes: Vec<u8> = v.words().iter().flat_map(|w| w.to_le_bytes()).collect();
    RefUint::from_bytes_le(&bytes)
}

/// Strategy: byte-word value with 1..=96 bits of capacity.
fn byte_uint() -> impl Strategy<Value = BigUint<u8>> {
    (1usize..=96).prop_flat_map(|bits| {
        prop::collection::vec(any::<u8>(), bits.div_ceil(8))
            .prop_map(move |words| BigUint::from_words(bits, words))
    })
}

/// Strategy: u32-word value with 1..=320 bits of capacity.
fn word_uint() -> impl Strategy<Value = BigUint<u32>> {
    (1usize..=320).prop_flat_map(|bits| {
        prop::collection::vec(any::<u32>(), bits.div_ceil(32))
            .prop_map(move |words| BigUint::from_words(bits, words))
    })
}

fn u64_uint() -> impl Strategy<Value = BigUint<u64>> {
    prop::collection::vec(any::<u64>(), 1..6)
        .prop_map(|words| BigUint::from_words(words.len() * 64, words))
}

/// Digits up to the first sentinel, most significant first.
fn printed(buffer: &[u8]) -> String {
    let len = buffer.iter().position(|&c| c == 0).unwrap_or(buffer.len());
    buffer[..len].iter().rev().map(|&c| c as char).collect()
}

fn radix() -> impl Strategy<Value = Radix> {
    prop::sample::select(Radix::ALL.to_vec())
}

// ============================================================================
// Addition
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn prop_add_matches_reference(a in byte_uint(), b in byte_uint()) {
        let sum = a.add(&b);
        prop_assert_eq!(reference_u8(&sum), reference_u8(&a) + reference_u8(&b));
        prop_assert_eq!(sum.bits(), a.bits().max(b.bits()) + 1);
    }

    #[test]
    fn prop_add_commutative(a in word_uint(), b in word_uint()) {
        prop_assert_eq!(a.add(&b), b.add(&a));
    }

    #[test]
    fn prop_add_widening_bound(a in word_uint(), b in word_uint()) {
        prop_assert!(a.add(&b).highest_bit() <= a.bits().max(b.bits()) + 1);
    }

    #[test]
    fn prop_add_zero_identity(a in word_uint()) {
        prop_assert_eq!(a.add(&BigUint::zero(32)), a.clone());
    }

    #[test]
    fn prop_add_in_place_wraps(a in byte_uint(), b in byte_uint()) {
        let sum = a.add_in_place(&b);
        prop_assert!(sum.highest_bit() <= sum.bits());
        let modulus = RefUint::one() << sum.bits();
        prop_assert_eq!(reference_u8(&sum), (reference_u8(&a) + reference_u8(&b)) % modulus);
    }
}

// ============================================================================
// Multiplication
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn prop_multiply_matches_reference(a in byte_uint(), b in byte_uint()) {
        let product = a.multiply(&b);
        prop_assert_eq!(reference_u8(&product), reference_u8(&a) * reference_u8(&b));
        prop_assert_eq!(product.bits(), a.bits() + b.bits());
    }

    #[test]
    fn prop_multiply_u64_matches_reference(a in u64_uint(), b in u64_uint()) {
        prop_assert_eq!(reference_u64(&a.multiply(&b)), reference_u64(&a) * reference_u64(&b));
    }

    #[test]
    fn prop_multiply_commutative(a in word_uint(), b in word_uint()) {
        prop_assert_eq!(a.multiply(&b), b.multiply(&a));
    }

    #[test]
    fn prop_multiply_widening_bound(a in word_uint(), b in word_uint()) {
        prop_assert!(a.multiply(&b).highest_bit() <= a.bits() + b.bits());
    }

    #[test]
    fn prop_multiply_identities(a in word_uint()) {
        prop_assert_eq!(a.multiply(&BigUint::one(32)), a.clone());
        prop_assert!(a.multiply(&BigUint::zero(32)).is_zero());
    }

    #[test]
    fn prop_multiply_in_place_wraps(a in byte_uint(), b in byte_uint()) {
        let product = a.multiply_in_place(&b);
        prop_assert_eq!(product.bits(), a.bits());
        prop_assert!(product.highest_bit() <= product.bits());
        let modulus = RefUint::one() << product.bits();
        prop_assert_eq!(reference_u8(&product), (reference_u8(&a) * reference_u8(&b)) % modulus);
    }
}

// ============================================================================
// Radix codec
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn prop_to_digits_round_trip(v in word_uint(), radix in radix()) {
        let text = printed(&v.to_digits(radix));
        let back = BigUint::<u32>::parse(radix, &text);
        prop_assert_eq!(back, v);
    }

    #[test]
    fn prop_to_digits_matches_reference(v in word_uint(), radix in radix()) {
        prop_assume!(radix != Radix::Base64);
        let text = printed(&v.to_digits(radix));
        let expected = if v.is_zero() {
            String::new()
        } else {
            reference_u32(&v).to_str_radix(radix.value()).to_uppercase()
        };
        prop_assert_eq!(text, expected);
    }

    #[test]
    fn prop_parse_matches_reference(digits in prop::collection::vec(0u8..10, 1..80)) {
        let v = BigUint::<u32>::from_digits(Radix::Decimal, &digits);
        let text: String = digits.iter().map(|d| (b'0' + d) as char).collect();
        let expected = RefUint::parse_bytes(text.as_bytes(), 10).unwrap();
        prop_assert_eq!(reference_u32(&v), expected);
        prop_assert!(v.highest_bit() <= v.bits());
    }

    #[test]
    fn prop_word_codec_round_trip(x in any::<u32>(), radix in radix()) {
        let buffer = to_digits(radix, x);
        prop_assert_eq!(buffer.len(), radix.required_digits(32));
        let text = printed(&buffer);
        let digits: Vec<u8> = text.bytes().map(|c| radix.parse_digit(c)).collect();
        prop_assert_eq!(from_digits::<u32>(radix, &digits), x);
    }

    #[test]
    fn prop_display_matches_reference(v in word_uint()) {
        prop_assert_eq!(v.to_string(), reference_u32(&v).to_string());
    }
}

// ============================================================================
// Estimators
// ============================================================================

#[test]
fn test_required_bits_is_sound() {
    for radix in Radix::ALL {
        let base = RefUint::from(radix.value());
        let mut power = RefUint::one();
        for digits in 1..=1500usize {
            power *= &base;
            let largest = &power - 1u32;
            assert!(
                largest.bits() as usize <= radix.required_bits(digits),
                "{:?} with {} digits needs {} bits",
                radix,
                digits,
                largest.bits()
            );
        }
    }
}

#[test]
fn test_required_digits_is_sound() {
    for radix in Radix::ALL {
        for bits in 1..=2048usize {
            let largest = (RefUint::one() << bits) - 1u32;
            let digits = largest.to_radix_le(radix.value()).len();
            assert!(
                digits <= radix.required_digits(bits),
                "{:?} with {} bits needs {} digits",
                radix,
                bits,
                digits
            );
        }
    }
}

// ============================================================================
// Logarithm
// ============================================================================

fn reference_log(base: &RefUint, value: &RefUint) -> u32 {
    let mut exponent = 0;
    let mut candidate = base.clone();
    while &candidate <= value {
        exponent += 1;
        candidate *= base;
    }
    exponent
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_log_matches_reference(base in 2u32..1000, value in word_uint()) {
        prop_assume!(!value.is_zero());
        let log = logarithm(&BigUint::from_word(32, base), &value);
        let expected = reference_log(&RefUint::from(base), &reference_u32(&value));
        prop_assert_eq!(log.bits(), value.bits());
        prop_assert_eq!(log, expected);
    }

    #[test]
    fn prop_log_of_in_place_sums(a in byte_uint(), b in byte_uint(), base in 2u8..=255) {
        let sum = a.add_in_place(&b);
        let base = BigUint::<u8>::from_word(8, base);
        let log = logarithm(&base, &sum);
        let expected = if sum.is_zero() {
            0
        } else {
            reference_log(&reference_u8(&base), &reference_u8(&sum))
        };
        prop_assert_eq!(log.bits(), sum.bits());
        prop_assert_eq!(reference_u8(&log), RefUint::from(expected));
    }

    #[test]
    fn prop_log_matches_ilog(base in 2u64..=u64::MAX, value in 1u64..=u64::MAX) {
        let log = logarithm(&BigUint::<u64>::from_word(64, base), &BigUint::from_word(64, value));
        prop_assert_eq!(log, u64::from(value.ilog(base)));
    }
}

#[test]
fn test_log_of_exact_powers() {
    for base in [2u32, 3, 7, 10, 16, 31, 64] {
        let b = BigUint::<u32>::from_word(32, base);
        let mut power = BigUint::<u32>::one(512);
        for exponent in 0..20u32 {
            assert_eq!(logarithm(&b, &power), exponent);
            power = power.multiply_in_place(&b);
        }
    }
}
