//! Value comparison across capacities.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::biguint::BigUint;
use crate::word::Word;

impl<W: Word> BigUint<W> {
    /// Compare by value, most significant word first. Indices past either
    /// operand's length read as zero, so capacity never affects the result.
    pub fn value_cmp(&self, other: &Self) -> Ordering {
        let count = self.word_count().max(other.word_count());
        for i in (0..count).rev() {
            match self.word(i).cmp(&other.word(i)) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }
        Ordering::Equal
    }
}

impl<W: Word> PartialEq for BigUint<W> {
    fn eq(&self, other: &Self) -> bool {
        self.value_cmp(other) == Ordering::Equal
    }
}

impl<W: Word> Eq for BigUint<W> {}

impl<W: Word> PartialOrd for BigUint<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<W: Word> Ord for BigUint<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value_cmp(other)
    }
}

impl<W: Word> PartialEq<W> for BigUint<W> {
    fn eq(&self, other: &W) -> bool {
        self.word(0) == *other && self.words().iter().skip(1).all(|&w| w == W::ZERO)
    }
}

// Equal values may differ in capacity, so only the significant words are hashed.
impl<W: Word> Hash for BigUint<W> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.significant_words().hash(state);
    }
}
