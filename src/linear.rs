//! Bit-at-a-time reference bitmap.
//!
//! `LinearBitmap` answers successor queries by testing every bit in turn.
//! It is deliberately the dumbest possible implementation — O(capacity) per
//! query — and exists as the correctness oracle the other variants are
//! validated against, not for actual use.

#[cfg(not(test))]
use alloc::vec::Vec;

use crate::BitmapIndex;

/// Reference bitmap with linear-scan successor queries.
#[derive(Clone, Debug)]
pub struct LinearBitmap {
    words: Vec<u64>,
    capacity: usize,
}

impl BitmapIndex for LinearBitmap {
    fn with_capacity(nbits: usize) -> Self {
        let mut words = Vec::new();
        words.resize(nbits.div_ceil(64), 0u64);
        Self {
            words,
            capacity: nbits,
        }
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.capacity
    }

    fn set(&mut self, bit: usize) {
        assert!(
            bit < self.capacity,
            "bit {} out of range (capacity {})",
            bit,
            self.capacity
        );
        self.words[bit / 64] |= 1u64 << (bit % 64);
    }

    #[inline]
    fn is_set(&self, bit: usize) -> bool {
        assert!(
            bit < self.capacity,
            "bit {} out of range (capacity {})",
            bit,
            self.capacity
        );
        (self.words[bit / 64] >> (bit % 64)) & 1 == 1
    }

    fn first_set(&self, from: usize) -> Option<usize> {
        assert!(
            from <= self.capacity,
            "query position {} past capacity {}",
            from,
            self.capacity
        );
        (from..self.capacity).find(|&bit| self.is_set(bit))
    }
}
