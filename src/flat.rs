//! Single-tier word-scan bitmap.
//!
//! `FlatBitmap` keeps the raw bits in 64-bit words and nothing else. A
//! successor query masks off the bits below the query position in its home
//! word; if anything survives, that word already holds the answer.
//! Otherwise it scans forward a whole word at a time, stopping at the first
//! non-zero word. Still O(capacity / 64) in the worst case, but the
//! masked-home-word step is the same "peek" that lets the pyramids
//! short-circuit dense bitmaps.

#[cfg(not(test))]
use alloc::vec::Vec;

use crate::BitmapIndex;

/// Bitmap with word-at-a-time successor scans.
#[derive(Clone, Debug)]
pub struct FlatBitmap {
    words: Vec<u64>,
    capacity: usize,
}

impl BitmapIndex for FlatBitmap {
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
        if from == self.capacity {
            return None;
        }

        // Home word: zero out everything below `from` and test the rest.
        let mut idx = from / 64;
        let masked = self.words[idx] & (u64::MAX << (from % 64));
        if masked != 0 {
            return Some(idx * 64 + masked.trailing_zeros() as usize);
        }

        // Scan forward a word at a time.
        idx += 1;
        while idx < self.words.len() {
            let word = self.words[idx];
            if word != 0 {
                return Some(idx * 64 + word.trailing_zeros() as usize);
            }
            idx += 1;
        }
        None
    }
}
