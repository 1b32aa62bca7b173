//! Fixed-radix summary pyramid: 64-ary, six tiers.
//!
//! `Pyramid64` is the hard-coded special case of the generalized
//! [`RadixPyramid`](crate::RadixPyramid): the radix is always 64 and the
//! tree is always six tiers deep, enough for 64^6 = 2^36 bit positions.
//! Tier 0 holds the raw bits; bit `k` of a word at tier `l > 0` is set iff
//! any bit is set in the corresponding 64-word group of tier `l - 1`.
//! Keeping the shape fixed lets every index computation be a shift and a
//! mask, which makes this a useful cross-check for the generic structure.
//!
//! The successor search here is the iterative formulation: a single loop
//! that moves a tier counter down when a summary bit certifies a match
//! below, and up when the current word is exhausted.

#[cfg(not(test))]
use alloc::vec::Vec;

use crate::BitmapIndex;

/// Number of summary tiers, tier 0 (raw bits) included.
const TIERS: usize = 6;

/// log2 of the radix; one tier consumes 6 bits of a position.
const SHIFT: usize = 6;

/// Largest supported capacity: 64^6 bit positions.
const MAX_CAPACITY: usize = 1 << (TIERS * SHIFT);

/// Six-tier, 64-ary bitmap successor index.
#[derive(Clone, Debug)]
pub struct Pyramid64 {
    /// `tiers[0]` is the raw bitmap; each higher tier summarizes the one
    /// below it, 64 words per summary bit.
    tiers: [Vec<u64>; TIERS],
    capacity: usize,
}

impl BitmapIndex for Pyramid64 {
    fn with_capacity(nbits: usize) -> Self {
        assert!(
            nbits <= MAX_CAPACITY,
            "capacity {} exceeds the fixed six-tier limit {}",
            nbits,
            MAX_CAPACITY
        );
        let tiers = core::array::from_fn(|level| {
            // Tier `level` needs one bit per 64^(level+1) raw positions.
            let len = nbits.div_ceil(1 << ((level + 1) * SHIFT)).max(1);
            let mut words = Vec::new();
            words.resize(len, 0u64);
            words
        });
        Self {
            tiers,
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
        // One summary bit per tier lies on the path from the raw bit to the
        // root; OR them all in.
        for (level, tier) in self.tiers.iter_mut().enumerate() {
            let idx = bit >> ((level + 1) * SHIFT);
            let off = (bit >> (level * SHIFT)) & 63;
            tier[idx] |= 1u64 << off;
        }
    }

    #[inline]
    fn is_set(&self, bit: usize) -> bool {
        assert!(
            bit < self.capacity,
            "bit {} out of range (capacity {})",
            bit,
            self.capacity
        );
        (self.tiers[0][bit >> SHIFT] >> (bit & 63)) & 1 == 1
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

        // Peek: if the raw word holding `from` has a surviving bit, the
        // answer is right here and no tier needs to be consulted.
        let home = from >> SHIFT;
        let masked = self.tiers[0][home] & (u64::MAX << (from & 63));
        if masked != 0 {
            return Some((home << SHIFT) + masked.trailing_zeros() as usize);
        }

        // The home word is spent; restart the hunt at the next raw word and
        // let the tiers steer. `pos` only ever moves forward.
        let mut pos = (home + 1) << SHIFT;
        let mut level = 1;
        loop {
            if pos >= self.capacity {
                return None;
            }
            let shift = level * SHIFT;
            let idx = pos >> (shift + SHIFT);
            let off = (pos >> shift) & 63;
            let masked = self.tiers[level][idx] & (u64::MAX << off);

            if masked == 0 {
                // Nothing at or after `pos` under this word. Either the
                // whole structure is exhausted, or the parent decides where
                // to resume.
                if level == TIERS - 1 {
                    return None;
                }
                pos = (idx + 1) << (shift + SHIFT);
                level += 1;
            } else {
                let found = ((idx << SHIFT) + masked.trailing_zeros() as usize) << shift;
                if level == 0 {
                    // Tier 0 hit is the raw answer; the mask guarantees
                    // `found >= pos`.
                    return Some(found);
                }
                // A set summary bit certifies a raw bit below it; refine the
                // candidate and pinpoint it one tier down. `found` is the
                // group's first position, which may trail `pos` when the hit
                // is the group `pos` already lies in.
                if found > pos {
                    pos = found;
                }
                level -= 1;
            }
        }
    }
}
