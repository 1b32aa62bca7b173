//! Generalized summary pyramid, parameterized by word radix.
//!
//! `RadixPyramid<W>` is the structure the rest of the crate builds up to.
//! Tier 0 is the raw bitmap, stored in words of type `W`; each higher tier
//! has one bit per word of the tier below, set iff any bit in that word is
//! set. The word width is the branching factor, and the number of tiers is
//! computed at construction: capacity is divided by the radix until a single
//! word covers what remains. A billion-bit bitmap at radix 64 is five tiers;
//! at radix 8, ten.
//!
//! All tiers share one contiguous allocation, with an (offset, len) table
//! locating each tier inside it. Indexing is ordinary bounds-checked slice
//! access.
//!
//! # Successor search
//!
//! `first_set` first peeks at the raw word holding the query position — for
//! dense bitmaps the answer is usually right there and no tier is touched.
//! Failing that, the search walks the tree: at each tier it masks the word
//! holding the candidate position below the candidate's own offset. A
//! surviving bit certifies a set raw bit underneath, so the search refines
//! the candidate to that group and moves down a tier; an empty result means
//! nothing remains under this word, so the candidate advances past it and
//! the search moves up a tier. The candidate position only ever moves
//! forward, and each tier visit either commits downward or skips a whole
//! subtree, so the total cost is proportional to the tree depth — not to
//! the distance to the answer.
//!
//! The recursive formulation below is the primary one;
//! [`RadixPyramid::first_set_iter`] is the same rules flattened into a loop,
//! and the two are held equivalent by property tests.

#[cfg(not(test))]
use alloc::vec::Vec;

use crate::word::Word;
use crate::BitmapIndex;

/// Generalized pyramid with 8-bit words: radix 8, the deepest variant.
pub type RadixPyramid8 = RadixPyramid<u8>;

/// Generalized pyramid with 32-bit words.
pub type RadixPyramid32 = RadixPyramid<u32>;

/// Generalized pyramid with 64-bit words: radix 64, the shallowest variant.
pub type RadixPyramid64 = RadixPyramid<u64>;

/// Multi-tier bitmap successor index over words of type `W`.
#[derive(Clone, Debug)]
pub struct RadixPyramid<W: Word> {
    /// Backing storage for every tier, tier 0 first.
    arena: Vec<W>,
    /// (offset, len) of each tier inside `arena`.
    tiers: Vec<(usize, usize)>,
    capacity: usize,
}

impl<W: Word> RadixPyramid<W> {
    /// The branching factor: bits per tier word.
    #[inline]
    pub fn radix(&self) -> usize {
        W::BITS
    }

    /// Number of tiers, tier 0 (raw bits) included.
    #[inline]
    pub fn depth(&self) -> usize {
        self.tiers.len()
    }

    #[inline]
    fn tier(&self, level: usize) -> &[W] {
        let (offset, len) = self.tiers[level];
        &self.arena[offset..offset + len]
    }

    /// Iterative successor search, behaviorally identical to
    /// [`first_set`](BitmapIndex::first_set).
    ///
    /// The recursive form is the reference; this one exists for callers that
    /// would rather not lean on the call stack. Recursion depth is bounded
    /// by a small multiple of [`depth`](RadixPyramid::depth) either way.
    pub fn first_set_iter(&self, from: usize) -> Option<usize> {
        assert!(
            from <= self.capacity,
            "query position {} past capacity {}",
            from,
            self.capacity
        );
        if from == self.capacity {
            return None;
        }
        let r = W::BITS;

        let home = from / r;
        let masked = self.tier(0)[home].masked_from(from % r);
        if !masked.is_zero() {
            return Some(home * r + masked.lowest_set());
        }

        if self.depth() == 1 {
            return None;
        }
        let mut pos = (home + 1) * r;
        let mut level = 1;
        let mut unit = r; // raw positions per tier-`level` bit
        loop {
            if pos >= self.capacity {
                return None;
            }
            let u = pos / unit;
            let word = u / r;
            let masked = self.tier(level)[word].masked_from(u % r);

            if masked.is_zero() {
                if level + 1 == self.depth() {
                    return None;
                }
                pos = (word + 1) * unit * r;
                level += 1;
                unit *= r;
            } else {
                let found = (word * r + masked.lowest_set()) * unit;
                if level == 0 {
                    return Some(found);
                }
                if found > pos {
                    pos = found;
                }
                level -= 1;
                unit /= r;
            }
        }
    }

    /// One step of the descend/ascend search at `level`, where a tier bit
    /// spans `unit` raw positions and `pos` is the current candidate.
    fn search(&self, level: usize, unit: usize, pos: usize) -> Option<usize> {
        if pos >= self.capacity {
            return None;
        }
        let r = W::BITS;
        let u = pos / unit;
        let word = u / r;
        let masked = self.tier(level)[word].masked_from(u % r);

        if masked.is_zero() {
            // Nothing at or after `pos` under this word: the mask keeps the
            // candidate's own summary bit, so even its group is empty from
            // here on. Skip the word and let the tier above pick the next
            // subtree.
            if level + 1 == self.depth() {
                return None;
            }
            self.search(level + 1, unit * r, (word + 1) * unit * r)
        } else {
            let found = (word * r + masked.lowest_set()) * unit;
            if level == 0 {
                // Raw hit; the mask guarantees `found >= pos`.
                return Some(found);
            }
            // A set summary bit certifies a raw bit below. `found` is the
            // group's first raw position — behind `pos` when the hit is the
            // group `pos` already lies in, in which case the candidate
            // stands and the tier below resolves it.
            self.search(level - 1, unit / r, pos.max(found))
        }
    }
}

impl<W: Word> BitmapIndex for RadixPyramid<W> {
    fn with_capacity(nbits: usize) -> Self {
        let r = W::BITS;
        let mut tiers = Vec::new();
        let mut offset = 0;
        let mut len = nbits.div_ceil(r).max(1);
        loop {
            tiers.push((offset, len));
            offset += len;
            if len == 1 {
                break;
            }
            len = len.div_ceil(r);
        }
        let mut arena = Vec::new();
        arena.resize(offset, W::ZERO);
        Self {
            arena,
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
        let r = W::BITS;
        // `unit` is the bit's index at tier-`level` granularity; its word
        // index at one tier is its bit index at the next.
        let mut unit = bit;
        for level in 0..self.tiers.len() {
            let (offset, _) = self.tiers[level];
            self.arena[offset + unit / r].set_bit(unit % r);
            unit /= r;
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
        self.tier(0)[bit / W::BITS].test(bit % W::BITS)
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
        let r = W::BITS;

        // Peek: the common case of a nearby set bit never touches a tier.
        let home = from / r;
        let masked = self.tier(0)[home].masked_from(from % r);
        if !masked.is_zero() {
            return Some(home * r + masked.lowest_set());
        }

        if self.depth() == 1 {
            // Single word covers the whole capacity; the peek was the search.
            return None;
        }
        self.search(1, r, (home + 1) * r)
    }
}
