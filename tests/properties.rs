//! Property-based tests for the bitmap successor indices.
//!
//! The linear-scan bitmap is the oracle: whatever it answers is by
//! definition correct, and every other variant must agree with it bit for
//! bit. The remaining properties pin down the successor contract itself —
//! monotonicity, idempotent writes, exhaustion at capacity — and hold the
//! recursive and iterative pyramid searches to identical behavior.

use nextbit::{
    BitmapIndex, FlatBitmap, LinearBitmap, Pyramid64, RadixPyramid, RadixPyramid32,
    RadixPyramid64, RadixPyramid8, Word,
};
use proptest::prelude::*;

/// A capacity and a (possibly duplicated) list of positions inside it.
fn capacity_and_bits() -> impl Strategy<Value = (usize, Vec<usize>)> {
    (1usize..1024).prop_flat_map(|cap| {
        let bits = prop::collection::vec(0..cap, 0..96);
        (Just(cap), bits)
    })
}

fn populate<B: BitmapIndex>(cap: usize, bits: &[usize]) -> B {
    let mut bm = B::with_capacity(cap);
    for &b in bits {
        bm.set(b);
    }
    bm
}

/// Query positions worth probing: the boundaries plus every set bit's
/// neighborhood.
fn probes(cap: usize, bits: &[usize]) -> Vec<usize> {
    let mut probes = vec![0, cap];
    for &b in bits {
        probes.push(b.saturating_sub(1));
        probes.push(b);
        if b + 1 <= cap {
            probes.push(b + 1);
        }
    }
    probes
}

macro_rules! oracle_equivalence {
    ($name:ident, $ty:ty) => {
        proptest! {
            #[test]
            fn $name((cap, bits) in capacity_and_bits()) {
                let oracle: LinearBitmap = populate(cap, &bits);
                let bm: $ty = populate(cap, &bits);
                for from in probes(cap, &bits) {
                    prop_assert_eq!(
                        bm.first_set(from),
                        oracle.first_set(from),
                        "first_set({}) diverged from oracle",
                        from
                    );
                }
                for b in 0..cap {
                    prop_assert_eq!(bm.is_set(b), oracle.is_set(b), "is_set({})", b);
                }
            }
        }
    };
}

oracle_equivalence!(prop_flat_matches_oracle, FlatBitmap);
oracle_equivalence!(prop_pyramid64_matches_oracle, Pyramid64);
oracle_equivalence!(prop_radix8_matches_oracle, RadixPyramid8);
oracle_equivalence!(prop_radix32_matches_oracle, RadixPyramid32);
oracle_equivalence!(prop_radix64_matches_oracle, RadixPyramid64);

fn recursive_iterative_agree<W: Word>(cap: usize, bits: &[usize]) -> Result<(), TestCaseError> {
    let bm: RadixPyramid<W> = populate(cap, bits);
    for from in 0..=cap {
        prop_assert_eq!(
            bm.first_set(from),
            bm.first_set_iter(from),
            "recursive and iterative search disagree at {}",
            from
        );
    }
    Ok(())
}

proptest! {
    /// The recursive and iterative searches are the same algorithm; every
    /// query position must agree, at every radix.
    #[test]
    fn prop_recursive_iterative_equivalent((cap, bits) in capacity_and_bits()) {
        recursive_iterative_agree::<u8>(cap, &bits)?;
        recursive_iterative_agree::<u32>(cap, &bits)?;
        recursive_iterative_agree::<u64>(cap, &bits)?;
    }

    /// first_set never decreases as the query position grows, and once it
    /// reports exhaustion it stays exhausted.
    #[test]
    fn prop_first_set_monotonic((cap, bits) in capacity_and_bits()) {
        let bm: RadixPyramid8 = populate(cap, &bits);
        let mut prev: Option<usize> = Some(0);
        for from in 0..=cap {
            let cur = bm.first_set(from);
            match (prev, cur) {
                (Some(p), Some(c)) => prop_assert!(
                    p <= c,
                    "first_set({}) = {} went backwards from {}", from, c, p
                ),
                (None, Some(c)) => prop_assert!(
                    false,
                    "first_set({}) = {} found a bit after exhaustion", from, c
                ),
                _ => {}
            }
            prev = cur;
        }
    }

    /// Setting a bit twice is observationally a no-op.
    #[test]
    fn prop_set_is_idempotent((cap, bits) in capacity_and_bits()) {
        let once: RadixPyramid32 = populate(cap, &bits);
        let mut twice: RadixPyramid32 = populate(cap, &bits);
        for &b in &bits {
            twice.set(b);
        }
        for from in probes(cap, &bits) {
            prop_assert_eq!(once.first_set(from), twice.first_set(from));
        }
        for b in 0..cap {
            prop_assert_eq!(once.is_set(b), twice.is_set(b));
        }
    }

    /// Querying exactly at capacity is legal and always exhausted.
    #[test]
    fn prop_query_at_capacity_is_exhausted((cap, bits) in capacity_and_bits()) {
        prop_assert_eq!(populate::<LinearBitmap>(cap, &bits).first_set(cap), None);
        prop_assert_eq!(populate::<FlatBitmap>(cap, &bits).first_set(cap), None);
        prop_assert_eq!(populate::<Pyramid64>(cap, &bits).first_set(cap), None);
        prop_assert_eq!(populate::<RadixPyramid8>(cap, &bits).first_set(cap), None);
        prop_assert_eq!(populate::<RadixPyramid32>(cap, &bits).first_set(cap), None);
        prop_assert_eq!(populate::<RadixPyramid64>(cap, &bits).first_set(cap), None);
    }

    /// A set bit is its own successor.
    #[test]
    fn prop_set_bit_is_own_successor((cap, bits) in capacity_and_bits()) {
        let bm: RadixPyramid64 = populate(cap, &bits);
        for &b in &bits {
            prop_assert_eq!(bm.first_set(b), Some(b), "first_set({}) should be identity", b);
        }
    }

    /// Walking first_set from zero recovers exactly the sorted set of
    /// distinct bits that were written.
    #[test]
    fn prop_walk_recovers_written_set((cap, bits) in capacity_and_bits()) {
        let bm: RadixPyramid8 = populate(cap, &bits);
        let mut expected = bits.clone();
        expected.sort_unstable();
        expected.dedup();

        let mut walked = Vec::new();
        let mut from = 0;
        while let Some(found) = bm.first_set(from) {
            walked.push(found);
            from = found + 1;
        }
        prop_assert_eq!(walked, expected);
    }
}
