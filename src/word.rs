//! Tier word abstraction for the pyramid bitmaps.
//!
//! A pyramid tier is a flat array of fixed-width machine words, and the word
//! width doubles as the branching factor of the tree. `Word` is the small
//! set of bit primitives the search needs, implemented for `u8`, `u32`, and
//! `u64` so the same pyramid code can be instantiated at each radix.

/// A fixed-width machine word usable as a pyramid tier element.
///
/// The lowest-set-bit primitive is undefined on an all-zero word (it would
/// report the word width); callers must check [`is_zero`](Word::is_zero)
/// before invoking [`lowest_set`](Word::lowest_set).
pub trait Word: Copy + PartialEq + core::fmt::Debug {
    /// Width of the word in bits; the radix of a pyramid built from it.
    const BITS: usize;

    /// The all-zeroes word.
    const ZERO: Self;

    /// Whether no bit is set.
    fn is_zero(self) -> bool;

    /// Whether bit `off` is set. Requires `off < BITS`.
    fn test(self, off: usize) -> bool;

    /// Set bit `off`. Requires `off < BITS`.
    fn set_bit(&mut self, off: usize);

    /// Copy of `self` with every bit below `off` cleared. Requires
    /// `off < BITS`.
    fn masked_from(self, off: usize) -> Self;

    /// Position of the lowest set bit. Requires a non-zero word — check
    /// [`is_zero`](Word::is_zero) first.
    fn lowest_set(self) -> usize;
}

macro_rules! impl_word {
    ($($t:ty),*) => {
        $(
            impl Word for $t {
                const BITS: usize = <$t>::BITS as usize;
                const ZERO: Self = 0;

                #[inline(always)]
                fn is_zero(self) -> bool {
                    self == 0
                }

                #[inline(always)]
                fn test(self, off: usize) -> bool {
                    debug_assert!(off < <Self as Word>::BITS);
                    (self >> off) & 1 == 1
                }

                #[inline(always)]
                fn set_bit(&mut self, off: usize) {
                    debug_assert!(off < <Self as Word>::BITS);
                    *self |= (1 as $t) << off;
                }

                #[inline(always)]
                fn masked_from(self, off: usize) -> Self {
                    debug_assert!(off < <Self as Word>::BITS);
                    self & (<$t>::MAX << off)
                }

                #[inline(always)]
                fn lowest_set(self) -> usize {
                    debug_assert!(self != 0, "lowest_set on an all-zero word");
                    self.trailing_zeros() as usize
                }
            }
        )*
    };
}

impl_word!(u8, u32, u64);
