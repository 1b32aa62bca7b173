//! # nextbit
//!
//! Fixed-capacity bitmap successor indices.
//!
//! Every structure in this crate stores a set of bit positions and answers
//! the same three calls: set a bit, test a bit, and — the interesting one —
//! find the smallest set bit at or after a given position (a successor
//! query). Bits are write-once: there is no clear operation, and capacity is
//! fixed at construction.
//!
//! The variants differ in how much summary structure they maintain on top of
//! the raw bits:
//!
//! - [`LinearBitmap`] — tests every bit in turn; O(capacity) successor
//!   queries. Exists as the correctness oracle for the others.
//! - [`FlatBitmap`] — one tier of 64-bit words; masks the home word, then
//!   scans whole words.
//! - [`Pyramid64`] — a fixed six-tier, 64-ary summary pyramid.
//! - [`RadixPyramid`] — the generalized pyramid: any word width as the radix
//!   (8, 32, or 64), tree depth computed from the capacity. Successor
//!   queries cost O(depth) word reads regardless of how far away the next
//!   set bit is.
//!
//! This access pattern — populate once, then repeatedly ask "what's the next
//! occupied slot from here?" — is the core of ID allocators, ready-queue
//! scanners, and sparse index walks.
//!
//! ```
//! use nextbit::{BitmapIndex, RadixPyramid64};
//!
//! let mut bm = RadixPyramid64::with_capacity(1000);
//! bm.set(9);
//! bm.set(280);
//!
//! assert_eq!(bm.first_set(0), Some(9));
//! assert_eq!(bm.first_set(10), Some(280));
//! assert_eq!(bm.first_set(281), None);
//! ```

// Use no_std unless the std feature is enabled or we're in test mode
#![cfg_attr(not(any(test, feature = "std")), no_std)]

// When using no_std, we need to explicitly link the alloc crate
#[cfg(not(any(test, feature = "std")))]
extern crate alloc;

// When using std, re-export alloc types from std for compatibility
#[cfg(any(test, feature = "std"))]
extern crate std as alloc;

mod fixed;
mod flat;
mod linear;
mod pyramid;
mod word;

pub use fixed::Pyramid64;
pub use flat::FlatBitmap;
pub use linear::LinearBitmap;
pub use pyramid::{RadixPyramid, RadixPyramid32, RadixPyramid64, RadixPyramid8};
pub use word::Word;

/// The capability set shared by every bitmap variant.
///
/// Positions are 0-indexed and bounded by the capacity chosen at
/// construction. Bits are write-once: [`set`](BitmapIndex::set) is the only
/// mutator and there is no clear.
///
/// # Preconditions
///
/// `set` and `is_set` require `bit < capacity`; `first_set` requires
/// `from <= capacity` (querying exactly at capacity is legal and returns
/// `None`). Violations panic — the underlying structures do not reserve
/// storage past capacity, so out-of-range access is a caller bug, not a
/// recoverable condition.
pub trait BitmapIndex {
    /// Construct a zeroed bitmap able to hold positions `0..nbits`.
    fn with_capacity(nbits: usize) -> Self
    where
        Self: Sized;

    /// Total number of representable bit positions.
    fn capacity(&self) -> usize;

    /// Mark `bit` as set. Idempotent.
    fn set(&mut self, bit: usize);

    /// Whether `bit` is set.
    fn is_set(&self, bit: usize) -> bool;

    /// The smallest set bit at or after `from`, or `None` if no set bit
    /// exists in `from..capacity`.
    fn first_set(&self, from: usize) -> Option<usize>;
}
