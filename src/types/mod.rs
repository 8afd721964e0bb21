//! Core type definitions using newtype patterns for type safety.
//!
//! These types prevent mixed-family and inverted-bound ranges by making the
//! invalid states unrepresentable after construction.

mod address;
mod range;

pub use address::{is_valid, AddrFamily, Address};
pub use range::{AddrRange, AddrRangeIter};
