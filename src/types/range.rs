//! Inclusive address ranges and lazy enumeration.
//!
//! An `AddrRange` is bounded by two addresses of the same family with
//! `start <= end` in integer order; both invariants are checked at
//! construction so iteration never has to re-validate.

use crate::error::{RangeError, RangeResult};
use crate::types::address::{AddrFamily, Address};

/// An inclusive range of addresses within a single family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddrRange {
    start: Address,
    end: Address,
}

impl AddrRange {
    /// Create a range from two addresses.
    ///
    /// Fails with `MixedFamilies` when the endpoints belong to different
    /// families and `InvalidRange` when `start` orders after `end`.
    pub fn new(start: Address, end: Address) -> RangeResult<Self> {
        if start.family() != end.family() {
            return Err(RangeError::MixedFamilies {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        if start.to_int() > end.to_int() {
            return Err(RangeError::InvalidRange {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self { start, end })
    }

    /// Parse and validate both endpoints, then build the range.
    pub fn parse(start: &str, end: &str) -> RangeResult<Self> {
        let start = Address::parse(start)?;
        let end = Address::parse(end)?;
        Self::new(start, end)
    }

    /// First address of the range.
    pub fn start(&self) -> Address {
        self.start
    }

    /// Last address of the range.
    pub fn end(&self) -> Address {
        self.end
    }

    /// The family both endpoints belong to.
    pub fn family(&self) -> AddrFamily {
        self.start.family()
    }

    /// Number of addresses in the range, `end - start + 1`.
    ///
    /// A range spanning the entire IPv6 family holds `2^128` addresses, one
    /// more than `u128` can represent; the count saturates at `u128::MAX`
    /// in that single case.
    pub fn len(&self) -> u128 {
        (self.end.to_int() - self.start.to_int()).saturating_add(1)
    }

    /// A single-address range has length one, never zero.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterate the range lazily in ascending integer order.
    pub fn iter(&self) -> AddrRangeIter {
        AddrRangeIter {
            family: self.family(),
            next: self.start.to_int(),
            end: self.end.to_int(),
            exhausted: false,
        }
    }

    /// Materialize the range as canonical address strings.
    pub fn to_strings(&self) -> Vec<String> {
        self.iter().map(|addr| addr.to_string()).collect()
    }
}

impl IntoIterator for &AddrRange {
    type Item = Address;
    type IntoIter = AddrRangeIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Lazy iterator over an `AddrRange`.
///
/// Tracks the upper bound separately from a done flag so ranges ending at the
/// family's maximum value terminate without overflowing.
#[derive(Debug, Clone)]
pub struct AddrRangeIter {
    family: AddrFamily,
    next: u128,
    end: u128,
    exhausted: bool,
}

impl Iterator for AddrRangeIter {
    type Item = Address;

    fn next(&mut self) -> Option<Address> {
        if self.exhausted {
            return None;
        }
        let current = self.next;
        if current >= self.end {
            self.exhausted = true;
        } else {
            self.next = current + 1;
        }
        Some(Address::from_int(self.family, current))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.exhausted {
            return (0, Some(0));
        }
        let remaining = (self.end - self.next).saturating_add(1);
        let hint = usize::try_from(remaining).ok();
        (hint.unwrap_or(usize::MAX), hint)
    }
}
