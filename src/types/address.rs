//! Address validation and integer encoding.
//!
//! The `Address` newtype wraps a parsed `IpAddr` together with the conversion
//! to and from its big-endian unsigned integer form: a `u32` bit pattern for
//! IPv4, a `u128` bit pattern for IPv6. The conversion is exact in both
//! directions, so every encoded value re-serializes to the canonical textual
//! form for its family.

use crate::error::{RangeError, RangeResult};
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

/// Check if a string is a syntactically valid IPv4 or IPv6 literal.
///
/// Never fails; malformed input simply returns `false`.
pub fn is_valid(s: &str) -> bool {
    s.parse::<IpAddr>().is_ok()
}

/// The address family of an `Address`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddrFamily {
    /// 32-bit IPv4 address space.
    V4,
    /// 128-bit IPv6 address space.
    V6,
}

impl AddrFamily {
    /// Width of the family's address space in bits.
    pub const fn bits(self) -> u32 {
        match self {
            Self::V4 => 32,
            Self::V6 => 128,
        }
    }
}

impl fmt::Display for AddrFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V4 => write!(f, "IPv4"),
            Self::V6 => write!(f, "IPv6"),
        }
    }
}

/// A validated IP address with an exact integer encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address(IpAddr);

impl Address {
    /// Parse an address from its textual form.
    pub fn parse(s: &str) -> RangeResult<Self> {
        s.parse::<IpAddr>()
            .map(Self)
            .map_err(|_| RangeError::InvalidAddress(s.to_string()))
    }

    /// The family this address belongs to.
    pub fn family(&self) -> AddrFamily {
        match self.0 {
            IpAddr::V4(_) => AddrFamily::V4,
            IpAddr::V6(_) => AddrFamily::V6,
        }
    }

    /// The address bit pattern as a big-endian unsigned integer.
    ///
    /// IPv4 values occupy the low 32 bits; the encoding is widened to `u128`
    /// so range arithmetic is uniform across families.
    pub fn to_int(&self) -> u128 {
        match self.0 {
            IpAddr::V4(v4) => u128::from(u32::from(v4)),
            IpAddr::V6(v6) => u128::from(v6),
        }
    }

    /// Rebuild an address from its integer encoding.
    ///
    /// The caller must keep `value` within the family's bit width; range
    /// iteration only ever produces in-width values.
    pub fn from_int(family: AddrFamily, value: u128) -> Self {
        match family {
            AddrFamily::V4 => {
                debug_assert!(value <= u128::from(u32::MAX));
                Self(IpAddr::V4(Ipv4Addr::from(value as u32)))
            }
            AddrFamily::V6 => Self(IpAddr::V6(Ipv6Addr::from(value))),
        }
    }

    /// The underlying `IpAddr`.
    pub fn ip(&self) -> IpAddr {
        self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Address {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<IpAddr> for Address {
    fn from(ip: IpAddr) -> Self {
        Self(ip)
    }
}
