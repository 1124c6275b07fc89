//! # Numeric Range Model
//!
//! The canonical form every range description is resolved into: an inclusive
//! `[from, to]` interval of address values tagged with its family.
//!
//! Counting needs one more bit than the addresses themselves (the full IPv6
//! space holds `2^128` addresses), which is what [`Count`] is for.

use std::fmt;

use crate::error::RangeError;
use crate::network::codec::{self, Family, Ipv6Format};

/// Represents a continuous range of addresses, inclusive on both ends.
///
/// Always satisfies `from <= to <= family.max()`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NumericRange {
    family: Family,
    from: u128,
    to: u128,
}

impl NumericRange {
    pub fn new(family: Family, from: u128, to: u128) -> Result<Self, RangeError> {
        let from = family.check_value(from)?;
        let to = family.check_value(to)?;
        if from > to {
            return Err(RangeError::InvertedRange {
                from: codec::render_address(family, from, Ipv6Format::Short),
                to: codec::render_address(family, to, Ipv6Format::Short),
            });
        }
        Ok(Self { family, from, to })
    }

    /// The whole address space of a family.
    pub fn full(family: Family) -> Self {
        Self {
            family,
            from: 0,
            to: family.max(),
        }
    }

    pub fn family(&self) -> Family {
        self.family
    }

    pub fn from(&self) -> u128 {
        self.from
    }

    pub fn to(&self) -> u128 {
        self.to
    }

    pub fn contains(&self, value: u128) -> bool {
        self.from <= value && value <= self.to
    }

    /// Number of addresses in the range, `to - from + 1`.
    pub fn len(&self) -> Count {
        Count::from_span(self.to - self.from)
    }

    pub fn render(&self, value: u128, format: Ipv6Format) -> String {
        codec::render_address(self.family, value, format)
    }
}

impl fmt::Display for NumericRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}",
            self.render(self.from, Ipv6Format::Short),
            self.render(self.to, Ipv6Format::Short)
        )
    }
}

/// Creates a range from a network address and a CIDR prefix (e.g. 192.168.1.0/24).
///
/// The base must be the first address of the block: any bit set beyond the
/// prefix is rejected with [`RangeError::MaskMismatch`].
pub fn cidr_range(family: Family, base: u128, prefix: u8) -> Result<NumericRange, RangeError> {
    let bits = family.bits();
    if prefix > bits {
        return Err(RangeError::bounds("prefix", prefix, u128::from(bits)));
    }
    let base = family.check_value(base)?;

    let host_mask = family.max().checked_shr(u32::from(prefix)).unwrap_or(0);
    if base & host_mask != 0 {
        return Err(RangeError::MaskMismatch {
            address: codec::render_address(family, base, Ipv6Format::Short),
            prefix,
        });
    }

    let network = base & !host_mask;
    let broadcast = network | host_mask;
    Ok(NumericRange {
        family,
        from: network,
        to: broadcast,
    })
}

/// A positive amount between 1 and `2^128` inclusive.
///
/// Used both for the size of a range and for 1-based positions inside it.
/// Stored as `value - 1` so the top of the range still fits in a `u128`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Count {
    span: u128,
}

impl Count {
    /// The count `span + 1`.
    pub fn from_span(span: u128) -> Self {
        Self { span }
    }

    /// `None` for zero.
    pub fn new(value: u128) -> Option<Self> {
        value.checked_sub(1).map(Self::from_span)
    }

    /// The count as a plain integer, `None` only for `2^128`.
    pub fn get(self) -> Option<u128> {
        self.span.checked_add(1)
    }

    pub fn span(self) -> u128 {
        self.span
    }
}

impl fmt::Display for Count {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(value) => write!(f, "{value}"),
            None => write!(f, "340282366920938463463374607431768211456"),
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
