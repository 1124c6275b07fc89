//! # Range Resolution
//!
//! Turns the ways a caller can describe a range into a canonical [`NumericRange`]:
//! * A CIDR block (e.g., `10.0.1.0/29`, `2001:db8::/125`).
//! * Explicit bounds, each side numeric, textual or omitted (e.g., `{from: "10.0.0.1"}`).
//!
//! Omitted bounds default to the bottom and the top of the family's address space,
//! so an empty [`RangeSpec::Bounds`] covers every address.

use std::str::FromStr;

use iprange_common::network::codec::{self, Family};
use iprange_common::network::range;
use iprange_common::{NumericRange, RangeError};
use tracing::debug;

const CIDR_V4_GRAMMAR: &str = "A.B.C.D/E";
const CIDR_V6_GRAMMAR: &str = "an IPv6 address followed by /E";

/// One side of an explicit range.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Bound {
    Value(u128),
    Text(String),
}

impl From<u128> for Bound {
    fn from(value: u128) -> Self {
        Bound::Value(value)
    }
}

impl From<u32> for Bound {
    fn from(value: u32) -> Self {
        Bound::Value(u128::from(value))
    }
}

impl From<&str> for Bound {
    fn from(text: &str) -> Self {
        Bound::Text(text.to_string())
    }
}

impl From<String> for Bound {
    fn from(text: String) -> Self {
        Bound::Text(text)
    }
}

/// Describes a range before it is resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RangeSpec {
    /// `address/prefix`, family taken from the address text.
    Cidr(String),
    /// Explicit bounds. `None` means the family minimum (`from`) or maximum (`to`).
    Bounds {
        family: Family,
        from: Option<Bound>,
        to: Option<Bound>,
    },
}

impl RangeSpec {
    pub fn cidr(text: impl Into<String>) -> Self {
        RangeSpec::Cidr(text.into())
    }

    /// Every address of the family.
    pub fn full(family: Family) -> Self {
        RangeSpec::Bounds {
            family,
            from: None,
            to: None,
        }
    }

    pub fn between(family: Family, from: impl Into<Bound>, to: impl Into<Bound>) -> Self {
        RangeSpec::Bounds {
            family,
            from: Some(from.into()),
            to: Some(to.into()),
        }
    }
}

/// The whole IPv4 space.
impl Default for RangeSpec {
    fn default() -> Self {
        RangeSpec::full(Family::V4)
    }
}

impl FromStr for RangeSpec {
    type Err = RangeError;

    /// Parses a string into a `RangeSpec`.
    ///
    /// Supported formats:
    /// * **Keywords**: "ipv4", "ipv6" (case-insensitive), the whole address space.
    /// * **CIDR**: "Network/Prefix" (e.g., "192.168.1.0/24", "2001:db8::/125").
    /// * **Range**: "Start-End" (e.g., "10.0.0.1-10.0.0.9", "10.0.0.1-9", "::1-::ff").
    /// * **Host**: a single address, a one-address range.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if let Some(spec) = parse_keyword(&s.to_ascii_lowercase()) {
            return Ok(spec);
        }

        if s.contains('/') {
            parse_cidr(s)?;
            return Ok(RangeSpec::cidr(s));
        }

        if let Some((start_str, end_str)) = s.split_once('-') {
            return parse_ip_range(start_str.trim(), end_str.trim());
        }

        let family = Family::detect(s);
        let value = codec::parse_address(family, s)?;
        Ok(RangeSpec::between(family, value, value))
    }
}

/// A parsed and validated CIDR block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cidr {
    base: u128,
    prefix: u8,
    range: NumericRange,
}

impl Cidr {
    pub fn family(&self) -> Family {
        self.range.family()
    }

    /// The network address the block was written with.
    pub fn base(&self) -> u128 {
        self.base
    }

    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    pub fn range(&self) -> NumericRange {
        self.range
    }
}

impl FromStr for Cidr {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_cidr(s)
    }
}

/// Parses and validates CIDR notation like "192.168.1.0/24".
///
/// The prefix must fit the family's width and the address must be the first
/// address of the block, for IPv4 and IPv6 alike.
pub fn parse_cidr(text: &str) -> Result<Cidr, RangeError> {
    let family = Family::detect(text);
    let grammar = match family {
        Family::V4 => CIDR_V4_GRAMMAR,
        Family::V6 => CIDR_V6_GRAMMAR,
    };

    let Some((address, prefix_str)) = text.split_once('/') else {
        return Err(RangeError::format(text, grammar));
    };
    if !codec::is_decimal(prefix_str, 3) {
        return Err(RangeError::format(text, grammar));
    }

    let base = codec::parse_address(family, address)?;
    let prefix = codec::decimal_value(prefix_str);
    if prefix > u16::from(family.bits()) {
        return Err(RangeError::bounds("prefix", prefix, u128::from(family.bits())));
    }
    let prefix = prefix as u8;

    let range = range::cidr_range(family, base, prefix)?;
    Ok(Cidr {
        base,
        prefix,
        range,
    })
}

/// Answers "is this a well-formed CIDR block?" without handing back an error.
pub fn is_valid_cidr(text: &str) -> bool {
    parse_cidr(text).is_ok()
}

/// Resolves any range description into its canonical interval.
pub fn resolve(spec: &RangeSpec) -> Result<NumericRange, RangeError> {
    let range = match spec {
        RangeSpec::Cidr(text) => parse_cidr(text)?.range(),
        RangeSpec::Bounds { family, from, to } => {
            let from = prepare_bound(*family, from.as_ref(), 0)?;
            let to = prepare_bound(*family, to.as_ref(), family.max())?;
            NumericRange::new(*family, from, to)?
        }
    };

    debug!(family = %range.family(), addresses = %range.len(), "Resolved range {range}");
    Ok(range)
}

pub fn is_valid(spec: &RangeSpec) -> bool {
    resolve(spec).is_ok()
}

fn prepare_bound(family: Family, bound: Option<&Bound>, default: u128) -> Result<u128, RangeError> {
    match bound {
        None => Ok(default),
        Some(Bound::Value(value)) => Ok(*value),
        Some(Bound::Text(text)) => codec::parse_address(family, text),
    }
}

fn parse_keyword(s_lower: &str) -> Option<RangeSpec> {
    match s_lower {
        "ipv4" => Some(RangeSpec::full(Family::V4)),
        "ipv6" => Some(RangeSpec::full(Family::V6)),
        _ => None,
    }
}

/// Parses "1.1.1.1-2.2.2.2" or the abbreviated IPv4 form "1.1.1.1-50".
fn parse_ip_range(start_str: &str, end_str: &str) -> Result<RangeSpec, RangeError> {
    let family = Family::detect(start_str);
    let start = codec::parse_address(family, start_str)?;

    let end = match family {
        Family::V4 => parse_range_end_addr(end_str, start)?,
        Family::V6 => codec::parse_address(family, end_str)?,
    };

    NumericRange::new(family, start, end)?;
    Ok(RangeSpec::between(family, start, end))
}

/// Helper to parse the end address of an IPv4 range.
///
/// A partial end ("50", "2.66") replaces the trailing octets of the start address.
fn parse_range_end_addr(end_str: &str, start: u128) -> Result<u128, RangeError> {
    let partial: Vec<&str> = end_str.split('.').collect();
    if partial.len() == 4 {
        return codec::parse_address(Family::V4, end_str);
    }
    if partial.len() > 4 || !partial.iter().all(|octet| codec::is_decimal(octet, 3)) {
        return Err(RangeError::format(end_str, "an IPv4 address or its trailing octets"));
    }

    let mut octets = (start as u32).to_be_bytes();
    let start_index = 4 - partial.len();
    for (slot, octet) in octets[start_index..].iter_mut().zip(partial) {
        let value = codec::decimal_value(octet);
        if value > 255 {
            return Err(RangeError::bounds("octet", octet, 255));
        }
        *slot = value as u8;
    }
    Ok(u128::from(u32::from_be_bytes(octets)))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
