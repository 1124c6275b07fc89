//! # Address Codec
//!
//! Converts between the textual form of an address and its numeric value.
//!
//! Both families are carried as `u128`; an IPv4 value simply never exceeds
//! [`MAX_IPV4`]. Parsing distinguishes text that is malformed
//! ([`RangeError::InvalidFormat`]) from text whose components are too large
//! ([`RangeError::OutOfBounds`]), which `std::net` alone does not.

use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

use crate::error::RangeError;

pub const MAX_IPV4: u128 = u32::MAX as u128;
pub const MAX_IPV6: u128 = u128::MAX;

const IPV4_GRAMMAR: &str = "a dotted-quad IPv4 address (A.B.C.D)";
const IPV6_GRAMMAR: &str = "a colon-hex IPv6 address";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    V4,
    V6,
}

impl Family {
    /// Guesses the family of an address from its text. Colons only appear in IPv6.
    pub fn detect(text: &str) -> Self {
        if text.contains(':') { Family::V6 } else { Family::V4 }
    }

    pub fn bits(self) -> u8 {
        match self {
            Family::V4 => 32,
            Family::V6 => 128,
        }
    }

    /// Largest address value of the family, `2^bits - 1`.
    pub fn max(self) -> u128 {
        match self {
            Family::V4 => MAX_IPV4,
            Family::V6 => MAX_IPV6,
        }
    }

    /// Rejects a value the family cannot represent, such as an IPv4 value past `2^32 - 1`.
    pub fn check_value(self, value: u128) -> Result<u128, RangeError> {
        let max = self.max();
        if value > max {
            return Err(RangeError::bounds("address", value, max));
        }
        Ok(value)
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Family::V4 => write!(f, "IPv4"),
            Family::V6 => write!(f, "IPv6"),
        }
    }
}

/// How IPv6 addresses are rendered. IPv4 is always dotted-quad.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Ipv6Format {
    /// Compressed form, e.g. `2001:db8::1`.
    #[default]
    Short,
    /// Eight zero-padded groups, e.g. `2001:0db8:0000:0000:0000:0000:0000:0001`.
    Full,
}

/// Parses `text` as an address of the given family.
pub fn parse_address(family: Family, text: &str) -> Result<u128, RangeError> {
    match family {
        Family::V4 => parse_ipv4(text),
        Family::V6 => parse_ipv6(text),
    }
}

/// Renders `value` as text. `value` must fit the family.
pub fn render_address(family: Family, value: u128, format: Ipv6Format) -> String {
    match family {
        Family::V4 => Ipv4Addr::from(value as u32).to_string(),
        Family::V6 => match format {
            Ipv6Format::Short => Ipv6Addr::from(value).to_string(),
            Ipv6Format::Full => Ipv6Addr::from(value)
                .segments()
                .iter()
                .map(|group| format!("{group:04x}"))
                .collect::<Vec<String>>()
                .join(":"),
        },
    }
}

/// True when `s` is 1 to `max_len` ASCII digits.
pub fn is_decimal(s: &str, max_len: usize) -> bool {
    !s.is_empty() && s.len() <= max_len && s.bytes().all(|b| b.is_ascii_digit())
}

/// Value of a string already checked with [`is_decimal`].
pub fn decimal_value(s: &str) -> u16 {
    s.bytes().fold(0u16, |acc, b| acc * 10 + u16::from(b - b'0'))
}

fn parse_ipv4(text: &str) -> Result<u128, RangeError> {
    let octets: Vec<&str> = text.split('.').collect();
    if octets.len() != 4 || !octets.iter().all(|octet| is_decimal(octet, 3)) {
        return Err(RangeError::format(text, IPV4_GRAMMAR));
    }

    let mut value: u32 = 0;
    for octet in octets {
        let octet_value = decimal_value(octet);
        if octet_value > 255 {
            return Err(RangeError::bounds("octet", octet, 255));
        }
        value = (value << 8) | u32::from(octet_value);
    }
    Ok(u128::from(value))
}

fn parse_ipv6(text: &str) -> Result<u128, RangeError> {
    // std rejects oversized groups as plain syntax errors, so catch them first
    for group in text.split(':') {
        if group.bytes().all(|b| b.is_ascii_hexdigit()) && group.trim_start_matches('0').len() > 4 {
            return Err(RangeError::bounds("group", group, 0xffff));
        }
    }

    text.parse::<Ipv6Addr>()
        .map(u128::from)
        .map_err(|_| RangeError::format(text, IPV6_GRAMMAR))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
