//! # Range Errors
//!
//! Every way a range description can be rejected. All of these are raised while a
//! range is being resolved or a session is being set up, never halfway through a walk.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    /// The text does not follow the address or CIDR grammar at all.
    #[error("'{input}' is in a wrong format, expected {expected}")]
    InvalidFormat {
        input: String,
        expected: &'static str,
    },

    /// A component parsed, but it is larger than the family allows
    /// (octet above 255, group above ffff, prefix above the bit width, ...).
    #[error("{component} {value} exceeds the maximum of {max}")]
    OutOfBounds {
        component: &'static str,
        value: String,
        max: u128,
    },

    /// The base address of a CIDR has bits set beyond the prefix.
    #[error("the mask /{prefix} cannot be applied to {address}")]
    MaskMismatch { address: String, prefix: u8 },

    #[error("\"from\" ({from}) must not be greater than \"to\" ({to})")]
    InvertedRange { from: String, to: String },

    #[error("{address} is not within {first} - {last}")]
    AddressNotInRange {
        address: String,
        first: String,
        last: String,
    },

    #[error("cannot start at {address}, it is not within {first} - {last}")]
    StartNotInRange {
        address: String,
        first: String,
        last: String,
    },
}

impl RangeError {
    pub fn format(input: &str, expected: &'static str) -> Self {
        Self::InvalidFormat {
            input: input.to_string(),
            expected,
        }
    }

    pub fn bounds(component: &'static str, value: impl ToString, max: u128) -> Self {
        Self::OutOfBounds {
            component,
            value: value.to_string(),
            max,
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
