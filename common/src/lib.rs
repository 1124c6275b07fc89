//! # iprange-common
//!
//! Shared building blocks for walking address ranges:
//!
//! * **[`network::codec`]**: text ↔ number conversion for IPv4 and IPv6.
//! * **[`network::range`]**: the canonical [`NumericRange`] and the [`Count`] type.
//! * **[`error`]**: the [`RangeError`] taxonomy.
//! * **[`config`]**: options that change how addresses are produced.

pub mod config;
pub mod error;
pub mod network;

pub use error::RangeError;
pub use network::codec::{Family, Ipv6Format, MAX_IPV4, MAX_IPV6};
pub use network::range::{Count, NumericRange};
