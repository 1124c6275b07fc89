use crate::network::codec::Ipv6Format;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IterationConfig {
    /// Rendering used for produced IPv6 addresses.
    ///
    /// Has no effect on IPv4, which is always dotted-quad.
    pub ipv6_format: Ipv6Format,
}
