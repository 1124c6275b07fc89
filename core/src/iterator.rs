//! # Address Iteration
//!
//! A forward walk over the values of a [`NumericRange`], one address at a time.
//!
//! The walk is lazy and owns nothing but its cursor, so calling [`iterate`] again
//! on the same range always starts a fresh, identical sequence.

use std::iter::FusedIterator;

use iprange_common::config::IterationConfig;
use iprange_common::network::codec;
use iprange_common::{NumericRange, RangeError};

use crate::resolver::{self, RangeSpec};

/// Cursor over `[start, to]` of a range.
#[derive(Clone, Debug)]
pub struct AddressIter {
    /// Next value to hand out, `None` once the end has been produced.
    cursor: Option<u128>,
    end: u128,
}

impl AddressIter {
    /// Caller guarantees `first <= end`.
    pub(crate) fn new(first: u128, end: u128) -> Self {
        Self {
            cursor: Some(first),
            end,
        }
    }

    pub fn has_more(&self) -> bool {
        self.cursor.is_some()
    }

    /// Addresses still to come. Only `None` for the full IPv6 space before the first step.
    pub fn remaining(&self) -> Option<u128> {
        match self.cursor {
            Some(current) => (self.end - current).checked_add(1),
            None => Some(0),
        }
    }
}

impl Iterator for AddressIter {
    type Item = u128;

    fn next(&mut self) -> Option<u128> {
        let current = self.cursor?;
        // `end` never exceeds the family maximum, so the increment cannot wrap
        self.cursor = if current < self.end { Some(current + 1) } else { None };
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining().map(usize::try_from) {
            Some(Ok(n)) => (n, Some(n)),
            _ => (usize::MAX, None),
        }
    }
}

impl FusedIterator for AddressIter {}

/// Walks `range` from its first address, or from `start` when given.
pub fn iterate(range: &NumericRange, start: Option<u128>) -> Result<AddressIter, RangeError> {
    let first = match start.map(|value| range.family().check_value(value)).transpose()? {
        Some(value) if !range.contains(value) => {
            return Err(RangeError::StartNotInRange {
                address: codec::render_address(range.family(), value, Default::default()),
                first: range.render(range.from(), Default::default()),
                last: range.render(range.to(), Default::default()),
            });
        }
        Some(value) => value,
        None => range.from(),
    };

    Ok(AddressIter::new(first, range.to()))
}

/// Resolves `spec` and yields its addresses as text, without progress data.
pub fn addresses(
    spec: &RangeSpec,
    config: IterationConfig,
) -> Result<impl Iterator<Item = String> + use<>, RangeError> {
    let range = resolver::resolve(spec)?;
    let values = iterate(&range, None)?;
    Ok(values.map(move |value| range.render(value, config.ipv6_format)))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;
    use iprange_common::{Family, Ipv6Format, MAX_IPV4};

    fn range(from: u128, to: u128) -> NumericRange {
        NumericRange::new(Family::V4, from, to).unwrap()
    }

    #[test]
    fn test_iterate_whole_range() {
        let values: Vec<u128> = iterate(&range(10, 13), None).unwrap().collect();
        assert_eq!(values, vec![10, 11, 12, 13]);
    }

    #[test]
    fn test_iterate_count() {
        let iter = iterate(&range(1, 255), None).unwrap();
        assert_eq!(iter.size_hint(), (255, Some(255)));
        assert_eq!(iter.count(), 255);
    }

    #[test]
    fn test_iterate_single() {
        let mut iter = iterate(&range(7, 7), None).unwrap();
        assert!(iter.has_more());
        assert_eq!(iter.next(), Some(7));
        assert!(!iter.has_more());
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_iterate_with_start() {
        let values: Vec<u128> = iterate(&range(0, 7), Some(5)).unwrap().collect();
        assert_eq!(values, vec![5, 6, 7]);
    }

    #[test]
    fn test_iterate_start_outside() {
        let result = iterate(&range(10, 20), Some(21));
        assert!(matches!(result, Err(RangeError::StartNotInRange { .. })));
        let result = iterate(&range(10, 20), Some(9));
        assert!(matches!(result, Err(RangeError::StartNotInRange { .. })));
    }

    #[test]
    fn test_iterate_start_beyond_ipv4() {
        let result = iterate(&range(0, 255), Some((1 << 32) + 5));
        assert!(matches!(
            result,
            Err(RangeError::OutOfBounds { component: "address", .. })
        ));
    }

    #[test]
    fn test_iterate_stops_at_family_maximum() {
        let values: Vec<u128> = iterate(&range(MAX_IPV4 - 1, MAX_IPV4), None)
            .unwrap()
            .collect();
        assert_eq!(values, vec![MAX_IPV4 - 1, MAX_IPV4]);

        let full = NumericRange::full(Family::V6);
        let mut iter = iterate(&full, Some(u128::MAX - 1)).unwrap();
        assert_eq!(iter.next(), Some(u128::MAX - 1));
        assert_eq!(iter.next(), Some(u128::MAX));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_remaining_full_space() {
        let iter = iterate(&NumericRange::full(Family::V6), None).unwrap();
        assert_eq!(iter.remaining(), None);
        assert_eq!(iter.size_hint(), (usize::MAX, None));
    }

    #[test]
    fn test_iterate_is_restartable() {
        let r = range(100, 110);
        let first: Vec<u128> = iterate(&r, None).unwrap().collect();
        let second: Vec<u128> = iterate(&r, None).unwrap().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_addresses() {
        let spec = RangeSpec::between(Family::V6, 0u128, 2u128);
        let short: Vec<String> = addresses(&spec, IterationConfig::default()).unwrap().collect();
        assert_eq!(short, vec!["::", "::1", "::2"]);

        let config = IterationConfig {
            ipv6_format: Ipv6Format::Full,
        };
        let full: Vec<String> = addresses(&spec, config).unwrap().collect();
        assert_eq!(full[2], "0000:0000:0000:0000:0000:0000:0000:0002");

        assert!(addresses(&RangeSpec::cidr("1.2.3.4/8"), config).is_err());
    }
}
