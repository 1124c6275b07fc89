//! # Progress Tracking
//!
//! Where an address sits inside its range: how many addresses there are, its
//! 1-based position and the rounded completion percentage.
//!
//! Positions are always measured against the whole range, so a walk that starts
//! late still reports the true position of every address it produces.

use iprange_common::network::codec;
use iprange_common::{Count, NumericRange, RangeError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Progress {
    pub all_ips: Count,
    /// 1-based position of the address within the range.
    pub iteration: Count,
    /// `iteration / all_ips * 100`, rounded half up.
    pub completion_percentage: u8,
}

/// Computes the progress record of `value` within `range`.
pub fn progress_of(range: &NumericRange, value: u128) -> Result<Progress, RangeError> {
    let value = range.family().check_value(value)?;
    if !range.contains(value) {
        return Err(RangeError::AddressNotInRange {
            address: codec::render_address(range.family(), value, Default::default()),
            first: range.render(range.from(), Default::default()),
            last: range.render(range.to(), Default::default()),
        });
    }
    Ok(measure(range, value))
}

/// [`progress_of`] for a value already known to be inside `range`.
pub(crate) fn measure(range: &NumericRange, value: u128) -> Progress {
    let offset = value - range.from();
    let span = range.to() - range.from();

    Progress {
        all_ips: Count::from_span(span),
        iteration: Count::from_span(offset),
        completion_percentage: completion_percentage(offset, span),
    }
}

/// Rounded `(offset + 1) / (span + 1) * 100`.
fn completion_percentage(offset: u128, span: u128) -> u8 {
    if span < u128::MAX >> 8 {
        let iteration = offset + 1;
        let all = span + 1;
        return ((iteration * 200 + all) / (all * 2)) as u8;
    }

    wide_completion_percentage(offset, span)
}

/// Same as [`completion_percentage`] for spans whose products overflow a `u128`.
///
/// The result rounds to at least `k` exactly when `200 * iteration >= (2k - 1) * all`,
/// so both sides are compared as 256-bit products.
fn wide_completion_percentage(offset: u128, span: u128) -> u8 {
    let doubled = widened_count(offset, 200);
    (1..=100u8)
        .rev()
        .find(|&k| doubled >= widened_count(span, 2 * u128::from(k) - 1))
        .unwrap_or(0)
}

/// `(span + 1) * factor` as a 256-bit `(high, low)` pair. `factor` must stay below 2^64.
fn widened_count(span: u128, factor: u128) -> (u128, u128) {
    let low_product = (span & u128::from(u64::MAX)) * factor;
    let high_product = (span >> 64) * factor;

    let (low, carry) = (high_product << 64).overflowing_add(low_product);
    let high = (high_product >> 64) + u128::from(carry);

    let (low, carry) = low.overflowing_add(factor);
    (high + u128::from(carry), low)
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
    use iprange_common::{Family, MAX_IPV4};

    fn slash24() -> NumericRange {
        NumericRange::new(Family::V4, 0, 255).unwrap()
    }

    #[test]
    fn test_progress_first_address() {
        let progress = progress_of(&slash24(), 0).unwrap();
        assert_eq!(progress.all_ips.get(), Some(256));
        assert_eq!(progress.iteration.get(), Some(1));
        // 1/256 is 0.39%, which rounds down
        assert_eq!(progress.completion_percentage, 0);
    }

    #[test]
    fn test_progress_rounds_half_up() {
        assert_eq!(progress_of(&slash24(), 1).unwrap().completion_percentage, 1);
        assert_eq!(progress_of(&slash24(), 128).unwrap().completion_percentage, 50);

        // 1/8 = 12.5%
        let range = NumericRange::new(Family::V4, 0, 7).unwrap();
        assert_eq!(progress_of(&range, 0).unwrap().completion_percentage, 13);
    }

    #[test]
    fn test_progress_last_address() {
        let progress = progress_of(&slash24(), 255).unwrap();
        assert_eq!(progress.iteration.get(), Some(256));
        assert_eq!(progress.completion_percentage, 100);
    }

    #[test]
    fn test_progress_single_address() {
        let range = NumericRange::new(Family::V4, 42, 42).unwrap();
        let progress = progress_of(&range, 42).unwrap();
        assert_eq!(progress.all_ips.get(), Some(1));
        assert_eq!(progress.iteration.get(), Some(1));
        assert_eq!(progress.completion_percentage, 100);
    }

    #[test]
    fn test_progress_outside_range() {
        let range = NumericRange::new(Family::V4, 10, 20).unwrap();
        assert!(matches!(
            progress_of(&range, 21),
            Err(RangeError::AddressNotInRange { .. })
        ));
        assert!(matches!(
            progress_of(&range, 9),
            Err(RangeError::AddressNotInRange { .. })
        ));
    }

    #[test]
    fn test_progress_value_beyond_ipv4() {
        // would read as 10.0.0.1 if the high bits were dropped
        let range = NumericRange::new(Family::V4, 0x0a00_0000, 0x0a00_00ff).unwrap();
        let result = progress_of(&range, (1 << 32) | 0x0a00_0001);
        assert_eq!(
            result,
            Err(RangeError::bounds("address", (1u128 << 32) | 0x0a00_0001, MAX_IPV4))
        );
    }

    #[test]
    fn test_progress_full_ipv4_space() {
        let range = NumericRange::full(Family::V4);
        let progress = progress_of(&range, MAX_IPV4).unwrap();
        assert_eq!(progress.all_ips.get(), Some(1 << 32));
        assert_eq!(progress.iteration.get(), Some(1 << 32));
        assert_eq!(progress.completion_percentage, 100);
    }

    #[test]
    fn test_progress_full_ipv6_space() {
        let range = NumericRange::full(Family::V6);

        let first = progress_of(&range, 0).unwrap();
        assert_eq!(first.all_ips.get(), None);
        assert_eq!(first.completion_percentage, 0);

        let middle = progress_of(&range, (1 << 127) - 1).unwrap();
        assert_eq!(middle.iteration.get(), Some(1 << 127));
        assert_eq!(middle.completion_percentage, 50);

        // exactly 12.5% rounds up, one address earlier rounds down
        let tie = progress_of(&range, (1 << 125) - 1).unwrap();
        assert_eq!(tie.completion_percentage, 13);
        let below = progress_of(&range, (1 << 125) - 2).unwrap();
        assert_eq!(below.completion_percentage, 12);

        let last = progress_of(&range, u128::MAX).unwrap();
        assert_eq!(last.iteration.get(), None);
        assert_eq!(last.completion_percentage, 100);
    }

    #[test]
    fn test_wide_and_narrow_paths_agree() {
        let span = (u128::MAX >> 8) - 1;
        for offset in [0, span / 3, span / 2, span / 200, span - 1, span] {
            assert_eq!(
                completion_percentage(offset, span),
                wide_completion_percentage(offset, span),
                "offset {offset}"
            );
        }
    }

    #[test]
    fn test_widened_count() {
        assert_eq!(widened_count(0, 200), (0, 200));
        assert_eq!(widened_count(u128::MAX, 1), (1, 0));
        assert_eq!(widened_count(u128::MAX, 2), (2, 0));
        assert_eq!(widened_count(u64::MAX.into(), 2), (0, 1 << 65));
    }
}
