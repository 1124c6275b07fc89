#![cfg(test)]
use iprange_common::{Family, Ipv6Format, MAX_IPV4};
use iprange_core::{
    Entry, IterationConfig, NumericRange, RangeError, RangeSession, RangeSpec, iterate,
    progress_of, resolve,
};

fn v4(a: u8, b: u8, c: u8, d: u8) -> u128 {
    u128::from(u32::from_be_bytes([a, b, c, d]))
}

fn session(spec: &str) -> RangeSession {
    RangeSession::resolve(&spec.parse::<RangeSpec>().unwrap()).unwrap()
}

/// A /29 walks its eight addresses in order.
#[test]
fn cidr_29_walks_eight_addresses() {
    let addresses: Vec<String> = session("10.0.1.0/29").iter().map(|e| e.address).collect();

    let expected: Vec<String> = (0..8).map(|i| format!("10.0.1.{i}")).collect();
    assert_eq!(addresses, expected);
}

/// Starting late skips the earlier addresses but keeps their positions.
#[test]
fn start_with_reports_positions_of_the_whole_block() {
    let started = session("10.0.1.0/29").start_with("10.0.1.5").unwrap();
    let entries: Vec<Entry> = started.iter().collect();

    let addresses: Vec<&str> = entries.iter().map(|e| e.address.as_str()).collect();
    assert_eq!(addresses, vec!["10.0.1.5", "10.0.1.6", "10.0.1.7"]);

    assert_eq!(entries[0].progress.all_ips.get(), Some(8));
    assert_eq!(entries[0].progress.iteration.get(), Some(6));
    assert_eq!(entries[2].progress.iteration.get(), Some(8));
    assert_eq!(entries[2].progress.completion_percentage, 100);
}

#[test]
fn start_with_outside_the_block_fails() {
    let result = session("255.255.255.0/24").start_with("255.255.0.1");
    assert!(matches!(result, Err(RangeError::AddressNotInRange { .. })));

    let range = resolve(&RangeSpec::cidr("255.255.255.0/24")).unwrap();
    let result = iterate(&range, Some(v4(255, 255, 0, 1)));
    assert!(matches!(result, Err(RangeError::StartNotInRange { .. })));
}

#[test]
fn ipv6_cidr_short_and_full_forms() {
    let short: Vec<String> = session("2001:db8::/125").iter().map(|e| e.address).collect();
    assert_eq!(short.len(), 8);
    assert_eq!(short[0], "2001:db8::");
    assert_eq!(short[7], "2001:db8::7");

    let full: Vec<String> = session("2001:db8::/125")
        .with_config(IterationConfig {
            ipv6_format: Ipv6Format::Full,
        })
        .iter()
        .map(|e| e.address)
        .collect();
    assert_eq!(full.len(), 8);
    assert_eq!(full[0], "2001:0db8:0000:0000:0000:0000:0000:0000");
    assert_eq!(full[7], "2001:0db8:0000:0000:0000:0000:0000:0007");
}

#[test]
fn every_ipv4_cidr_covers_its_host_bits() {
    let base = v4(172, 16, 0, 0);
    for prefix in 12..=32u8 {
        let host_mask = MAX_IPV4 >> prefix;
        let range = resolve(&RangeSpec::cidr(format!("172.16.0.0/{prefix}"))).unwrap();
        assert_eq!(range.from(), base);
        assert_eq!(range.to(), base | host_mask);
    }

    assert!(matches!(
        resolve(&RangeSpec::cidr("172.16.0.1/31")),
        Err(RangeError::MaskMismatch { .. })
    ));
}

#[test]
fn walks_are_strictly_increasing_and_complete() {
    let range = NumericRange::new(Family::V4, v4(192, 168, 0, 250), v4(192, 168, 1, 5)).unwrap();
    let values: Vec<u128> = iterate(&range, None).unwrap().collect();

    assert_eq!(values.len(), 12);
    assert_eq!(values.first(), Some(&range.from()));
    assert_eq!(values.last(), Some(&range.to()));
    assert!(values.windows(2).all(|pair| pair[1] == pair[0] + 1));
}

#[test]
fn two_sessions_over_the_same_range_agree() {
    let first: Vec<Entry> = session("192.168.10.0/28").iter().collect();
    let second: Vec<Entry> = session("192.168.10.0/28").iter().collect();
    assert_eq!(first, second);
}

#[test]
fn full_ipv4_space_is_counted_without_overflow() {
    let range = resolve(&RangeSpec::full(Family::V4)).unwrap();
    assert_eq!(range.len().get(), Some(1 << 32));

    let progress = progress_of(&range, v4(128, 0, 0, 0)).unwrap();
    assert_eq!(progress.completion_percentage, 50);
}

#[tokio::test]
async fn async_handler_sees_every_address_in_order() {
    let session = session("10.0.0.0/30");
    let mut seen: Vec<(String, Option<u128>)> = Vec::new();

    session
        .for_each_async(|address, progress| {
            seen.push((address, progress.iteration.get()));
            async { anyhow::Ok(()) }
        })
        .await
        .unwrap();

    assert_eq!(
        seen,
        vec![
            ("10.0.0.0".to_string(), Some(1)),
            ("10.0.0.1".to_string(), Some(2)),
            ("10.0.0.2".to_string(), Some(3)),
            ("10.0.0.3".to_string(), Some(4)),
        ]
    );
}

#[tokio::test]
async fn async_handler_error_aborts_the_walk() {
    let session = session("10.0.0.0/24");
    let mut calls = 0;

    let result = session
        .for_each_async(|address, _| {
            calls += 1;
            async move {
                if address == "10.0.0.9" {
                    anyhow::bail!("stop at {address}");
                }
                Ok(())
            }
        })
        .await;

    assert_eq!(result.unwrap_err().to_string(), "stop at 10.0.0.9");
    assert_eq!(calls, 10);
}
