//! Integration tests for X-Forwarded-For normalisation.

use weblog::accesslog::xff::{extract_origin, ipv4_to_numeric, is_real_ip, normalise_ips, tokenise};
use weblog::WeblogError;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn origin_skips_reserved_ipv4_hop() {
    assert_eq!(extract_origin("192.0.2.5, 8.8.8.8"), "8.8.8.8");
}

#[test]
fn origin_single_token_returned_even_when_reserved() {
    assert_eq!(extract_origin("192.0.2.5"), "192.0.2.5");
    assert_eq!(extract_origin("2001:0db8::1"), "2001:0db8::1");
}

#[test]
fn origin_skips_reserved_ipv6_hop() {
    assert_eq!(
        extract_origin("2001:0db8:abcd::1, 2001:4860::1"),
        "2001:4860::1"
    );
}

#[test]
fn origin_uppercase_header_is_matched_through_lowercasing() {
    // tokenise lower-cases before classification, so an upper-case reserved
    // address in a multi-token header is still skipped
    assert_eq!(extract_origin("2001:0DB8::1, 9.9.9.9"), "9.9.9.9");
}

#[test]
fn origin_all_reserved_falls_back_to_first() {
    assert_eq!(
        extract_origin("198.51.100.7, 203.0.113.9, 192.0.2.1"),
        "198.51.100.7"
    );
}

#[test]
fn origin_of_messy_header_with_spaces_and_empty_pieces() {
    assert_eq!(extract_origin(" 192.0.2.5 ,, 1.2.3.4 "), "1.2.3.4");
}

#[test]
fn tokenise_and_classify_work_together() {
    let tokens = tokenise("Unknown, 192.0.2.10, 172.16.0.9");
    assert_eq!(tokens, ["unknown", "192.0.2.10", "172.16.0.9"]);
    let real: Vec<&String> = tokens.iter().filter(|t| is_real_ip(t)).collect();
    assert_eq!(real, [&"172.16.0.9".to_string()]);
}

#[test]
fn numeric_conversion_of_known_addresses() {
    let octets = |a: &str, b: &str, c: &str, d: &str| {
        [a.to_string(), b.to_string(), c.to_string(), d.to_string()]
    };
    assert_eq!(ipv4_to_numeric(&octets("192", "168", "1", "1")), 3_232_235_777);
    assert_eq!(ipv4_to_numeric(&octets("8", "8", "8", "8")), 134_744_072);
    assert_eq!(ipv4_to_numeric(&octets("a", "1", "1", "1")), 0);
}

#[test]
fn normalise_full_pipeline() {
    let ips = strings(&["10.0.0.1", "10.0.0.2", "10.0.0.3", "10.0.0.4"]);
    let xffs = strings(&[
        "-",
        "",
        "192.0.2.4, 8.8.4.4",
        "203.0.113.77",
    ]);

    let out = normalise_ips(&ips, &xffs).unwrap();
    assert_eq!(out[0], "10.0.0.1"); // "-" sentinel keeps the IP
    assert_eq!(out[1], "10.0.0.2"); // empty sentinel keeps the IP
    assert_eq!(out[2], "8.8.4.4"); // reserved hop skipped
    assert_eq!(out[3], "203.0.113.77"); // single token returned unconditionally
}

#[test]
fn normalise_rejects_mismatched_lengths_without_partial_output() {
    let result = normalise_ips(&strings(&["1.1.1.1", "2.2.2.2"]), &strings(&["-"]));
    match result {
        Err(WeblogError::LengthMismatch(msg)) => {
            assert!(msg.contains('2'));
            assert!(msg.contains('1'));
        }
        other => panic!("expected LengthMismatch, got {:?}", other),
    }
}
