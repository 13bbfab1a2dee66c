//! Integration tests for batch CLF/Squid parsing.
//!
//! These tests run realistic access-log batches through the public batch
//! API and check the column contracts: equal lengths, missing propagation,
//! padding/truncation of malformed entries, and cancellation.

use weblog::accesslog::batch::{
    split_clf, split_clf_cancellable, split_squid, split_squid_cancellable, CancelFlag,
    CANCEL_CHECK_INTERVAL,
};
use weblog::WeblogError;

fn entries(lines: &[&str]) -> Vec<Option<String>> {
    lines.iter().map(|l| Some(l.to_string())).collect()
}

#[test]
fn clf_batch_of_real_request_lines() {
    let cols = split_clf(&entries(&[
        "GET /index.html HTTP/1.1",
        "POST /login HTTP/1.1",
        "HEAD /healthz HTTP/1.0",
    ]));

    assert_eq!(
        cols.method,
        vec![
            Some("GET".to_string()),
            Some("POST".to_string()),
            Some("HEAD".to_string())
        ]
    );
    assert_eq!(cols.asset[0].as_deref(), Some("/index.html"));
    assert_eq!(cols.protocol[2].as_deref(), Some("HTTP/1.0"));
}

#[test]
fn clf_mixed_quality_batch_keeps_row_alignment() {
    let input = vec![
        Some("GET /a HTTP/1.1".to_string()),
        None,
        Some("BADLINE".to_string()),
        Some("GET /spaced asset name HTTP/1.1".to_string()),
        Some(String::new()),
    ];
    let cols = split_clf(&input);

    assert_eq!(cols.method.len(), input.len());
    assert_eq!(cols.asset.len(), input.len());
    assert_eq!(cols.protocol.len(), input.len());

    // Row 1: absent input is absent in every column
    assert_eq!(
        (&cols.method[1], &cols.asset[1], &cols.protocol[1]),
        (&None, &None, &None)
    );

    // Row 2: single field fills method only
    assert_eq!(cols.method[2].as_deref(), Some("BADLINE"));
    assert_eq!(cols.asset[2], None);

    // Row 3: extra fields merge into the final column
    assert_eq!(cols.asset[3].as_deref(), Some("/spaced"));
    assert_eq!(cols.protocol[3].as_deref(), Some("asset name HTTP/1.1"));

    // Row 4: empty string is a present (empty) method, not a missing one
    assert_eq!(cols.method[4].as_deref(), Some(""));
    assert_eq!(cols.asset[4], None);
}

#[test]
fn squid_batch_splits_code_and_status() {
    let cols = split_squid(&entries(&[
        "TCP_MISS/200",
        "TCP_DENIED/403",
        "UDP_HIT/000",
        "NONE",
    ]));

    assert_eq!(cols.squid_code[0].as_deref(), Some("TCP_MISS"));
    assert_eq!(cols.http_status[0].as_deref(), Some("200"));
    assert_eq!(cols.http_status[2].as_deref(), Some("000"));
    assert_eq!(cols.squid_code[3].as_deref(), Some("NONE"));
    assert_eq!(cols.http_status[3], None);
}

#[test]
fn squid_extra_slashes_stay_in_status() {
    let cols = split_squid(&entries(&["TCP_MISS/200/extra"]));
    assert_eq!(cols.squid_code[0].as_deref(), Some("TCP_MISS"));
    assert_eq!(cols.http_status[0].as_deref(), Some("200/extra"));
}

#[test]
fn cancellation_before_first_row_discards_everything() {
    let flag = CancelFlag::new();
    flag.trigger();

    let input = entries(&["GET / HTTP/1.1", "GET /b HTTP/1.1"]);
    let result = split_clf_cancellable(&input, &flag);
    assert!(matches!(result, Err(WeblogError::Cancelled)));

    let result = split_squid_cancellable(&entries(&["TCP_HIT/200"]), &flag);
    assert!(matches!(result, Err(WeblogError::Cancelled)));
}

#[test]
fn cancellation_flag_untripped_is_equivalent_to_plain_call() {
    let flag = CancelFlag::new();
    let input = entries(&["GET /x HTTP/1.1", "TRACE"]);

    let plain = split_clf(&input);
    let checked = split_clf_cancellable(&input, &flag).unwrap();
    assert_eq!(plain, checked);
}

#[test]
fn large_batch_completes_across_check_intervals() {
    // Spans several cancellation checkpoints without a tripped flag
    let n = CANCEL_CHECK_INTERVAL * 2 + 17;
    let input: Vec<Option<String>> = (0..n).map(|i| Some(format!("GET /{} HTTP/1.1", i))).collect();

    let flag = CancelFlag::new();
    let cols = split_clf_cancellable(&input, &flag).unwrap();
    assert_eq!(cols.method.len(), n);
    assert_eq!(cols.asset[n - 1].as_deref(), Some(format!("/{}", n - 1).as_str()));
}
