//! Batch parsers for CLF request lines and Squid status fields.
//!
//! Both parsers apply [`split_fixed`](crate::accesslog::split::split_fixed)
//! across a batch of optional entries and assemble named columns. A missing
//! input entry (`None`) propagates as `None` into every output column for
//! that row; a present but malformed entry goes through the splitter's
//! padding/truncation rules instead of being rejected.
//!
//! Long batches can be interrupted through a [`CancelFlag`]: the
//! `*_cancellable` variants check the flag every [`CANCEL_CHECK_INTERVAL`]
//! rows and drop their partially built columns when it trips.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde::Serialize;

use crate::accesslog::split::split_fixed;
use crate::WeblogError;

/// Rows processed between two cancellation checks.
pub const CANCEL_CHECK_INTERVAL: usize = 10_000;

/// Cooperative cancellation flag shared between a batch call and the code
/// that may want to abort it (a Ctrl+C handler, another thread).
///
/// Cloning the flag shares the underlying state.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    /// Create an untripped flag.
    pub fn new() -> Self {
        CancelFlag(Arc::new(AtomicBool::new(false)))
    }

    /// Request cancellation of any batch holding a clone of this flag.
    pub fn trigger(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    /// Whether cancellation has been requested.
    pub fn is_triggered(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Columns produced from Common Log Format request lines
/// (`"GET /index.html HTTP/1.1"` → `method`, `asset`, `protocol`).
///
/// All three vectors have the same length as the input batch; `None` marks a
/// field that was missing from (or an entry entirely absent in) the input.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct RequestColumns {
    pub method: Vec<Option<String>>,
    pub asset: Vec<Option<String>>,
    pub protocol: Vec<Option<String>>,
}

/// Columns produced from Squid `code/status` fields
/// (`"TCP_MISS/200"` → `squid_code`, `http_status`).
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct StatusColumns {
    pub squid_code: Vec<Option<String>>,
    pub http_status: Vec<Option<String>>,
}

/// Split CLF request lines into `method`, `asset`, and `protocol` columns.
///
/// # Examples
///
/// ```
/// use weblog::accesslog::batch::split_clf;
///
/// let entries = vec![
///     Some("GET /robots.txt HTTP/1.0".to_string()),
///     Some("PURGE".to_string()),
///     None,
/// ];
/// let cols = split_clf(&entries);
/// assert_eq!(cols.asset[0].as_deref(), Some("/robots.txt"));
/// assert_eq!(cols.asset[1], None);      // short entry: field missing
/// assert_eq!(cols.method[2], None);     // absent entry: all fields missing
/// ```
pub fn split_clf(entries: &[Option<String>]) -> RequestColumns {
    clf_batch(entries, None).unwrap_or_default()
}

/// [`split_clf`] with cooperative cancellation.
///
/// Returns [`WeblogError::Cancelled`] if `cancel` trips; partial columns are
/// discarded, never returned.
pub fn split_clf_cancellable(
    entries: &[Option<String>],
    cancel: &CancelFlag,
) -> Result<RequestColumns, WeblogError> {
    clf_batch(entries, Some(cancel)).ok_or(WeblogError::Cancelled)
}

/// Split Squid `code/status` fields into `squid_code` and `http_status`
/// columns.
///
/// # Examples
///
/// ```
/// use weblog::accesslog::batch::split_squid;
///
/// let entries = vec![Some("TCP_MISS/200".to_string()), Some("NONE".to_string())];
/// let cols = split_squid(&entries);
/// assert_eq!(cols.squid_code[0].as_deref(), Some("TCP_MISS"));
/// assert_eq!(cols.http_status[0].as_deref(), Some("200"));
/// assert_eq!(cols.http_status[1], None);
/// ```
pub fn split_squid(entries: &[Option<String>]) -> StatusColumns {
    squid_batch(entries, None).unwrap_or_default()
}

/// [`split_squid`] with cooperative cancellation.
pub fn split_squid_cancellable(
    entries: &[Option<String>],
    cancel: &CancelFlag,
) -> Result<StatusColumns, WeblogError> {
    squid_batch(entries, Some(cancel)).ok_or(WeblogError::Cancelled)
}

// Returns None only when the cancel flag trips mid-batch.
fn clf_batch(entries: &[Option<String>], cancel: Option<&CancelFlag>) -> Option<RequestColumns> {
    let mut cols = RequestColumns {
        method: Vec::with_capacity(entries.len()),
        asset: Vec::with_capacity(entries.len()),
        protocol: Vec::with_capacity(entries.len()),
    };

    for (i, entry) in entries.iter().enumerate() {
        if check_cancelled(i, cancel) {
            return None;
        }
        match entry {
            None => {
                cols.method.push(None);
                cols.asset.push(None);
                cols.protocol.push(None);
            }
            Some(line) => {
                let mut fields = split_fixed(line, " ", 2).into_iter();
                cols.method.push(fields.next().flatten());
                cols.asset.push(fields.next().flatten());
                cols.protocol.push(fields.next().flatten());
            }
        }
    }

    Some(cols)
}

fn squid_batch(entries: &[Option<String>], cancel: Option<&CancelFlag>) -> Option<StatusColumns> {
    let mut cols = StatusColumns {
        squid_code: Vec::with_capacity(entries.len()),
        http_status: Vec::with_capacity(entries.len()),
    };

    for (i, entry) in entries.iter().enumerate() {
        if check_cancelled(i, cancel) {
            return None;
        }
        match entry {
            None => {
                cols.squid_code.push(None);
                cols.http_status.push(None);
            }
            Some(field) => {
                let mut fields = split_fixed(field, "/", 1).into_iter();
                cols.squid_code.push(fields.next().flatten());
                cols.http_status.push(fields.next().flatten());
            }
        }
    }

    Some(cols)
}

fn check_cancelled(row: usize, cancel: Option<&CancelFlag>) -> bool {
    match cancel {
        Some(flag) if row % CANCEL_CHECK_INTERVAL == 0 => flag.is_triggered(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(lines: &[&str]) -> Vec<Option<String>> {
        lines.iter().map(|l| Some(l.to_string())).collect()
    }

    #[test]
    fn test_clf_well_formed() {
        let cols = split_clf(&entries(&[
            "GET /index.html HTTP/1.1",
            "POST /api/v1/data HTTP/1.0",
        ]));
        assert_eq!(cols.method[0].as_deref(), Some("GET"));
        assert_eq!(cols.asset[1].as_deref(), Some("/api/v1/data"));
        assert_eq!(cols.protocol[1].as_deref(), Some("HTTP/1.0"));
    }

    #[test]
    fn test_clf_column_lengths_match_input() {
        let input = entries(&["GET / HTTP/1.1", "x", ""]);
        let cols = split_clf(&input);
        assert_eq!(cols.method.len(), input.len());
        assert_eq!(cols.asset.len(), input.len());
        assert_eq!(cols.protocol.len(), input.len());
    }

    #[test]
    fn test_clf_missing_entry_propagates() {
        let cols = split_clf(&[None, Some("GET / HTTP/1.1".to_string())]);
        assert_eq!(cols.method[0], None);
        assert_eq!(cols.asset[0], None);
        assert_eq!(cols.protocol[0], None);
        assert_eq!(cols.method[1].as_deref(), Some("GET"));
    }

    #[test]
    fn test_clf_short_entry_pads() {
        let cols = split_clf(&entries(&["GET /favicon.ico"]));
        assert_eq!(cols.method[0].as_deref(), Some("GET"));
        assert_eq!(cols.asset[0].as_deref(), Some("/favicon.ico"));
        assert_eq!(cols.protocol[0], None);
    }

    #[test]
    fn test_clf_overlong_entry_merges_tail_into_protocol() {
        let cols = split_clf(&entries(&["GET /a b c HTTP/1.1"]));
        assert_eq!(cols.asset[0].as_deref(), Some("/a"));
        assert_eq!(cols.protocol[0].as_deref(), Some("b c HTTP/1.1"));
    }

    #[test]
    fn test_squid_pairs() {
        let cols = split_squid(&entries(&["TCP_HIT/200", "TCP_DENIED/403", "NONE"]));
        assert_eq!(cols.squid_code[0].as_deref(), Some("TCP_HIT"));
        assert_eq!(cols.http_status[1].as_deref(), Some("403"));
        assert_eq!(cols.squid_code[2].as_deref(), Some("NONE"));
        assert_eq!(cols.http_status[2], None);
    }

    #[test]
    fn test_squid_missing_entry() {
        let cols = split_squid(&[None]);
        assert_eq!(cols.squid_code[0], None);
        assert_eq!(cols.http_status[0], None);
    }

    #[test]
    fn test_empty_batch() {
        let cols = split_clf(&[]);
        assert!(cols.method.is_empty());
        let cols = split_squid(&[]);
        assert!(cols.squid_code.is_empty());
    }

    #[test]
    fn test_pretripped_flag_cancels_immediately() {
        let flag = CancelFlag::new();
        flag.trigger();
        let input = entries(&["GET / HTTP/1.1"]);
        assert!(matches!(
            split_clf_cancellable(&input, &flag),
            Err(WeblogError::Cancelled)
        ));
        assert!(matches!(
            split_squid_cancellable(&entries(&["TCP_HIT/200"]), &flag),
            Err(WeblogError::Cancelled)
        ));
    }

    #[test]
    fn test_untripped_flag_completes() {
        let flag = CancelFlag::new();
        let input = entries(&["GET / HTTP/1.1"]);
        let cols = split_clf_cancellable(&input, &flag).unwrap();
        assert_eq!(cols.method[0].as_deref(), Some("GET"));
    }

    #[test]
    fn test_flag_shared_across_clones() {
        let flag = CancelFlag::new();
        let clone = flag.clone();
        clone.trigger();
        assert!(flag.is_triggered());
    }
}
