//! WebAssembly bindings for access log post-processing.
//!
//! Each exported function accepts plain strings (via wasm-bindgen) and
//! returns either a transformed string or a JSON string with the batch
//! results. These are thin wrappers over the same library code used by the
//! CLI subcommands.

use wasm_bindgen::prelude::*;

use crate::accesslog::batch::{split_clf, split_squid};
use crate::accesslog::encoding::{percent_decode, percent_encode};
use crate::accesslog::xff::extract_origin;

fn to_json<T: serde::Serialize>(val: &T) -> Result<String, JsValue> {
    serde_json::to_string(val).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Split newline-delimited entries into batch input; a literal `-` line is
/// an absent entry, matching the CLI convention.
fn lines_to_entries(text: &str) -> Vec<Option<String>> {
    text.lines()
        .map(|l| {
            if l == "-" {
                None
            } else {
                Some(l.to_string())
            }
        })
        .collect()
}

/// Percent-decodes a URL.
///
/// `+` becomes a space and `%XY` sequences decode to bytes; malformed
/// sequences pass through literally instead of failing, so this never
/// throws on messy log data.
#[wasm_bindgen]
pub fn decode_url(url: &str) -> String {
    percent_decode(url)
}

/// Percent-encodes a URL, leaving any `scheme://` prefix untouched.
#[wasm_bindgen]
pub fn encode_url(url: &str) -> String {
    percent_encode(url)
}

/// Extracts the best-guess client origin from an `X-Forwarded-For` header.
///
/// Tokens in the RFC documentation ranges are skipped; a single-token
/// header is returned as-is. See the CLI `ips` subcommand for the batch
/// version of this heuristic.
#[wasm_bindgen]
pub fn xff_origin(header: &str) -> String {
    extract_origin(header)
}

/// Splits newline-delimited CLF request lines into columns, as JSON.
///
/// Returns a JSON string with fields `method`, `asset`, and `protocol`,
/// each an array of strings with `null` marking missing fields. A literal
/// `-` input line is treated as an absent entry and is `null` in all three
/// arrays.
#[wasm_bindgen]
pub fn parse_clf(text: &str) -> Result<String, JsValue> {
    let cols = split_clf(&lines_to_entries(text));
    to_json(&cols)
}

/// Splits newline-delimited Squid `code/status` fields into columns, as JSON.
///
/// Returns a JSON string with fields `squid_code` and `http_status`, each
/// an array of strings with `null` marking missing fields.
#[wasm_bindgen]
pub fn parse_squid(text: &str) -> Result<String, JsValue> {
    let cols = split_squid(&lines_to_entries(text));
    to_json(&cols)
}
