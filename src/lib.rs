//! Access log post-processing toolkit.
//!
//! The `weblog-utils` crate (library name `weblog`) provides vectorised
//! parsing utilities for web server access logs: splitting Common Log Format
//! request lines and Squid `code/status` fields into named columns,
//! percent-decoding and encoding URLs, and normalising client IP addresses
//! through `X-Forwarded-For` headers.
//!
//! # CLI Reference
//!
//! Install the `wlog` binary and use its subcommands to post-process
//! newline-delimited log fields from the command line.
//!
//! ## Installation
//!
//! ```text
//! cargo install weblog-utils          # crates.io
//! brew install ringo380/tap/wlog      # Homebrew (macOS/Linux)
//! ```
//!
//! ## Subcommands
//!
//! | Command | Purpose |
//! |---------|---------|
//! | [`wlog clf`](cli::app::Commands::Clf) | Split CLF request lines into `method`, `asset`, `protocol` columns |
//! | [`wlog squid`](cli::app::Commands::Squid) | Split Squid `code/status` fields into `squid_code`, `http_status` columns |
//! | [`wlog decode`](cli::app::Commands::Decode) | Percent-decode URLs line by line |
//! | [`wlog encode`](cli::app::Commands::Encode) | Percent-encode URLs, leaving any `scheme://` prefix untouched |
//! | [`wlog ips`](cli::app::Commands::Ips) | Replace IPs with the best-guess origin from paired XFF headers |
//!
//! ## Global options
//!
//! All subcommands accept `--color <auto|always|never>` and `--output <file>`.
//! `--threads` shards large batches across a rayon thread pool, and most
//! subcommands accept `--json` for machine-readable output. Input paths of
//! `-` read from stdin. `clf` and `squid` honor Ctrl+C between rows: an
//! interrupted batch exits non-zero without emitting partial columns.
//!
//! See the [`cli`] module for full details.
//!
//! # Library API
//!
//! Add `weblog` as a dependency to use the parsing library directly:
//!
//! ```toml
//! [dependencies]
//! weblog = { package = "weblog-utils", version = "1" }
//! ```
//!
//! ## Quick example
//!
//! ```
//! use weblog::accesslog::batch::split_clf;
//! use weblog::accesslog::xff::extract_origin;
//!
//! let requests = vec![Some("GET /index.html HTTP/1.1".to_string()), None];
//! let cols = split_clf(&requests);
//! assert_eq!(cols.method[0].as_deref(), Some("GET"));
//! assert_eq!(cols.asset[1], None);
//!
//! assert_eq!(extract_origin("192.0.2.5, 8.8.8.8"), "8.8.8.8");
//! ```
//!
//! ## Key entry points
//!
//! | Type / Function | Purpose |
//! |-----------------|---------|
//! | [`split_clf`](accesslog::batch::split_clf) | Batch CLF request-line splitting into [`RequestColumns`](accesslog::batch::RequestColumns) |
//! | [`split_squid`](accesslog::batch::split_squid) | Batch Squid field splitting into [`StatusColumns`](accesslog::batch::StatusColumns) |
//! | [`reconstruct`](accesslog::table::reconstruct) | Rebuild a rectangular [`Table`](accesslog::table::Table) from tokenized rows |
//! | [`percent_decode`](accesslog::encoding::percent_decode) | Lossy-tolerant percent decoding of a single string |
//! | [`normalise_ips`](accesslog::xff::normalise_ips) | Merge IP and `X-Forwarded-For` vectors into origin IPs |
//! | [`CancelFlag`](accesslog::batch::CancelFlag) | Cooperative cancellation for long batches |
//!
//! ## Module overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`accesslog::split`] | Bounded field splitting with missing-slot padding |
//! | [`accesslog::batch`] | Batch parsers for CLF and Squid formats, cancellation |
//! | [`accesslog::table`] | Column-major table reconstruction from token rows |
//! | [`accesslog::encoding`] | Hex digit and percent codec, batch URL decode/encode |
//! | [`accesslog::xff`] | XFF tokenizing, reserved-range classification, IP normalisation |
//!
//! ## Feature flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli` | on | Builds the `wlog` binary and its clap/colored/indicatif/ctrlc/rayon stack. |

pub mod accesslog;
#[cfg(feature = "cli")]
pub mod cli;
pub mod util;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

use thiserror::Error;

/// Errors returned by `weblog` operations.
#[derive(Error, Debug)]
pub enum WeblogError {
    /// An I/O error occurred (file open, read, or write failure).
    #[error("I/O error: {0}")]
    Io(String),

    /// Two paired input vectors differ in length (IPs vs X-Forwarded-For).
    #[error("Input length mismatch: {0}")]
    LengthMismatch(String),

    /// An invalid argument was supplied (bad option, conflicting flags, etc.).
    #[error("Invalid argument: {0}")]
    Argument(String),

    /// A batch was cancelled through its [`CancelFlag`](accesslog::batch::CancelFlag);
    /// partial output has been discarded.
    #[error("Operation cancelled")]
    Cancelled,
}
