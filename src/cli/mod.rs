//! CLI subcommand implementations for the `wlog` binary.
//!
//! The `wlog` binary provides five subcommands for post-processing access
//! log fields. CLI argument parsing uses clap derive macros, with the
//! top-level [`app::Cli`] struct and [`app::Commands`] enum defined in
//! [`app`] and shared between `main.rs` and `build.rs` (for man page
//! generation) via `include!()`.
//!
//! Each subcommand module follows the same pattern: an `Options` struct
//! holding the parsed arguments and a `pub fn execute(opts, writer) ->
//! Result<(), WeblogError>` entry point. The `writer: &mut dyn Write`
//! parameter allows output to be captured in tests or redirected to a file
//! via the global `--output` flag.
//!
//! # Subcommands
//!
//! | Command | Module | Purpose |
//! |---------|--------|---------|
//! | `wlog clf` | [`clf`] | Split request lines into `method`/`asset`/`protocol` columns |
//! | `wlog squid` | [`squid`] | Split `code/status` fields into `squid_code`/`http_status` columns |
//! | `wlog decode` | [`decode`] | Percent-decode URLs line by line |
//! | `wlog encode` | [`encode`] | Percent-encode URLs, scheme prefix untouched |
//! | `wlog ips` | [`ips`] | Merge IPs with paired X-Forwarded-For headers |
//!
//! # Common patterns
//!
//! - **`--json`** — Structured output via `#[derive(Serialize)]` column
//!   structs and `serde_json`; missing fields render as `null`.
//! - **`--csv`** — Comma-separated output with a header row (`clf`, `squid`).
//! - **`--na`** — Placeholder string for missing fields in text/CSV output.
//! - **`--color`** (global) — Control colored terminal output.
//! - **`--output` / `-o`** (global) — Redirect output to a file.
//! - **`--threads`** (global) — Shard large batches across a rayon pool.
//!
//! A literal `-` input line in `clf`/`squid` input marks an absent entry and
//! propagates as missing through every output column. Progress bars (via
//! [`indicatif`]) appear for batches past [`PROGRESS_THRESHOLD`] rows, and
//! Ctrl+C cancels an in-flight `clf`/`squid` batch without emitting partial
//! columns. The `wprintln!` and `wprint!` macros wrap `writeln!`/`write!`
//! to convert `io::Error` into `WeblogError`.

pub mod app;
pub mod clf;
pub mod decode;
pub mod encode;
pub mod ips;
pub mod squid;

/// Write a line to the given writer, converting io::Error to WeblogError.
macro_rules! wprintln {
    ($w:expr) => {
        writeln!($w).map_err(|e| $crate::WeblogError::Io(e.to_string()))
    };
    ($w:expr, $($arg:tt)*) => {
        writeln!($w, $($arg)*).map_err(|e| $crate::WeblogError::Io(e.to_string()))
    };
}

/// Write (without newline) to the given writer, converting io::Error to WeblogError.
macro_rules! wprint {
    ($w:expr, $($arg:tt)*) => {
        write!($w, $($arg)*).map_err(|e| $crate::WeblogError::Io(e.to_string()))
    };
}

pub(crate) use wprint;
pub(crate) use wprintln;

use indicatif::{ProgressBar, ProgressStyle};

/// Row count above which batch subcommands display a progress bar.
pub const PROGRESS_THRESHOLD: usize = 50_000;

/// Rows handed to each worker when `--threads` shards a batch.
pub(crate) const BATCH_CHUNK: usize = 65_536;

/// Create a styled progress bar for iterating over rows.
pub(crate) fn create_progress_bar(count: u64, unit: &str) -> ProgressBar {
    let pb = ProgressBar::new(count);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(&format!(
                "{{spinner:.green}} [{{bar:40.cyan/blue}}] {{pos}}/{{len}} {} ({{eta}})",
                unit
            ))
            .unwrap()
            .progress_chars("#>-"),
    );
    pb
}

/// Convert input lines to batch entries: a literal `-` line is an absent
/// entry, everything else (including the empty string) is present.
pub(crate) fn lines_to_entries(lines: Vec<String>) -> Vec<Option<String>> {
    lines
        .into_iter()
        .map(|l| if l == "-" { None } else { Some(l) })
        .collect()
}

/// Render an optional field for text/CSV output, substituting `na` for
/// missing values.
pub(crate) fn field_or_na<'a>(field: &'a Option<String>, na: &'a str) -> &'a str {
    field.as_deref().unwrap_or(na)
}

/// Quote a value for CSV output when it contains a comma, quote, or newline.
pub(crate) fn csv_escape(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
