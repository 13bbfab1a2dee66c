//! Access log field parsing.
//!
//! This module contains the parsing core: a bounded field splitter with
//! missing-slot padding, batch parsers for Common Log Format request lines
//! and Squid `code/status` fields, a column-major table reconstructor,
//! a percent codec, and the `X-Forwarded-For` origin-extraction heuristic.
//!
//! Start with [`batch::split_clf`] or [`batch::split_squid`] to turn a batch
//! of raw log fields into named columns, then hand the columns to whatever
//! tabular container the caller uses.
//!
//! Two missing-value policies coexist deliberately: the batch parsers pad
//! short rows field-by-field with `None`, while [`table::reconstruct`]
//! blanks an entire malformed row with empty strings. Both match the
//! long-observed behavior of the logs this crate was built against.

pub mod batch;
pub mod encoding;
pub mod split;
pub mod table;
pub mod xff;
