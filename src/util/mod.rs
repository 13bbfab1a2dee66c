//! Shared utilities (newline-delimited input reading for the CLI).

#[cfg(feature = "cli")]
pub mod lines;
