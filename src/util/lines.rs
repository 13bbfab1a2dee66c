//! Newline-delimited input reading.
//!
//! Provides [`read_lines`] to load one-field-per-line input for the CLI
//! subcommands, from a file path or from stdin when the path is `-`.

use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::WeblogError;

/// Read all lines from `path`, or from stdin when `path` is `-`.
///
/// Trailing `\r` is stripped so Windows-edited logs behave like Unix ones.
/// Line order is preserved; empty lines are kept (an empty field is data).
pub fn read_lines(path: &str) -> Result<Vec<String>, WeblogError> {
    if path == "-" {
        let stdin = std::io::stdin();
        return collect_lines(stdin.lock(), "stdin");
    }

    let file = std::fs::File::open(Path::new(path))
        .map_err(|e| WeblogError::Io(format!("Cannot open {}: {}", path, e)))?;
    collect_lines(BufReader::new(file), path)
}

fn collect_lines<R: BufRead>(reader: R, source: &str) -> Result<Vec<String>, WeblogError> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let mut line =
            line.map_err(|e| WeblogError::Io(format!("Cannot read from {}: {}", source, e)))?;
        if line.ends_with('\r') {
            line.pop();
        }
        lines.push(line);
    }
    Ok(lines)
}
