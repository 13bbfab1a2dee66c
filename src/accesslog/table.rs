//! Column-major table reconstruction from tokenized rows.
//!
//! Callers that have already cut log records into token rows (one
//! `Vec<String>` per record, field counts varying with input quality) use
//! [`reconstruct`] to rebuild a rectangular, name-addressable structure.
//! A row whose field count does not match the target column count is
//! blanked across every column — the whole row becomes empty strings rather
//! than a partially populated record. This is a different policy from the
//! per-field `None` padding in [`batch`](crate::accesslog::batch); both are
//! intentional and kept distinct.

use serde::Serialize;

/// A rectangular, column-major table addressable by column name.
///
/// Every column has the same length (one slot per input row). Built by
/// [`reconstruct`]; ready for handoff to whatever tabular container the
/// caller uses.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Table {
    names: Vec<String>,
    columns: Vec<Vec<String>>,
}

impl Table {
    /// Column names, in order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Option<&[String]> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| self.columns[i].as_slice())
    }

    /// Column count.
    pub fn width(&self) -> usize {
        self.names.len()
    }

    /// Row count.
    pub fn height(&self) -> usize {
        self.columns.first().map_or(0, Vec::len)
    }

    /// All columns in name order.
    pub fn columns(&self) -> &[Vec<String>] {
        &self.columns
    }
}

/// Rebuild a table from token rows against a target column-name list.
///
/// For column `i`, each row with exactly `names.len()` fields contributes
/// `row[i]`; every other row contributes an empty string to **all** columns.
///
/// # Examples
///
/// ```
/// use weblog::accesslog::table::reconstruct;
///
/// let rows = vec![
///     vec!["GET".to_string(), "/".to_string()],
///     vec!["bogus".to_string()],
/// ];
/// let names = vec!["method".to_string(), "asset".to_string()];
/// let table = reconstruct(&rows, &names);
///
/// assert_eq!(table.column("method").unwrap(), ["GET", ""]);
/// assert_eq!(table.column("asset").unwrap(), ["/", ""]);
/// ```
pub fn reconstruct(rows: &[Vec<String>], names: &[String]) -> Table {
    let width = names.len();
    let mut columns: Vec<Vec<String>> = Vec::with_capacity(width);

    for i in 0..width {
        let mut column = Vec::with_capacity(rows.len());
        for row in rows {
            if row.len() == width {
                column.push(row[i].clone());
            } else {
                column.push(String::new());
            }
        }
        columns.push(column);
    }

    Table {
        names: names.to_vec(),
        columns,
    }
}
