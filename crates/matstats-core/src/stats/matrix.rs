//! Row-of-rows matrix values.
//!
//! No invariant is enforced that rows are equal length or that the matrix is
//! square; ragged input passes shape validation and flows through the
//! diagonal predicate positionally.

use serde_json::Value;

/// A matrix as received from the request body: ordered rows of numbers.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: Vec<Vec<f64>>,
}

impl Matrix {
    /// Build a matrix from already-validated rows.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Self {
        Self { rows }
    }

    /// Shape-check a raw JSON value: array of arrays of numbers.
    ///
    /// Returns `None` for anything else (string, flat array, non-numeric
    /// cell). Empty outer or inner arrays are accepted.
    pub fn from_value(value: &Value) -> Option<Self> {
        let raw_rows = value.as_array()?;
        let mut rows = Vec::with_capacity(raw_rows.len());
        for raw_row in raw_rows {
            let cells = raw_row.as_array()?;
            let mut row = Vec::with_capacity(cells.len());
            for cell in cells {
                row.push(cell.as_f64()?);
            }
            rows.push(row);
        }
        Some(Self { rows })
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// All elements in row-major order.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().flatten().copied()
    }

    /// Diagonal predicate: every element must satisfy `i == j || value == 0`,
    /// where `j` is the element's position within its own row.
    ///
    /// The comparison is positional. Ragged rows are not reconciled against a
    /// column count, so `[[1], [0, 2]]` counts as diagonal. An empty matrix
    /// is vacuously diagonal.
    pub fn is_diagonal(&self) -> bool {
        self.rows.iter().enumerate().all(|(i, row)| {
            row.iter()
                .enumerate()
                .all(|(j, &value)| i == j || value == 0.0)
        })
    }
}
