//! Untyped tabular query results.
//!
//! A [`Frame`] is what every warehouse backend returns: column names as the
//! engine reported them plus rows of [`Cell`]s. The frame shaper in
//! `bbs-data` renames the columns and pulls typed rows out of it.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// A single value in a result row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Null,
    Int(i64),
    Float(f64),
    Text(String),
}

impl Cell {
    pub fn is_null(&self) -> bool {
        matches!(self, Cell::Null)
    }

    /// Numeric view of the cell; integers widen to `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Int(v) => Some(*v as f64),
            Cell::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Integer view of the cell; floats are accepted only when integral.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Cell::Int(v) => Some(*v),
            Cell::Float(v) if v.fract() == 0.0 && v.is_finite() => Some(*v as i64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<i64> for Cell {
    fn from(v: i64) -> Self {
        Cell::Int(v)
    }
}

impl From<f64> for Cell {
    fn from(v: f64) -> Self {
        Cell::Float(v)
    }
}

impl From<&str> for Cell {
    fn from(v: &str) -> Self {
        Cell::Text(v.to_string())
    }
}

impl From<String> for Cell {
    fn from(v: String) -> Self {
        Cell::Text(v)
    }
}

/// Column names plus row-major cells, in the order the engine returned them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl Frame {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Read a float from `row`/`col`, failing on nulls and text.
    pub fn f64_at(&self, row: usize, col: usize) -> Result<f64> {
        self.cell(row, col)
            .and_then(Cell::as_f64)
            .ok_or_else(|| self.type_error(row, col, "number"))
    }

    /// Read an integer from `row`/`col`.
    pub fn i64_at(&self, row: usize, col: usize) -> Result<i64> {
        self.cell(row, col)
            .and_then(Cell::as_i64)
            .ok_or_else(|| self.type_error(row, col, "integer"))
    }

    /// Read text from `row`/`col`.
    pub fn str_at(&self, row: usize, col: usize) -> Result<&str> {
        self.cell(row, col)
            .and_then(Cell::as_str)
            .ok_or_else(|| self.type_error(row, col, "text"))
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    fn type_error(&self, row: usize, col: usize, expected: &'static str) -> Error {
        Error::ColumnType {
            column: self
                .columns
                .get(col)
                .cloned()
                .unwrap_or_else(|| format!("#{}", col)),
            row,
            expected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Frame {
        Frame {
            columns: vec!["name".into(), "trips".into(), "share".into()],
            rows: vec![
                vec![Cell::from("Central Park"), Cell::Int(42), Cell::Float(0.5)],
                vec![Cell::from("Union Sq"), Cell::Float(7.0), Cell::Null],
            ],
        }
    }

    #[test]
    fn typed_accessors() {
        let frame = sample();
        assert_eq!(frame.str_at(0, 0).unwrap(), "Central Park");
        assert_eq!(frame.i64_at(0, 1).unwrap(), 42);
        assert_eq!(frame.i64_at(1, 1).unwrap(), 7);
        assert!((frame.f64_at(0, 1).unwrap() - 42.0).abs() < f64::EPSILON);
        assert_eq!(frame.len(), 2);
        assert_eq!(frame.width(), 3);
    }

    #[test]
    fn null_cell_reports_column() {
        let frame = sample();
        let err = frame.f64_at(1, 2).unwrap_err();
        assert_eq!(
            err,
            Error::ColumnType {
                column: "share".into(),
                row: 1,
                expected: "number"
            }
        );
    }

    #[test]
    fn fractional_float_is_not_integer() {
        assert_eq!(Cell::Float(2.5).as_i64(), None);
        assert_eq!(Cell::Float(f64::NAN).as_i64(), None);
    }
}
