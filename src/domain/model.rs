use crate::utils::error::{MatrixError, Result};
use serde::{Deserialize, Serialize};

/// A square grid of integers, or the empty grid.
///
/// The only way to build a non-empty `Matrix` is [`Matrix::new`], which rejects
/// any shape where a row length differs from the row count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<i64>>", into = "Vec<Vec<i64>>")]
pub struct Matrix {
    rows: Vec<Vec<i64>>,
}

impl Matrix {
    pub fn new(rows: Vec<Vec<i64>>) -> Result<Self> {
        let side = rows.len();
        if let Some((index, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != side) {
            return Err(MatrixError::NotSquare {
                rows: side,
                row: index + 1,
                columns: row.len(),
            });
        }
        Ok(Self { rows })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of rows, which is also the number of columns.
    pub fn side(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Vec<i64>] {
        &self.rows
    }

    pub fn get(&self, row: usize, column: usize) -> Option<i64> {
        self.rows.get(row).and_then(|r| r.get(column)).copied()
    }
}

impl TryFrom<Vec<Vec<i64>>> for Matrix {
    type Error = MatrixError;

    fn try_from(rows: Vec<Vec<i64>>) -> Result<Self> {
        Self::new(rows)
    }
}

impl From<Matrix> for Vec<Vec<i64>> {
    fn from(matrix: Matrix) -> Self {
        matrix.rows
    }
}

/// The flattened spiral order of a matrix together with the side it came from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Traversal {
    pub side: usize,
    pub values: Vec<i64>,
}

impl Traversal {
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
