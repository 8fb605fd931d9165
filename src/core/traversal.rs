//! Counter-clockwise spiral traversal.
//!
//! The order is defined by "rotate the matrix 90° clockwise, emit the first row
//! reversed, repeat on what is left". Instead of materialising rotated copies,
//! the remaining sub-matrix is tracked as a window over the input and one
//! edge is peeled per step: left column downward, bottom row rightward, right
//! column upward, top row leftward. Each of those is exactly the reversed first
//! row of the rotated remainder.

use crate::domain::model::Matrix;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Edge {
    Left,
    Bottom,
    Right,
    Top,
}

impl Edge {
    fn next(self) -> Self {
        match self {
            Edge::Left => Edge::Bottom,
            Edge::Bottom => Edge::Right,
            Edge::Right => Edge::Top,
            Edge::Top => Edge::Left,
        }
    }
}

/// Half-open bounds `[top, bottom) x [left, right)` of the part not yet emitted.
#[derive(Debug, Clone, Copy)]
struct Window {
    top: usize,
    bottom: usize,
    left: usize,
    right: usize,
}

impl Window {
    fn over(rows: &[Vec<i64>]) -> Self {
        Self {
            top: 0,
            bottom: rows.len(),
            left: 0,
            right: rows.first().map_or(0, Vec::len),
        }
    }

    fn is_exhausted(&self) -> bool {
        self.top >= self.bottom || self.left >= self.right
    }

    fn peel(&mut self, edge: Edge, rows: &[Vec<i64>], out: &mut Vec<i64>) {
        match edge {
            Edge::Left => {
                out.extend((self.top..self.bottom).map(|r| rows[r][self.left]));
                self.left += 1;
            }
            Edge::Bottom => {
                let row = &rows[self.bottom - 1];
                out.extend_from_slice(&row[self.left..self.right]);
                self.bottom -= 1;
            }
            Edge::Right => {
                out.extend((self.top..self.bottom).rev().map(|r| rows[r][self.right - 1]));
                self.right -= 1;
            }
            Edge::Top => {
                let row = &rows[self.top];
                out.extend(row[self.left..self.right].iter().rev());
                self.top += 1;
            }
        }
    }
}

/// Traverse `matrix` and return a fresh vector with every value exactly once.
pub fn traverse(matrix: &Matrix) -> Vec<i64> {
    let mut out = Vec::with_capacity(matrix.side() * matrix.side());
    traverse_into(matrix, &mut out);
    out
}

/// Append the traversal of `matrix` to `out`.
///
/// Whatever `out` already holds is left in front of the new values.
pub fn traverse_into(matrix: &Matrix, out: &mut Vec<i64>) {
    traverse_rows_into(matrix.rows(), out);
}

pub(crate) fn traverse_rows_into(rows: &[Vec<i64>], out: &mut Vec<i64>) {
    let mut window = Window::over(rows);
    let mut edge = Edge::Left;

    while !window.is_exhausted() {
        window.peel(edge, rows, out);
        edge = edge.next();
    }
}
