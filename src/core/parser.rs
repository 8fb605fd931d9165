use crate::domain::model::Matrix;
use crate::utils::error::{MatrixError, Result};

const BORDER_MARKER: char = '+';
const CELL_SEPARATOR: char = '|';

/// Parse an ASCII-art grid, returning an empty matrix if anything is wrong.
///
/// Failures are logged as warnings. Use [`try_parse_matrix`] to get the reason.
pub fn parse_matrix(text: &str) -> Matrix {
    match try_parse_matrix(text) {
        Ok(matrix) => matrix,
        Err(e) => {
            tracing::warn!("{}", e);
            Matrix::empty()
        }
    }
}

/// Parse an ASCII-art grid such as
///
/// ```text
/// +-----+-----+
/// |  10 |  20 |
/// +-----+-----+
/// |  30 |  40 |
/// +-----+-----+
/// ```
///
/// Border lines (starting with `+`) and empty lines are skipped. On every other
/// line the first and last characters are dropped and the rest is split on `|`.
/// The collected rows must form a square.
pub fn try_parse_matrix(text: &str) -> Result<Matrix> {
    let mut rows = Vec::new();

    for (index, line) in text.lines().enumerate() {
        if line.is_empty() || line.starts_with(BORDER_MARKER) {
            continue;
        }
        rows.push(parse_row(index + 1, line)?);
    }

    tracing::debug!("Parsed {} data rows", rows.len());
    Matrix::new(rows)
}

fn parse_row(line_number: usize, line: &str) -> Result<Vec<i64>> {
    strip_delimiters(line)
        .split(CELL_SEPARATOR)
        .map(|field| {
            field
                .trim()
                .parse::<i64>()
                .map_err(|e| MatrixError::MalformedRow {
                    line: line_number,
                    reason: format!("{:?}: {}", field, e),
                })
        })
        .collect()
}

fn strip_delimiters(line: &str) -> &str {
    let mut chars = line.chars();
    chars.next();
    chars.next_back();
    chars.as_str()
}
