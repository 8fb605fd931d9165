use crate::domain::model::Matrix;

/// Render `matrix` in the same ASCII-art layout the parser reads.
///
/// Cells are right-aligned to the widest value. The empty matrix renders as
/// an empty string.
pub fn render_matrix(matrix: &Matrix) -> String {
    if matrix.is_empty() {
        return String::new();
    }

    let width = matrix
        .rows()
        .iter()
        .flatten()
        .map(|value| value.to_string().len())
        .max()
        .unwrap_or(1);

    let border = format!(
        "+{}\n",
        format!("{}+", "-".repeat(width + 2)).repeat(matrix.side())
    );

    let mut out = border.clone();
    for row in matrix.rows() {
        out.push('|');
        for value in row {
            out.push_str(&format!(" {:>width$} |", value, width = width));
        }
        out.push('\n');
        out.push_str(&border);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parser::parse_matrix;

    #[test]
    fn test_render_layout() {
        let matrix = Matrix::new(vec![vec![1, -20], vec![300, 4]]).unwrap();
        let expected = "\
+-----+-----+
|   1 | -20 |
+-----+-----+
| 300 |   4 |
+-----+-----+
";
        assert_eq!(render_matrix(&matrix), expected);
    }

    #[test]
    fn test_render_then_parse_gives_same_matrix() {
        for side in 0..6i64 {
            let rows: Vec<Vec<i64>> = (0..side)
                .map(|r| (0..side).map(|c| (r - c) * 37).collect())
                .collect();
            let matrix = Matrix::new(rows).unwrap();
            assert_eq!(parse_matrix(&render_matrix(&matrix)), matrix);
        }
    }
}
