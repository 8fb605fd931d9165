use crate::config::OutputFormat;
use crate::core::engine::MatrixEngine;
use crate::core::render::render_matrix;
use crate::core::traversal::traverse;
use crate::domain::model::{Matrix, Traversal};
use crate::domain::ports::TextSource;
use crate::utils::error::{ErrorCategory, ErrorSeverity, MatrixError, Result};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    pub format: OutputFormat,
    pub show_grid: bool,
    pub strict: bool,
}

/// Fetch, traverse and format the grid at `location`.
///
/// Without `strict`, a failed fetch or a bad grid is logged and the output is
/// built from an empty matrix.
pub async fn run<S: TextSource>(
    engine: &MatrixEngine<S>,
    location: &str,
    options: &RunOptions,
) -> Result<String> {
    let matrix = match engine.fetch_matrix(location).await {
        Ok(matrix) => matrix,
        Err(e) if !options.strict => {
            match e.category() {
                ErrorCategory::Data => tracing::warn!("{}", e),
                _ => tracing::error!("{}", e),
            }
            Matrix::empty()
        }
        Err(e) => return Err(e),
    };

    let mut output = String::new();
    if options.show_grid {
        output.push_str(&render_matrix(&matrix));
    }

    let traversal = Traversal {
        side: matrix.side(),
        values: traverse(&matrix),
    };
    tracing::info!("✅ Traversed {} values", traversal.values.len());

    match options.format {
        OutputFormat::Text => output.push_str(&format_values(&traversal.values)),
        OutputFormat::Json => output.push_str(&serde_json::to_string(&traversal)?),
    }
    Ok(output)
}

pub fn format_values(values: &[i64]) -> String {
    let joined: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("[{}]", joined.join(", "))
}

/// 根據錯誤嚴重程度決定退出碼
pub fn exit_code(error: &MatrixError) -> i32 {
    match error.severity() {
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    const GRID: &str = "\
+----+----+
|  1 |  2 |
+----+----+
|  3 |  4 |
+----+----+
";

    struct FixedSource(&'static str);

    #[async_trait]
    impl TextSource for FixedSource {
        async fn fetch_text(&self, _location: &str) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl TextSource for FailingSource {
        async fn fetch_text(&self, location: &str) -> Result<String> {
            Err(MatrixError::ServerError {
                status: 502,
                url: location.to_string(),
            })
        }
    }

    #[tokio::test]
    async fn test_text_output() {
        let engine = MatrixEngine::new(FixedSource(GRID));
        let output = run(&engine, "memory://grid", &RunOptions::default())
            .await
            .unwrap();
        assert_eq!(output, "[1, 3, 4, 2]");
    }

    #[tokio::test]
    async fn test_json_output() {
        let engine = MatrixEngine::new(FixedSource(GRID));
        let options = RunOptions {
            format: OutputFormat::Json,
            ..RunOptions::default()
        };
        let output = run(&engine, "memory://grid", &options).await.unwrap();
        assert_eq!(output, r#"{"side":2,"values":[1,3,4,2]}"#);
    }

    #[tokio::test]
    async fn test_show_grid_prefixes_rendered_matrix() {
        let engine = MatrixEngine::new(FixedSource(GRID));
        let options = RunOptions {
            show_grid: true,
            ..RunOptions::default()
        };
        let output = run(&engine, "memory://grid", &options).await.unwrap();
        assert_eq!(
            output,
            "+---+---+\n| 1 | 2 |\n+---+---+\n| 3 | 4 |\n+---+---+\n[1, 3, 4, 2]"
        );
    }

    #[tokio::test]
    async fn test_failures_give_empty_output_without_strict() {
        let failing = MatrixEngine::new(FailingSource);
        let output = run(&failing, "http://grid", &RunOptions::default())
            .await
            .unwrap();
        assert_eq!(output, "[]");

        let malformed = MatrixEngine::new(FixedSource("| 1 | 2 |"));
        let options = RunOptions {
            format: OutputFormat::Json,
            ..RunOptions::default()
        };
        let output = run(&malformed, "memory://grid", &options).await.unwrap();
        assert_eq!(output, r#"{"side":0,"values":[]}"#);
    }

    #[tokio::test]
    async fn test_strict_returns_error_and_exit_code() {
        let strict = RunOptions {
            strict: true,
            ..RunOptions::default()
        };

        let err = run(&MatrixEngine::new(FailingSource), "http://grid", &strict)
            .await
            .unwrap_err();
        assert!(matches!(err, MatrixError::ServerError { status: 502, .. }));
        assert_eq!(exit_code(&err), 2);

        let err = run(&MatrixEngine::new(FixedSource("| 1 | x |")), "memory://grid", &strict)
            .await
            .unwrap_err();
        assert!(matches!(err, MatrixError::MalformedRow { .. }));
        assert_eq!(exit_code(&err), 1);
    }

    #[test]
    fn test_exit_code_for_config_errors() {
        let err = MatrixError::InvalidConfigValueError {
            field: "timeout_seconds".to_string(),
            value: "0".to_string(),
            reason: "Value must be between 1 and 300".to_string(),
        };
        assert_eq!(exit_code(&err), 3);
    }

    #[test]
    fn test_format_values() {
        assert_eq!(format_values(&[]), "[]");
        assert_eq!(format_values(&[10, -5, 7]), "[10, -5, 7]");
    }
}
