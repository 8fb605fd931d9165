use crate::core::parser::{parse_matrix, try_parse_matrix};
use crate::core::traversal::traverse;
use crate::domain::model::{Matrix, Traversal};
use crate::domain::ports::TextSource;
use crate::utils::error::Result;

pub struct MatrixEngine<S: TextSource> {
    source: S,
}

impl<S: TextSource> MatrixEngine<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch and parse, failing on the first problem.
    pub async fn fetch_matrix(&self, location: &str) -> Result<Matrix> {
        tracing::debug!("Fetching matrix from: {}", location);
        let text = self.source.fetch_text(location).await?;
        tracing::debug!("Fetched {} bytes", text.len());
        try_parse_matrix(&text)
    }

    pub async fn try_get_matrix(&self, location: &str) -> Result<Traversal> {
        let matrix = self.fetch_matrix(location).await?;
        let values = traverse(&matrix);
        tracing::info!(
            "Traversed {}x{} matrix into {} values",
            matrix.side(),
            matrix.side(),
            values.len()
        );
        Ok(Traversal {
            side: matrix.side(),
            values,
        })
    }

    /// Fetch, parse and traverse, degrading to an empty result.
    ///
    /// A failed fetch is logged once and treated as empty text; a malformed grid
    /// is logged and treated as an empty matrix. Nothing is retried.
    pub async fn get_matrix(&self, location: &str) -> Vec<i64> {
        let text = match self.source.fetch_text(location).await {
            Ok(text) => Some(text),
            Err(e) => {
                tracing::error!("{}", e);
                None
            }
        };

        let matrix = parse_matrix(text.as_deref().unwrap_or_default());
        traverse(&matrix)
    }
}
