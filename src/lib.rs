pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{OutputFormat, TomlConfig};

pub use adapters::{FileTextSource, HttpTextSource};
pub use crate::core::{
    engine::MatrixEngine,
    parser::{parse_matrix, try_parse_matrix},
    render::render_matrix,
    traversal::{traverse, traverse_into},
};
pub use domain::model::{Matrix, Traversal};
pub use utils::error::{MatrixError, Result};

/// Download the grid at `url` and return it in spiral order.
///
/// Uses an [`HttpTextSource`] with default settings. Every failure is logged and
/// yields an empty vector.
pub async fn get_matrix(url: &str) -> Vec<i64> {
    match HttpTextSource::with_defaults() {
        Ok(source) => MatrixEngine::new(source).get_matrix(url).await,
        Err(e) => {
            tracing::error!("Failed to build HTTP client: {}", e);
            Vec::new()
        }
    }
}
