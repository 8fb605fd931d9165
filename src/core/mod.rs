pub mod engine;
pub mod parser;
pub mod render;
pub mod traversal;

pub use crate::domain::model::{Matrix, Traversal};
pub use crate::domain::ports::{ConfigProvider, TextSource};
pub use crate::utils::error::Result;
