// Adapters layer: concrete TextSource implementations for external systems.

pub mod file;
pub mod http;

pub use file::FileTextSource;
pub use http::HttpTextSource;
