// crates/geotext-core/src/error.rs
use thiserror::Error;

/// Result alias used across `geotext-core`.
pub type Result<T> = std::result::Result<T, GeoTextError>;

/// Errors raised while loading a gazetteer or extracting locations.
#[derive(Debug, Error)]
pub enum GeoTextError {
    /// The caller handed over something that is not text.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The extractor behind the facade failed.
    #[error("Extraction failed: {0}")]
    Extraction(String),

    /// A lookup file or cache could not be found.
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Bincode error: {0}")]
    Bincode(#[from] bincode::Error),

    /// Data was readable but not usable (empty gazetteer, disabled feature, ...).
    #[error("Invalid data: {0}")]
    InvalidData(String),
}
