use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, BoundsError>;

#[derive(Error, Debug)]
pub enum BoundsError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Invalid bounding box: {0}")]
    InvalidBounds(String),

    #[error("PBF read error: {0}")]
    Pbf(#[from] osmpbf::Error),

    #[error("Invalid PBF data: {0}")]
    InvalidPbf(String),

    #[error("Expected an OSMHeader block first, found '{0}'")]
    MissingHeader(String),

    #[error("Found {count} PBF extracts in {dir}, expected exactly one")]
    AmbiguousInput { dir: PathBuf, count: usize },
}
