//! Error types for the raster cache.

use std::path::PathBuf;

/// Result type alias for raster cache operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while preparing the cache.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The cache directory could not be created.
    #[error("Failed to create cache directory '{path}': {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No home directory to place the default cache under.
    #[error("No home directory found for the raster cache")]
    NoHomeDir,
}

impl Error {
    /// Create a directory creation error.
    pub fn create_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::CreateDir {
            path: path.into(),
            source,
        }
    }
}
