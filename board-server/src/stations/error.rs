//! Station reference data error types.

use std::path::PathBuf;

/// Errors that can occur while loading the station directory.
#[derive(Debug, thiserror::Error)]
pub enum StationError {
    /// The reference file could not be read
    #[error("failed to read station list {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The reference data is not a JSON array of `{id, value}` objects
    #[error("JSON parse error in station list: {message}")]
    Json { message: String },
}
