//! Errors raised while loading the sample input.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to load an articles file.
#[derive(Debug, Error)]
pub enum SampleError {
    /// The file could not be read.
    #[error("failed to read articles from {path}")]
    Read {
        /// The file that was read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid JSON.
    #[error("failed to parse articles in {path}")]
    Parse {
        /// The file that was parsed.
        path: PathBuf,
        /// The underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// The file holds JSON that is not an array of records.
    #[error("expected a JSON array of articles in {path}, found {found}")]
    NotACollection {
        /// The file that was parsed.
        path: PathBuf,
        /// The JSON type found at the top level.
        found: &'static str,
    },
}
