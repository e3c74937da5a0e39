//! Content loading errors

use std::path::PathBuf;
use thiserror::Error;

/// Failure to load the content directory. Always fatal at startup.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("unexpected content in {path}: {message}")]
    Schema { path: PathBuf, message: String },
    #[error("run week {0:?} not found in run plans")]
    MissingWeek(String),
}

impl ContentError {
    pub fn schema(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Schema {
            path: path.into(),
            message: message.into(),
        }
    }
}
