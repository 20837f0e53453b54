//! Harness errors.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid fixture JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid argument spec '{spec}': {reason}")]
    BadArgSpec { spec: String, reason: &'static str },
    #[error("no fixture JSON files found in {0}")]
    NoFixtures(PathBuf),
}
