//! Error types for the focal binary.

use focal_widgets::ConfigError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced to the command line.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// A file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// Script is not valid YAML or has an unknown step.
    #[error("invalid script: {0}")]
    Script(#[from] serde_yaml_ng::Error),

    /// Configuration failed to parse or validate.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A frame could not be encoded as JSON.
    #[error("failed to encode frame: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
