//! Error types for scene_lens.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the scene_lens library.
#[derive(Error, Debug)]
pub enum Error {
    /// The input could not be decoded into a pixel grid. Fatal to `analyze`.
    #[error("failed to load image from {path}: {source}")]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// A style name outside the fixed style vocabulary.
    #[error("unknown style: {0}")]
    UnknownStyle(String),

    /// Invalid configuration value.
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter { name: String, reason: String },

    /// A blocking analysis task panicked or was cancelled.
    #[error("analysis task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl Error {
    pub(crate) fn invalid_parameter(name: &str, reason: &str) -> Self {
        Self::InvalidParameter {
            name: name.to_string(),
            reason: reason.to_string(),
        }
    }

    /// True when this is the load-time failure of the pipeline.
    #[must_use]
    pub const fn is_image_load(&self) -> bool {
        matches!(self, Self::ImageLoad { .. })
    }
}

/// Result type alias for scene_lens operations.
pub type Result<T> = std::result::Result<T, Error>;
