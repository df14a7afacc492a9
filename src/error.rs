//! Error types for the search crate

use std::path::PathBuf;
use thiserror::Error;

/// Raised by a search core when the turn clock drops below the configured
/// threshold. It unwinds every recursive frame and is handled once, by the
/// iterative-deepening controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("search cancelled: time budget exhausted")]
pub struct SearchCancelled;

/// Errors produced while building or loading a [`crate::SearchConfig`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("search depth must be greater than zero")]
    InvalidDepth,

    #[error("timeout threshold {value} ms must be positive and finite")]
    InvalidThreshold { value: f64 },

    #[error("invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
