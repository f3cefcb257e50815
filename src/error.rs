//! # Error Types
//!
//! This module defines error types used throughout the weathericons library.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for icon generation
#[derive(Debug, Error)]
pub enum IconError {
    /// Source image exists but could not be decoded
    #[error("Failed to decode {}: {}", .path.display(), .source)]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Image encoding error (preview output)
    #[error("Image error: {0}")]
    Image(String),

    /// Source images absent while running with the strict policy
    #[error("Missing source images: {}", display_paths(.0))]
    MissingSources(Vec<PathBuf>),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
