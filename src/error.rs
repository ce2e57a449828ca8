//! Error types for framework loading, configuration and output.
//!
//! The index builders themselves never fail; only the edges that touch
//! the filesystem or parse user-supplied documents return these errors.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading frameworks or configuration.
#[derive(Debug, Error)]
pub enum IndexError {
    /// Reading or writing a file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A framework document was not valid JSON
    #[error("Failed to parse JSON framework {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A framework document was not valid YAML
    #[error("Failed to parse YAML framework {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The file extension does not name a supported framework format
    #[error("Unsupported framework file format: {0}")]
    UnsupportedFormat(PathBuf),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    ParsingFailed(String),
}

/// Result type alias for fallible crate operations
pub type Result<T> = std::result::Result<T, IndexError>;
