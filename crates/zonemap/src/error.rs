//! Error types for Zonemap.

use std::path::PathBuf;

use thiserror::Error;
use zonemap_render::RenderError;

/// Errors from loading configuration or building view resources.
///
/// Painting and hit-testing never fail; only setup does.
#[derive(Debug, Error)]
pub enum ZonemapError {
    /// A configuration file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A configuration document is not valid TOML for [`NoteImageConfig`](crate::NoteImageConfig).
    #[error("invalid configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// A configuration value is out of range.
    #[error("invalid configuration value: {0}")]
    InvalidConfig(String),

    /// A bitmap could not be loaded.
    #[error("render error: {0}")]
    Render(#[from] RenderError),
}

/// Result type for Zonemap operations.
pub type Result<T> = std::result::Result<T, ZonemapError>;
