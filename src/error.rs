//! Error types for seed and grid configuration.
//!
//! The automaton itself is total: once a grid is constructed, `get`, `set`
//! and `step` cannot fail. Everything that can go wrong is caught eagerly at
//! construction or `initialize` time and reported as a [`ConfigError`].

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid grid dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("pattern `{name}`: declared size expects {expected} cells, stencil has {found}")]
    PatternSizeMismatch {
        name: String,
        expected: usize,
        found: usize,
    },

    #[error("pattern `{name}`: unrecognized stencil marker {marker:?}")]
    InvalidMarker { name: String, marker: char },

    #[error("pattern `{name}` defined more than once")]
    DuplicatePattern { name: String },

    #[error("placement references unknown pattern `{name}`")]
    UnknownPattern { name: String },

    #[error("failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse seed file: {0}")]
    Json(#[from] serde_json::Error),
}
