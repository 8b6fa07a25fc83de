//! Construction-time error types.
//!
//! The simulation itself never fails; these cover loading and validating
//! the data a match is built from.

use thiserror::Error;

/// A character record that cannot drive a fighter.
#[derive(Debug, Error, PartialEq)]
pub enum CharacterError {
    #[error("character `{name}` has no frames for action row {row}")]
    EmptyClip { name: String, row: usize },

    #[error("character `{name}` has invalid tile size {size}")]
    InvalidTileSize { name: String, size: u32 },

    #[error("character `{name}` has invalid render scale {scale}")]
    InvalidScale { name: String, scale: f32 },

    #[error("character `{name}` is missing asset id for {what}")]
    MissingAsset { name: String, what: &'static str },

    #[error("roster needs at least two characters, found {0}")]
    RosterTooSmall(usize),
}

/// Errors loading or validating tuning and settings files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

pub type Result<T> = std::result::Result<T, ConfigError>;
