//! Error types of the game engine and its configuration.

use std::path::PathBuf;

/// Errors reported by board and game operations.
///
/// None of them is fatal: the game is left untouched and the caller may
/// re-prompt or discard the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("invalid board dimensions {width}x{height} (each must be positive, at most {max} slots)", max = crate::board::MAX_CELLS)]
    InvalidDimensions { width: usize, height: usize },

    #[error("column {column} is out of range (board has {width} columns)")]
    ColumnOutOfRange { column: usize, width: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("the game is already over")]
    GameOver,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("invalid configuration: {0}")]
    Invalid(#[from] GameError),
}
