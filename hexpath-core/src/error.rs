//! Error types
//!
//! The decision engine itself never fails: placing on an occupied cell is a
//! no-op and searching a full board yields no move. These errors cover the
//! surfaces around it (configuration and text input).

use std::path::PathBuf;

/// Errors raised while configuring a game or reading positions
#[derive(Debug, thiserror::Error)]
pub enum HexError {
    #[error("board size {size} is out of range (1..={max})", max = crate::board::MAX_BOARD_SIZE)]
    InvalidBoardSize { size: usize },

    #[error("board is not square: row {row} has {len} cells, expected {size}")]
    NonSquareBoard { row: usize, len: usize, size: usize },

    #[error("search depth must be at least 1, got {depth}")]
    InvalidDepth { depth: u32 },

    #[error("cannot parse position {input:?}: {reason}")]
    ParsePosition { input: String, reason: &'static str },

    #[error("position ({row}, {col}) is outside a {size}x{size} board")]
    PositionOutOfBounds { row: usize, col: usize, size: usize },

    #[error("failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, HexError>;
