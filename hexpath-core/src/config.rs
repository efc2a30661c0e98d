//! Engine and game configuration

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::board::MAX_BOARD_SIZE;
use crate::error::{HexError, Result};

/// Search and board parameters shared by the CLI and the game runner
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Search ply limit for engine agents
    pub depth: u32,
    /// Board dimension n (n x n cells)
    pub board_size: usize,
    /// Random seed for move shuffling (None = fresh entropy)
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            depth: 3,
            board_size: 7,
            seed: None,
        }
    }
}

impl EngineConfig {
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_board_size(mut self, board_size: usize) -> Self {
        self.board_size = board_size;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check ranges that the engine relies on
    pub fn validate(&self) -> Result<()> {
        if self.board_size == 0 || self.board_size > MAX_BOARD_SIZE {
            return Err(HexError::InvalidBoardSize {
                size: self.board_size,
            });
        }
        if self.depth == 0 {
            return Err(HexError::InvalidDepth { depth: self.depth });
        }
        Ok(())
    }

    /// Load from a JSON file; missing fields keep their defaults
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| HexError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: EngineConfig =
            serde_json::from_str(&content).map_err(|source| HexError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }
}
