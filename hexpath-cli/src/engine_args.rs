//! Engine options shared by all commands
//!
//! Precedence: built-in defaults, then `--config FILE`, then explicit flags.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use hexpath_core::EngineConfig;

#[derive(Args, Clone, Debug, Default)]
pub struct EngineArgs {
    /// JSON file with `depth`, `board_size` and `seed` fields
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Search depth in plies
    #[arg(long)]
    pub depth: Option<u32>,

    /// Board size n (n x n cells)
    #[arg(long)]
    pub size: Option<usize>,
}

impl EngineArgs {
    /// Merge file, flags and the global seed into a validated config.
    /// A missing seed is drawn from entropy and logged so the run can be
    /// repeated.
    pub fn resolve(&self, seed: Option<u64>) -> Result<EngineConfig> {
        let mut config = match &self.config {
            Some(path) => EngineConfig::load(path)
                .with_context(|| format!("Failed to load config: {}", path.display()))?,
            None => EngineConfig::default(),
        };

        if let Some(depth) = self.depth {
            config = config.with_depth(depth);
        }
        if let Some(size) = self.size {
            config = config.with_board_size(size);
        }
        let seed = seed.or(config.seed).unwrap_or_else(rand::random);
        config = config.with_seed(seed);

        config.validate()?;
        tracing::info!(
            depth = config.depth,
            board_size = config.board_size,
            seed,
            "engine configured"
        );
        Ok(config)
    }
}
