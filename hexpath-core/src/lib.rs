//! hexpath core - Hex decision engine
//!
//! This crate provides the game logic and AI for Hex:
//! - Board geometry (rhombic grid, hex adjacency, player-oriented views)
//! - Immutable game state, move generation and win detection
//! - Shortest-path position evaluation
//! - Negamax search with alpha-beta pruning
//! - Agents and a runner that plays complete games

pub mod board;
pub mod error;
pub mod game;
pub mod eval;
pub mod ai;
pub mod agent;
pub mod config;
pub mod runner;

// Re-exports for convenient access
pub use board::{Cell, PlayerView, Position, MAX_BOARD_SIZE, NEIGHBORS};
pub use error::{HexError, Result};
pub use game::GameState;
pub use eval::{evaluate, path_distance, WIN_VALUE};
pub use ai::{choose_move, negamax, NegamaxAI, SearchResult};
pub use agent::{Agent, NegamaxAgent, RandomAgent};
pub use config::EngineConfig;
pub use runner::{play_game, play_game_with, GameRecord};
