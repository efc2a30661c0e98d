//! Negamax search with alpha-beta pruning

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use crate::board::Position;
use crate::error::{HexError, Result};
use crate::eval::evaluate;
use crate::game::GameState;

/// Search window bound. Kept symmetric so negation never overflows.
pub const INFINITY: i32 = i32::MAX;

/// Outcome of a search: value for the player to move and the move that
/// reaches it
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub value: i32,
    pub best_move: Option<Position>,
}

// ============================================================================
// NEGAMAX AI
// ============================================================================

/// Fixed-depth negamax player with its own seeded move shuffler
pub struct NegamaxAI {
    pub depth: u32,
    rng: ChaCha8Rng,
}

impl NegamaxAI {
    pub fn new(depth: u32) -> Result<Self> {
        Self::with_seed(depth, 42)
    }

    /// Rejects depth 0, which would search nothing and never pick a move
    pub fn with_seed(depth: u32, seed: u64) -> Result<Self> {
        if depth == 0 {
            return Err(HexError::InvalidDepth { depth });
        }
        Ok(Self {
            depth,
            rng: ChaCha8Rng::seed_from_u64(seed),
        })
    }

    /// Best move for the player to move, `None` on a full board
    pub fn best_move(&mut self, state: &GameState) -> Option<Position> {
        choose_move(state, self.depth, &mut self.rng)
    }

    /// Full search result for the current position
    pub fn search(&mut self, state: &GameState) -> SearchResult {
        negamax(state, -INFINITY, INFINITY, self.depth, &mut self.rng)
    }
}

/// Pick a move for the active player by searching `depth` plies (at least
/// one). Returns `None` only when no empty cell is left.
pub fn choose_move<R: Rng + ?Sized>(
    state: &GameState,
    depth: u32,
    rng: &mut R,
) -> Option<Position> {
    let depth = depth.max(1);
    let result = negamax(state, -INFINITY, INFINITY, depth, rng);
    tracing::debug!(
        depth,
        value = result.value,
        best_move = ?result.best_move,
        "negamax search finished"
    );
    result.best_move
}

// ============================================================================
// NEGAMAX WITH ALPHA-BETA
// ============================================================================

/// Value of `state` for its active player within the window `(alpha, beta)`.
///
/// Successors are shuffled before expansion so equally scored moves are
/// chosen at random; the value itself does not depend on the order. A node
/// with no successors is scored statically and has no best move.
pub fn negamax<R: Rng + ?Sized>(
    state: &GameState,
    mut alpha: i32,
    beta: i32,
    depth: u32,
    rng: &mut R,
) -> SearchResult {
    if depth == 0 {
        return SearchResult {
            value: evaluate(state),
            best_move: None,
        };
    }

    let mut children: Vec<_> = state.successors().collect();
    if children.is_empty() {
        return SearchResult {
            value: evaluate(state),
            best_move: None,
        };
    }
    children.shuffle(rng);

    let mut best = SearchResult {
        value: -INFINITY,
        best_move: None,
    };

    for (pos, child) in &children {
        let value = -negamax(child, -beta, -alpha, depth - 1, rng).value;
        if best.best_move.is_none() || value > best.value {
            best = SearchResult {
                value,
                best_move: Some(*pos),
            };
        }

        alpha = alpha.max(best.value);
        if alpha >= beta {
            break;
        }
    }

    best
}

// ============================================================================
// TESTS
// ============================================================================
