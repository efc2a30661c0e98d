//! Move sources that drive a game

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use crate::ai::NegamaxAI;
use crate::board::Position;
use crate::error::Result;
use crate::game::GameState;

/// Anything that can pick a move for the player to move.
///
/// Returning `None` means the agent has no move to offer; the runner stops
/// the game in that case.
pub trait Agent {
    fn name(&self) -> &str;

    fn act(&mut self, state: &GameState) -> Option<Position>;
}

/// Engine-driven agent
pub struct NegamaxAgent {
    name: String,
    ai: NegamaxAI,
}

impl NegamaxAgent {
    /// Fails with `InvalidDepth` for depth 0
    pub fn new(depth: u32, seed: u64) -> Result<Self> {
        Ok(Self {
            name: format!("negamax(depth={})", depth),
            ai: NegamaxAI::with_seed(depth, seed)?,
        })
    }
}

impl Agent for NegamaxAgent {
    fn name(&self) -> &str {
        &self.name
    }

    fn act(&mut self, state: &GameState) -> Option<Position> {
        self.ai.best_move(state)
    }
}

/// Uniformly random legal moves
pub struct RandomAgent {
    rng: ChaCha8Rng,
}

impl RandomAgent {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn name(&self) -> &str {
        "random"
    }

    fn act(&mut self, state: &GameState) -> Option<Position> {
        state.legal_moves().choose(&mut self.rng).copied()
    }
}

impl<A: Agent + ?Sized> Agent for Box<A> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn act(&mut self, state: &GameState) -> Option<Position> {
        (**self).act(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;

    #[test]
    fn test_random_agent_picks_empty_cell() {
        let state = GameState::new(3, Cell::Blue)
            .unwrap()
            .place_peg(Some(Position::new(0, 0)))
            .place_peg(Some(Position::new(1, 1)));
        let mut agent = RandomAgent::new(1);
        for _ in 0..20 {
            let mv = agent.act(&state).unwrap();
            assert_eq!(state.get(mv), Cell::Empty);
        }
    }

    #[test]
    fn test_agents_on_full_board() {
        let state = GameState::from_rows(
            &[vec![Cell::Blue, Cell::Red], vec![Cell::Red, Cell::Blue]],
            false,
        )
        .unwrap();
        assert_eq!(RandomAgent::new(0).act(&state), None);
        assert_eq!(NegamaxAgent::new(2, 0).unwrap().act(&state), None);
    }

    #[test]
    fn test_zero_depth_agent_rejected() {
        assert!(matches!(
            NegamaxAgent::new(0, 1),
            Err(crate::error::HexError::InvalidDepth { depth: 0 })
        ));
    }

    #[test]
    fn test_boxed_agent_delegates() {
        let mut agent: Box<dyn Agent> = Box::new(NegamaxAgent::new(1, 0).unwrap());
        assert_eq!(agent.name(), "negamax(depth=1)");
        let state = GameState::new(3, Cell::Red).unwrap();
        assert!(agent.act(&state).is_some());
    }
}
