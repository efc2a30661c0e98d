//! Game runner - alternates agents until someone connects

use serde::Serialize;

use crate::agent::Agent;
use crate::board::{Cell, Position};
use crate::game::GameState;

/// Outcome of a single game
#[derive(Clone, Debug, Serialize)]
pub struct GameRecord {
    /// Moves in the order they were played
    pub moves: Vec<Position>,
    /// Colour that completed a chain (None if an agent gave up)
    pub winner: Option<Cell>,
    /// Position after the last move
    #[serde(skip)]
    pub final_state: GameState,
}

impl GameRecord {
    pub fn blue_wins(&self) -> bool {
        self.winner == Some(Cell::Blue)
    }

    pub fn red_wins(&self) -> bool {
        self.winner == Some(Cell::Red)
    }

    /// Number of pegs placed
    pub fn length(&self) -> usize {
        self.moves.len()
    }
}

/// Play from `initial` until the player to move has lost
pub fn play_game(initial: GameState, blue: &mut dyn Agent, red: &mut dyn Agent) -> GameRecord {
    play_game_with(initial, blue, red, |_, _| {})
}

/// Like [`play_game`], calling `on_move` with every new state and the move
/// that produced it
pub fn play_game_with<F>(
    initial: GameState,
    blue: &mut dyn Agent,
    red: &mut dyn Agent,
    mut on_move: F,
) -> GameRecord
where
    F: FnMut(&GameState, Position),
{
    let mut state = initial;
    let mut moves = Vec::new();

    while !state.is_losing() {
        let agent: &mut dyn Agent = match state.active_color() {
            Cell::Red => &mut *red,
            _ => &mut *blue,
        };

        let Some(pos) = agent.act(&state) else {
            tracing::warn!(
                agent = agent.name(),
                color = %state.active_color(),
                "agent returned no move, stopping game"
            );
            break;
        };

        let next = state.place_peg(Some(pos));
        if next == state {
            tracing::warn!(
                agent = agent.name(),
                position = %pos,
                "agent chose an occupied or off-board cell, stopping game"
            );
            break;
        }

        tracing::debug!(agent = agent.name(), position = %pos, "move played");
        moves.push(pos);
        state = next;
        on_move(&state, pos);
    }

    let winner = state.winner();
    match winner {
        Some(color) => tracing::info!(winner = %color, moves = moves.len(), "game finished"),
        None => tracing::info!(moves = moves.len(), "game stopped without a winner"),
    }

    GameRecord {
        moves,
        winner,
        final_state: state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::{NegamaxAgent, RandomAgent};

    /// Always plays the same cell
    struct Stubborn(Position);

    impl Agent for Stubborn {
        fn name(&self) -> &str {
            "stubborn"
        }

        fn act(&mut self, _state: &GameState) -> Option<Position> {
            Some(self.0)
        }
    }

    #[test]
    fn test_random_game_has_a_winner() {
        for seed in 0..10 {
            let initial = GameState::new(5, Cell::Blue).unwrap();
            let mut blue = RandomAgent::new(seed);
            let mut red = RandomAgent::new(seed + 100);
            let record = play_game(initial, &mut blue, &mut red);

            let winner = record.winner.expect("hex always has a winner");
            assert_ne!(record.blue_wins(), record.red_wins());
            assert!(record.final_state.is_losing());
            assert_eq!(record.final_state.active_color(), winner.opposite());
            assert!(record.length() <= 25);
        }
    }

    #[test]
    fn test_moves_alternate_colors() {
        let initial = GameState::new(4, Cell::Red).unwrap();
        let mut blue = RandomAgent::new(1);
        let mut red = NegamaxAgent::new(1, 2).unwrap();
        let record = play_game(initial.clone(), &mut blue, &mut red);

        let mut replay = initial;
        for (i, pos) in record.moves.iter().enumerate() {
            let expected = if i % 2 == 0 { Cell::Red } else { Cell::Blue };
            assert_eq!(replay.active_color(), expected);
            replay = replay.place_peg(Some(*pos));
        }
        assert_eq!(replay, record.final_state);
    }

    #[test]
    fn test_callback_sees_every_move() {
        let initial = GameState::new(4, Cell::Blue).unwrap();
        let mut blue = RandomAgent::new(3);
        let mut red = RandomAgent::new(4);
        let mut seen = Vec::new();
        let record = play_game_with(initial, &mut blue, &mut red, |state, pos| {
            assert_ne!(state.get(pos), Cell::Empty);
            seen.push(pos);
        });
        assert_eq!(seen, record.moves);
    }

    #[test]
    fn test_repeated_cell_stops_game() {
        let initial = GameState::new(3, Cell::Blue).unwrap();
        let mut blue = Stubborn(Position::new(1, 1));
        let mut red = Stubborn(Position::new(1, 1));
        let record = play_game(initial, &mut blue, &mut red);
        assert_eq!(record.moves, vec![Position::new(1, 1)]);
        assert_eq!(record.winner, None);
    }

    #[test]
    fn test_engine_beats_random() {
        let initial = GameState::new(5, Cell::Blue).unwrap();
        let mut blue = NegamaxAgent::new(2, 7).unwrap();
        let mut red = RandomAgent::new(8);
        let record = play_game(initial, &mut blue, &mut red);
        assert!(record.blue_wins());
    }
}
