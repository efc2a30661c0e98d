//! Play command - a human against the engine in the terminal
//!
//! ## Architecture
//!
//! - run(): orchestration
//! - build_agents(): seat the human and the engine
//! - announce_move(): report each move as it is played
//! - announce_result(): final board and winner

use std::io::{self, Write};

use anyhow::Result;
use clap::Args;

use hexpath_core::{play_game_with, Agent, Cell, GameRecord, GameState, NegamaxAgent, Position};

use crate::engine_args::EngineArgs;
use crate::human::HumanAgent;
use crate::render::{render, CLEAR_SCREEN};

// ============================================================================
// COMMAND ARGUMENTS
// ============================================================================

#[derive(Args)]
pub struct PlayArgs {
    #[command(flatten)]
    pub engine: EngineArgs,

    /// Let the human move first (the engine opens by default)
    #[arg(long)]
    pub human_first: bool,

    /// Colour the human plays
    #[arg(long, value_enum, default_value = "blue")]
    pub human: Side,

    /// Disable ANSI colours and screen clearing
    #[arg(long)]
    pub no_color: bool,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Blue,
    Red,
}

impl From<Side> for Cell {
    fn from(side: Side) -> Self {
        match side {
            Side::Blue => Cell::Blue,
            Side::Red => Cell::Red,
        }
    }
}

// ============================================================================
// ORCHESTRATION
// ============================================================================

/// Run play command
pub fn run(args: PlayArgs, seed: Option<u64>) -> Result<()> {
    let config = args.engine.resolve(seed)?;
    let seed = config.seed.unwrap_or_default();
    let color = !args.no_color;

    let human_color = Cell::from(args.human);
    let first = if args.human_first {
        human_color
    } else {
        human_color.opposite()
    };
    let initial = GameState::new(config.board_size, first)?;

    let (mut blue, mut red) = build_agents(human_color, config.depth, seed, color)?;

    let record = play_game_with(initial, blue.as_mut(), red.as_mut(), |state, pos| {
        if let Err(e) = announce_move(&mut io::stdout(), state, pos, human_color, color) {
            tracing::warn!("failed to report move: {}", e);
        }
    });

    announce_result(&record, color);
    Ok(())
}

/// Returns (blue, red). The human's hint comes from a second engine at the
/// same depth with its own seed.
fn build_agents(
    human_color: Cell,
    depth: u32,
    seed: u64,
    color: bool,
) -> Result<(Box<dyn Agent>, Box<dyn Agent>)> {
    let engine: Box<dyn Agent> = Box::new(NegamaxAgent::new(depth, seed)?);
    let helper = Box::new(NegamaxAgent::new(depth, seed.wrapping_add(1))?);
    let human: Box<dyn Agent> = Box::new(HumanAgent::new(
        helper,
        io::stdin().lock(),
        io::stdout(),
        color,
    ));

    Ok(match human_color {
        Cell::Red => (engine, human),
        _ => (human, engine),
    })
}

/// Print "<colour> played <pos>" for the move that produced `state`.
/// With colour on, the screen is cleared first when the human is next to
/// move, so the engine's reply stays visible above the board prompt.
fn announce_move(
    out: &mut impl Write,
    state: &GameState,
    pos: Position,
    human_color: Cell,
    color: bool,
) -> io::Result<()> {
    if color && state.active_color() == human_color && !state.is_losing() {
        write!(out, "{CLEAR_SCREEN}")?;
    }
    let mover = state.active_color().opposite();
    writeln!(out, "{} played {}", mover, pos)
}

fn announce_result(record: &GameRecord, color: bool) {
    println!("\n{}\n", render(&record.final_state, None, color));
    match record.winner {
        Some(winner) => {
            println!("WINNER: {}", winner);
            println!("LOSER:  {}", winner.opposite());
        }
        None => println!("Game abandoned after {} moves", record.length()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_move_shown_after_clear() {
        let state = GameState::new(5, Cell::Red)
            .unwrap()
            .place_peg(Some(Position::new(4, 2)));
        let mut out = Vec::new();
        announce_move(&mut out, &state, Position::new(4, 2), Cell::Blue, true).unwrap();

        let shown = String::from_utf8(out).unwrap();
        assert_eq!(shown, format!("{CLEAR_SCREEN}red played c4\n"));
    }

    #[test]
    fn test_human_move_not_cleared() {
        let state = GameState::new(5, Cell::Blue)
            .unwrap()
            .place_peg(Some(Position::new(0, 0)));
        let mut out = Vec::new();
        announce_move(&mut out, &state, Position::new(0, 0), Cell::Blue, true).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "blue played a0\n");
    }

    #[test]
    fn test_plain_output_never_clears() {
        let state = GameState::new(5, Cell::Red)
            .unwrap()
            .place_peg(Some(Position::new(1, 1)));
        let mut out = Vec::new();
        announce_move(&mut out, &state, Position::new(1, 1), Cell::Blue, false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "red played b1\n");
    }
}
