//! Match command - play automated games between two agents
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: play_match(), report_results()
//! - Level 3: play_single_game(), compute_match_statistics()
//! - Level 4: formatting utilities

use anyhow::Result;
use clap::Args;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use hexpath_core::{play_game, Agent, Cell, EngineConfig, GameState, NegamaxAgent, Position, RandomAgent};

use crate::engine_args::EngineArgs;

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct MatchArgs {
    #[command(flatten)]
    pub engine: EngineArgs,

    /// Agent playing blue (connects top and bottom rows)
    #[arg(long, value_enum, default_value = "negamax")]
    pub blue: AgentKind,

    /// Agent playing red (connects left and right columns)
    #[arg(long, value_enum, default_value = "random")]
    pub red: AgentKind,

    /// Number of games to play (the opening colour alternates)
    #[arg(long, default_value = "10")]
    pub games: usize,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum AgentKind {
    Negamax,
    Random,
}

/// Result of a single game
#[derive(Clone, Debug)]
struct MatchGame {
    game_number: usize,
    first: Cell,
    winner: Option<Cell>,
    moves: Vec<Position>,
}

/// Aggregated match results
#[derive(Clone, Debug)]
struct MatchResults {
    games: Vec<MatchGame>,
    blue_wins: usize,
    red_wins: usize,
    unfinished: usize,
    avg_length: f32,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run match command
///
/// 1. Resolve engine configuration
/// 2. Play the match (multiple games)
/// 3. Report results
pub fn run(args: MatchArgs, seed: Option<u64>) -> Result<()> {
    let config = args.engine.resolve(seed)?;

    tracing::info!(
        "Starting match: blue={:?} vs red={:?} ({} games, size={}, depth={})",
        args.blue,
        args.red,
        args.games,
        config.board_size,
        config.depth
    );

    let results = play_match(&args, &config)?;

    report_results(&results, &args);

    Ok(())
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Play all games in the match
fn play_match(args: &MatchArgs, config: &EngineConfig) -> Result<MatchResults> {
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed.unwrap_or_default());
    let mut games = Vec::with_capacity(args.games);

    for game_num in 0..args.games {
        // Alternate the opening colour for fairness
        let first = if game_num % 2 == 0 { Cell::Blue } else { Cell::Red };

        let record = play_single_game(args, config, first, game_num + 1, &mut rng)?;

        tracing::info!(
            "Game {}: winner {:?} ({} moves)",
            record.game_number,
            record.winner,
            record.moves.len()
        );

        games.push(record);
    }

    Ok(compute_match_statistics(games))
}

/// Report match results
fn report_results(results: &MatchResults, args: &MatchArgs) {
    if args.json {
        print_json_results(results);
    } else {
        print_text_results(results);
    }
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

/// Play one game with freshly seeded agents
fn play_single_game(
    args: &MatchArgs,
    config: &EngineConfig,
    first: Cell,
    game_number: usize,
    rng: &mut ChaCha8Rng,
) -> Result<MatchGame> {
    let initial = GameState::new(config.board_size, first)?;
    let mut blue = create_agent(args.blue, config.depth, rng.gen())?;
    let mut red = create_agent(args.red, config.depth, rng.gen())?;

    let record = play_game(initial, blue.as_mut(), red.as_mut());

    Ok(MatchGame {
        game_number,
        first,
        winner: record.winner,
        moves: record.moves,
    })
}

/// Compute aggregate statistics from game records
fn compute_match_statistics(games: Vec<MatchGame>) -> MatchResults {
    let blue_wins = games
        .iter()
        .filter(|g| g.winner == Some(Cell::Blue))
        .count();
    let red_wins = games
        .iter()
        .filter(|g| g.winner == Some(Cell::Red))
        .count();
    let unfinished = games.iter().filter(|g| g.winner.is_none()).count();

    let total_moves: usize = games.iter().map(|g| g.moves.len()).sum();
    let avg_length = if games.is_empty() {
        0.0
    } else {
        total_moves as f32 / games.len() as f32
    };

    MatchResults {
        games,
        blue_wins,
        red_wins,
        unfinished,
        avg_length,
    }
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

fn create_agent(kind: AgentKind, depth: u32, seed: u64) -> Result<Box<dyn Agent>> {
    Ok(match kind {
        AgentKind::Negamax => Box::new(NegamaxAgent::new(depth, seed)?),
        AgentKind::Random => Box::new(RandomAgent::new(seed)),
    })
}

fn percent(count: usize, total: usize) -> f32 {
    if total > 0 {
        count as f32 / total as f32 * 100.0
    } else {
        0.0
    }
}

/// Print results as JSON
fn print_json_results(results: &MatchResults) {
    #[derive(serde::Serialize)]
    struct JsonGame {
        game_number: usize,
        first: Cell,
        winner: Option<Cell>,
        moves: Vec<String>,
    }

    #[derive(serde::Serialize)]
    struct JsonOutput {
        total_games: usize,
        blue_wins: usize,
        red_wins: usize,
        unfinished: usize,
        avg_length: f32,
        games: Vec<JsonGame>,
    }

    let output = JsonOutput {
        total_games: results.games.len(),
        blue_wins: results.blue_wins,
        red_wins: results.red_wins,
        unfinished: results.unfinished,
        avg_length: results.avg_length,
        games: results
            .games
            .iter()
            .map(|g| JsonGame {
                game_number: g.game_number,
                first: g.first,
                winner: g.winner,
                moves: g.moves.iter().map(|p| p.to_string()).collect(),
            })
            .collect(),
    };

    match serde_json::to_string_pretty(&output) {
        Ok(json) => println!("{}", json),
        Err(e) => tracing::error!("Failed to serialize results: {}", e),
    }
}

/// Print results as text
fn print_text_results(results: &MatchResults) {
    let total = results.games.len();

    println!("\n=== Match Results ===");
    println!("Total games: {}", total);
    println!(
        "Blue wins:   {} ({:.1}%)",
        results.blue_wins,
        percent(results.blue_wins, total)
    );
    println!(
        "Red wins:    {} ({:.1}%)",
        results.red_wins,
        percent(results.red_wins, total)
    );
    if results.unfinished > 0 {
        println!("Unfinished:  {}", results.unfinished);
    }
    println!("Avg length:  {:.1} moves", results.avg_length);

    println!("\nGame details:");
    for game in &results.games {
        let winner = game
            .winner
            .map_or_else(|| "nobody".to_string(), |c| c.to_string());
        println!(
            "  Game {}: {} opened, {} won in {} moves",
            game.game_number,
            game.first,
            winner,
            game.moves.len()
        );
    }
}

// ============================================================================
// TESTS
// ============================================================================
