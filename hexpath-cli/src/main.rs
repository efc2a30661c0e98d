//! hexpath CLI - Command-line interface
//!
//! Commands:
//! - play: Human against the engine in the terminal
//! - match: Automated games between engine and random agents

mod engine_args;
mod human;
mod match_cmd;
mod play_cmd;
mod render;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hexpath")]
#[command(about = "Hex with a shortest-path negamax engine")]
struct Cli {
    /// Seed for every random choice (omit for a fresh one)
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the engine
    Play(play_cmd::PlayArgs),
    /// Play automated games between two agents
    Match(match_cmd::MatchArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize logging (RUST_LOG overrides the default level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => play_cmd::run(args, cli.seed),
        Commands::Match(args) => match_cmd::run(args, cli.seed),
    }
}
