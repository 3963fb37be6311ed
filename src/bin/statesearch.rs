//! statesearch CLI - path-finding and game-tree search demos
//!
//! - `solve`: sliding-tile puzzle with any frontier strategy
//! - `play`: Tic-Tac-Toe move selection with minimax or alpha-beta

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "statesearch")]
#[command(version, about = "Uninformed, heuristic and adversarial search demos", long_about = None)]
struct Cli {
    /// Log search progress (sets the default log level to debug)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a sliding-tile puzzle
    Solve(statesearch::cli::commands::solve::SolveArgs),

    /// Choose Tic-Tac-Toe moves
    Play(statesearch::cli::commands::play::PlayArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match cli.command {
        Commands::Solve(args) => statesearch::cli::commands::solve::execute(args),
        Commands::Play(args) => statesearch::cli::commands::play::execute(args),
    }
}
