//! Play command - choose Tic-Tac-Toe moves with minimax or alpha-beta

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use crate::{
    adversarial::AdversarialReport,
    cli::output::{format_number, print_block, print_json, print_kv, print_section},
    config::{AdversarialConfig, GameAlgorithm},
    domains::tictactoe::{BoardState, Player},
    state::{AdversarialState, State},
};

#[derive(Parser, Debug)]
#[command(about = "Pick a Tic-Tac-Toe move, or play a whole game against itself")]
pub struct PlayArgs {
    /// Board as nine cells, row-major: X, O, or . for empty
    #[arg(long, short = 'b', default_value = ".........")]
    pub board: String,

    /// Side to move (`x` or `o`); inferred from the piece counts by default
    #[arg(long)]
    pub to_move: Option<Player>,

    /// Search algorithm: minimax or alpha-beta
    #[arg(long, short = 'a', default_value_t = GameAlgorithm::AlphaBeta)]
    pub algorithm: GameAlgorithm,

    /// Full turns to look ahead
    #[arg(long, short = 'd', default_value_t = 3)]
    pub depth: u32,

    /// Random seed for tie-breaking between equally good moves
    #[arg(long)]
    pub seed: Option<u64>,

    /// Keep choosing moves for both sides until the game ends
    #[arg(long)]
    pub self_play: bool,

    /// Print a JSON report instead of text
    #[arg(long)]
    pub json: bool,
}

/// One chosen move.
#[derive(Debug, Clone, Serialize)]
pub struct Turn {
    pub player: Player,
    pub position: String,
    /// Board after the move
    pub board: String,
    pub report: AdversarialReport,
}

/// Everything `play` reports.
#[derive(Debug, Clone, Serialize)]
pub struct PlaySummary {
    pub algorithm: GameAlgorithm,
    pub depth: u32,
    pub start: String,
    pub turns: Vec<Turn>,
    pub final_board: String,
    /// Set once the game is over: the winner, or `None` for a draw
    pub winner: Option<Player>,
    pub game_over: bool,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let summary = run(&args)?;
    if args.json {
        return print_json(&summary);
    }

    print_section(&format!("Tic-Tac-Toe ({}, depth {})", summary.algorithm, summary.depth));
    println!("  Start:");
    print_block(&board_text(&summary.start));

    if summary.turns.is_empty() {
        println!("\n  No move to make.");
    }
    for turn in &summary.turns {
        print_section(&format!("{} plays {}", turn.player, turn.position));
        if let Some(value) = turn.report.value {
            print_kv("Value", &value.to_string());
        }
        print_kv("Nodes created", &format_number(turn.report.nodes_created));
        print_block(&board_text(&turn.board));
    }

    if summary.game_over {
        let result = match summary.winner {
            Some(player) => format!("{player} wins"),
            None => "draw".to_string(),
        };
        print_kv("Result", &result);
    }
    Ok(())
}

/// Choose one move (or play out the game) as described by `args`.
pub fn run(args: &PlayArgs) -> Result<PlaySummary> {
    let mut board = BoardState::from_string(&args.board)?;
    if let Some(player) = args.to_move {
        board = board.with_to_move(player);
    }
    if args.self_play && board.is_terminal() {
        board = board.reset();
    }

    let mut config = AdversarialConfig::new(args.depth);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    let mut search = args.algorithm.build::<BoardState>(&config)?;

    let start = board.encode();
    let mut turns = Vec::new();
    loop {
        let Some(chosen) = search.find(board) else {
            break;
        };
        turns.push(Turn {
            player: board.to_move,
            position: chosen.action.name.clone(),
            board: chosen.state.encode(),
            report: *search.report(),
        });
        board = chosen.state;
        if !args.self_play || board.is_terminal() {
            break;
        }
    }

    Ok(PlaySummary {
        algorithm: args.algorithm,
        depth: args.depth,
        start,
        turns,
        final_board: board.encode(),
        winner: board.winner(),
        game_over: board.is_terminal(),
    })
}

fn board_text(encoded: &str) -> String {
    BoardState::from_string(encoded)
        .map(|board| board.to_string())
        .unwrap_or_else(|_| encoded.to_string())
}
