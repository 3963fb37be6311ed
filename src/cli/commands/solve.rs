//! Solve command - find a move sequence for the sliding-tile puzzle

use std::{cell::Cell, path::PathBuf, time::Duration};

use anyhow::{Context, Result, bail};
use clap::Parser;
use rand::{SeedableRng, random, rngs::StdRng};
use serde::Serialize;

use crate::{
    adapters::{Chain, Deadline, ExpansionLimit},
    cli::output::{
        create_spinner, format_number, print_block, print_json, print_kv, print_section,
    },
    config::{SearchConfig, StrategyKind},
    domains::puzzle::Puzzle,
    ports::{NodeVisited, SearchObserver, Visit},
    search::{Search, SearchReport},
};

#[derive(Parser, Debug)]
#[command(about = "Solve a sliding-tile puzzle")]
pub struct SolveArgs {
    /// Start layout: nine tiles, 0 for the blank (e.g. 1,2,3,4,5,6,7,0,8)
    #[arg(long, short = 't')]
    pub tiles: Option<String>,

    /// Start from the goal scrambled by this many random moves instead
    #[arg(long, conflicts_with = "tiles")]
    pub scramble: Option<usize>,

    /// Random seed for --scramble
    #[arg(long)]
    pub seed: Option<u64>,

    /// Frontier strategy: bfs, dfs, dls:<limit>, greedy, a-star
    #[arg(long, short = 's')]
    pub strategy: Option<StrategyKind>,

    /// Skip states that were already generated
    #[arg(long)]
    pub avoid_repetition: bool,

    /// JSON search configuration; command-line flags take precedence
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Cancel after this many node visits
    #[arg(long)]
    pub max_expansions: Option<usize>,

    /// Cancel after this many milliseconds
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// Print a JSON report instead of text
    #[arg(long)]
    pub json: bool,
}

/// Everything `solve` reports.
#[derive(Debug, Clone, Serialize)]
pub struct SolveSummary {
    pub start: [u8; 9],
    pub avoid_repetition: bool,
    #[serde(flatten)]
    pub report: SearchReport,
    /// Layout after the last solution move
    pub finish: Option<[u8; 9]>,
}

pub fn execute(args: SolveArgs) -> Result<()> {
    let summary = run(&args)?;
    if args.json {
        return print_json(&summary);
    }

    print_section("Sliding puzzle");
    print_kv("Strategy", &summary.report.strategy);
    print_kv("Avoid repetition", &summary.avoid_repetition.to_string());
    println!("  Start:");
    print_block(&tiles_text(summary.start));

    print_section("Result");
    print_kv("Outcome", summary.report.outcome.as_str());
    print_kv("Expansions", &format_number(summary.report.stats.expansions));
    print_kv("Nodes created", &format_number(summary.report.stats.nodes_created));
    print_kv("Deepest node", &summary.report.stats.max_depth.to_string());
    if summary.report.outcome.is_success() {
        print_kv("Moves", &summary.report.actions.len().to_string());
        print_kv("Cost", &summary.report.cost.to_string());
        print_kv("Solution", &summary.report.actions.join(" "));
    }
    Ok(())
}

/// Run the search described by `args` and collect its summary.
pub fn run(args: &SolveArgs) -> Result<SolveSummary> {
    let start = start_layout(args)?;
    if !start.is_solvable() {
        bail!("layout {:?} cannot reach the goal", start.tiles());
    }

    let config = resolve_config(args)?;
    let mut search = Search::from_config(&config);

    let spinner = create_spinner("searching", !args.json);
    let visits = Cell::new(0usize);
    let progress = |_: &NodeVisited<'_, Puzzle>| {
        visits.set(visits.get() + 1);
        if visits.get().is_multiple_of(1000) {
            spinner.set_message(format!("{} nodes visited", format_number(visits.get())));
            spinner.tick();
        }
        Visit::Continue
    };
    let mut deadline = args
        .timeout_ms
        .map(|ms| Deadline::after(Duration::from_millis(ms)));
    let timeout = move |event: &NodeVisited<'_, Puzzle>| match deadline.as_mut() {
        Some(deadline) => deadline.on_node_visited(event),
        None => Visit::Continue,
    };
    let limit = ExpansionLimit::new(args.max_expansions.unwrap_or(usize::MAX));

    let mut observer = Chain::new(limit, Chain::new(timeout, progress));
    search.find_with(start, &mut observer)?;
    spinner.finish_and_clear();

    let finish = search.solution_states().last().map(|state| *state.tiles());
    Ok(SolveSummary {
        start: *start.tiles(),
        avoid_repetition: config.avoid_repetition,
        report: search.report(),
        finish,
    })
}

fn start_layout(args: &SolveArgs) -> Result<Puzzle> {
    match (&args.tiles, args.scramble) {
        (Some(tiles), _) => Ok(tiles.parse::<Puzzle>()?),
        (None, Some(steps)) => {
            let mut rng = StdRng::seed_from_u64(args.seed.unwrap_or_else(random));
            Ok(Puzzle::scrambled(steps, &mut rng))
        }
        (None, None) => bail!("provide a start layout with --tiles or --scramble"),
    }
}

fn resolve_config(args: &SolveArgs) -> Result<SearchConfig> {
    let mut config = match &args.config {
        Some(path) => SearchConfig::load(path)
            .with_context(|| format!("loading search config from {}", path.display()))?,
        None => SearchConfig::default(),
    };
    if let Some(strategy) = args.strategy {
        config.strategy = Some(strategy);
    }
    config.strategy.get_or_insert(StrategyKind::AStar);
    config.avoid_repetition |= args.avoid_repetition;
    Ok(config)
}

fn tiles_text(tiles: [u8; 9]) -> String {
    Puzzle::from_tiles(tiles)
        .map(|puzzle| puzzle.to_string())
        .unwrap_or_else(|_| format!("{tiles:?}"))
}
