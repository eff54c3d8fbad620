use std::io;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use mazepath_cli::output::{failure_message, render, OutputFormat};
use mazepath_lib::{
    load_maze, plan_search, Grid, Heuristic, PairwiseDistance, SearchConfig, SearchMethod,
    SearchRequest, SearchSummary,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Shortest-path search over text mazes")]
struct Cli {
    /// Output format for search results.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// JSON file with default search settings. Explicit flags take precedence.
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search a maze file from its start cell to the nearest objective.
    Search(SearchArgs),
}

#[derive(Args, Debug)]
struct SearchArgs {
    /// Path to the maze file.
    maze: PathBuf,
    /// Search method.
    #[arg(long, default_value_t = SearchMethod::AStar)]
    method: SearchMethod,
    /// Heuristic guiding A* (e.g. min-manhattan, precomputed-dijkstra).
    #[arg(long)]
    heuristic: Option<Heuristic>,
    /// Distance between objectives used by precomputed-dijkstra (manhattan or grid).
    #[arg(long)]
    pairwise: Option<PairwiseDistance>,
    /// Stop after expanding this many states.
    #[arg(long)]
    max_expansions: Option<usize>,
    /// Stop after this many milliseconds.
    #[arg(long)]
    timeout_ms: Option<u64>,
}

impl SearchArgs {
    fn apply(&self, config: &mut SearchConfig) {
        if let Some(heuristic) = self.heuristic {
            config.heuristic = heuristic;
        }
        if let Some(pairwise) = self.pairwise {
            config.pairwise = pairwise;
        }
        if self.max_expansions.is_some() {
            config.max_expansions = self.max_expansions;
        }
        if self.timeout_ms.is_some() {
            config.timeout_ms = self.timeout_ms;
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match &cli.command {
        Command::Search(args) => handle_search(cli.config.as_deref(), cli.format, args),
    }
}

fn handle_search(
    config_path: Option<&Path>,
    format: OutputFormat,
    args: &SearchArgs,
) -> Result<()> {
    let mut config = match config_path {
        Some(path) => SearchConfig::load(path)
            .with_context(|| format!("failed to load search config from {}", path.display()))?,
        None => SearchConfig::default(),
    };
    args.apply(&mut config);

    let maze = load_maze(&args.maze)
        .with_context(|| format!("failed to load maze from {}", args.maze.display()))?;
    let request = SearchRequest {
        method: args.method,
        config,
    };
    let report = plan_search(&maze, &request)
        .with_context(|| format!("search with method {} failed", request.method))?;
    let summary = SearchSummary::from_report(&request, maze.start(), &report);

    if let Some(message) = failure_message(&summary) {
        if format == OutputFormat::Json {
            render(&summary, format, &mut io::stdout().lock())?;
        }
        bail!(message);
    }

    render(&summary, format, &mut io::stdout().lock())?;
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
