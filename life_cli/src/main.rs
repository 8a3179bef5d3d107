// main.rs - Headless Game of Life: prints generations as `#`/`.` matrices

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use life_engine::{GridState, SimulationEngine, patterns};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Runs a bounded Game of Life grid and dumps the generations as text.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of grid columns.
    #[arg(long, default_value_t = 160, value_parser = grid_size())]
    columns: usize,
    /// Number of grid rows.
    #[arg(long, default_value_t = 129, value_parser = grid_size())]
    rows: usize,
    /// Name of the pattern placed at the center of the grid.
    #[arg(long, default_value = "R-pentomino", conflicts_with_all = ["random", "seed_file"])]
    pattern: String,
    /// Fill the grid with a pseudo-random soup from this seed.
    #[arg(long, value_name = "SEED", conflicts_with = "seed_file")]
    random: Option<u64>,
    /// Load generation 0 from a `#`/`.` text file; overrides --columns/--rows.
    #[arg(long, value_name = "PATH")]
    seed_file: Option<PathBuf>,
    /// Number of generations to run.
    #[arg(long, default_value_t = 10)]
    steps: u64,
    /// Print every k-th generation (generation 0 and the last are always printed).
    #[arg(long, value_name = "K", default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    every: u64,
    /// Evaluate each generation with one tokio task per row.
    #[arg(long)]
    concurrent: bool,
    /// List the built-in patterns and exit.
    #[arg(long)]
    list_patterns: bool,
}

/// Parser for a grid dimension: a positive integer.
fn grid_size() -> clap::builder::RangedU64ValueParser<usize> {
    clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if args.list_patterns {
        for pattern in patterns::PATTERNS {
            writeln!(out, "{} ({}x{})", pattern.name, pattern.width(), pattern.height())?;
        }
        return Ok(());
    }

    let state = initial_state(&args)?;
    let mut engine = SimulationEngine::from_state(state);
    info!(
        columns = engine.dimensions().0,
        rows = engine.dimensions().1,
        steps = args.steps,
        concurrent = args.concurrent,
        "running"
    );

    print_generation(&mut out, engine.generation(), engine.current())?;

    let runtime = if args.concurrent {
        Some(tokio::runtime::Runtime::new().context("starting tokio runtime")?)
    } else {
        None
    };

    for _ in 0..args.steps {
        let grid = match &runtime {
            Some(runtime) => runtime.block_on(engine.step_concurrent()),
            None => engine.step(),
        };
        let generation = engine.generation();
        if generation % args.every == 0 || generation == args.steps {
            print_generation(&mut out, generation, &grid)?;
        } else {
            debug!(generation, population = grid.population(), "skipped");
        }
    }

    out.flush()?;
    Ok(())
}

fn initial_state(args: &Args) -> Result<GridState> {
    if let Some(path) = &args.seed_file {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading seed file {}", path.display()))?;
        return GridState::from_text(&text)
            .with_context(|| format!("parsing seed file {}", path.display()));
    }

    let live = match args.random {
        Some(seed) => patterns::random_soup(args.columns, args.rows, seed),
        None => patterns::find(&args.pattern)
            .with_context(|| format!("unknown pattern {:?}, try --list-patterns", args.pattern))?
            .centered(args.columns, args.rows),
    };
    GridState::new(args.columns, args.rows, live).context("building generation 0")
}

fn print_generation(out: &mut impl Write, generation: u64, grid: &GridState) -> io::Result<()> {
    writeln!(out, "generation {} (population {})", generation, grid.population())?;
    writeln!(out, "{grid}")?;
    writeln!(out)
}
