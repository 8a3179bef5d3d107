// main.rs - Async Conway's Game of Life viewer with row coroutines
// The engine steps every row as a tokio task; this shell only draws snapshots.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use eframe::egui;
use egui::Color32;
use life_engine::{Coord, GridState, LifeError, SimulationEngine, patterns};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod cycle;  // Repeat detection
mod ui;     // eframe::App impl

use cycle::CycleDetector;

/// Command-line options for the viewer window.
#[derive(Debug, Parser)]
#[command(author, version, about = "Conway's Game of Life viewer", long_about = None)]
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
    /// Load generation 0 from a `#`/`.` text file.
    #[arg(long, value_name = "PATH")]
    seed_file: Option<PathBuf>,
    /// Generations per second while running, clamped to 0.5..=90.
    #[arg(long, default_value_t = 25.0)]
    fps: f32,
}

/// Parser for a grid dimension: a positive integer.
fn grid_size() -> clap::builder::RangedU64ValueParser<usize> {
    clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let app = GameOfLife::new(&args)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([820.0, 900.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Async Conway's Game of Life",
        options,
        Box::new(move |_cc| Box::new(app)),
    )
    .map_err(|err| anyhow!("viewer window failed: {err}"))
}

/// Interval between generations for a requested rate, clamped to the speed
/// slider's range. Non-finite rates fall back to 25 per second.
pub fn frame_interval(per_second: f32) -> Duration {
    let rate = if per_second.is_finite() { per_second.clamp(0.5, 90.0) } else { 25.0 };
    Duration::from_secs_f32(1.0 / rate)
}

/// Viewer state around a single simulation engine.
pub struct GameOfLife {
    engine: SimulationEngine,

    pub grid: Arc<GridState>,  // Snapshot being drawn
    pub is_running: bool,
    pub last_update: Instant,
    pub update_interval: Duration,
    pub live_color: Color32,
    pub dead_color: Color32,
    pub selected_pattern: usize,
    pub status: Option<String>,

    runtime: tokio::runtime::Runtime,
    cycles: CycleDetector,
    random_seed: u64,
}

impl GameOfLife {
    fn new(args: &Args) -> Result<Self> {
        let state = if let Some(path) = &args.seed_file {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading seed file {}", path.display()))?;
            GridState::from_text(&text).with_context(|| format!("parsing seed file {}", path.display()))?
        } else if let Some(seed) = args.random {
            GridState::new(args.columns, args.rows, patterns::random_soup(args.columns, args.rows, seed))?
        } else {
            let pattern = patterns::find(&args.pattern)
                .with_context(|| format!("unknown pattern {:?}", args.pattern))?;
            GridState::new(args.columns, args.rows, pattern.centered(args.columns, args.rows))?
        };

        let selected_pattern = patterns::PATTERNS
            .iter()
            .position(|p| p.name.eq_ignore_ascii_case(&args.pattern))
            .unwrap_or(0);
        let runtime = tokio::runtime::Runtime::new().context("starting tokio runtime")?;

        let (columns, rows) = state.dimensions();
        info!(columns, rows, population = state.population(), "viewer seeded");

        let engine = SimulationEngine::from_state(state);
        let mut app = Self {
            grid: engine.snapshot(),
            engine,
            is_running: false,
            last_update: Instant::now(),
            update_interval: frame_interval(args.fps),
            live_color: Color32::WHITE,
            dead_color: Color32::BLACK,
            selected_pattern,
            status: None,
            runtime,
            cycles: CycleDetector::default(),
            random_seed: args.random.unwrap_or(0),
        };
        app.cycles.observe(&app.grid);
        Ok(app)
    }

    pub fn generation(&self) -> u64 {
        self.engine.generation()
    }

    /// Replaces the simulation with a fresh one at generation 0.
    fn reseed(&mut self, live: Vec<Coord>) {
        let (columns, rows) = self.engine.dimensions();
        match SimulationEngine::new(columns, rows, live) {
            Ok(engine) => {
                self.engine = engine;
                self.grid = self.engine.snapshot();
                self.cycles.reset();
                self.cycles.observe(&self.grid);
                self.status = None;
            }
            Err(err) => self.report(err),
        }
    }

    fn report(&mut self, err: LifeError) {
        warn!(%err, "reseed rejected");
        self.status = Some(err.to_string());
    }
}

/// Control surface the UI drives.
pub trait GameOfLifeInterface {
    fn update_generation(&mut self);
    fn clear_grid(&mut self);
    fn apply_selected_pattern(&mut self);
    fn apply_random_pattern(&mut self);
    fn toggle_cell(&mut self, coord: Coord);
}

impl GameOfLifeInterface for GameOfLife {
    fn update_generation(&mut self) {
        self.grid = self.runtime.block_on(self.engine.step_concurrent());

        if self.cycles.observe(&self.grid) {
            info!(generation = self.engine.generation(), "cycle detected, pausing");
            self.is_running = false;
            self.status = Some(format!("Repeating pattern at generation {}", self.engine.generation()));
        }
    }

    fn clear_grid(&mut self) {
        self.reseed(Vec::new());
    }

    fn apply_selected_pattern(&mut self) {
        if let Some(pattern) = patterns::PATTERNS.get(self.selected_pattern) {
            let (columns, rows) = self.engine.dimensions();
            self.reseed(pattern.centered(columns, rows));
        }
    }

    fn apply_random_pattern(&mut self) {
        self.random_seed = self.random_seed.wrapping_add(1);
        let (columns, rows) = self.engine.dimensions();
        self.reseed(patterns::random_soup(columns, rows, self.random_seed));
    }

    fn toggle_cell(&mut self, coord: Coord) {
        let Some(alive) = self.grid.get(coord) else {
            return;
        };
        let mut live: Vec<Coord> = self.grid.live_cells().filter(|&c| c != coord).collect();
        if !alive {
            live.push(coord);
        }
        self.reseed(live);
    }
}
