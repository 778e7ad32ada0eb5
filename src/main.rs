mod app;
mod colors;
mod config;
mod error;
mod help;
mod life;
mod render;
mod scheduler;
mod settings;
mod terminal;

use clap::{Parser, Subcommand};
use config::{LifeConfig, Overrides, Start};
use error::Result;
use life::{patterns, Engine, Grid};
use render::{render_generation, TextSurface};
use scheduler::{Flow, Frames, Scheduler};
use settings::Settings;
use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "termlife")]
#[command(author = "Terminal Art Generator")]
#[command(version)]
#[command(about = "Conway's Game of Life on a toroidal grid, in the terminal", long_about = None)]
struct Cli {
    /// Write log output to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the animated simulation sized to the terminal
    Run {
        /// Target generations per second
        #[arg(short, long)]
        fps: Option<u32>,

        /// Terminal cells per grid cell on each side
        #[arg(short = 'S', long)]
        cell_size: Option<usize>,

        /// Random seed for reproducibility
        #[arg(short, long)]
        seed: Option<u64>,

        /// Start from a named pattern instead of random cells
        #[arg(short, long)]
        pattern: Option<String>,

        /// Probability of a cell starting alive (0.0-1.0)
        #[arg(short, long)]
        density: Option<f64>,

        /// Character used to draw live cells
        #[arg(short, long)]
        char: Option<char>,

        /// Color scheme (0-9)
        #[arg(short = 'C', long)]
        color: Option<u8>,

        /// Settings file (defaults to the per-user config.toml)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print a generation as text without an interactive display
    Print {
        #[arg(short = 'W', long)]
        columns: usize,

        #[arg(short = 'H', long)]
        rows: usize,

        /// Generations to advance before printing
        #[arg(short, long, default_value = "0")]
        generations: u64,

        /// Random seed for reproducibility
        #[arg(short, long)]
        seed: Option<u64>,

        /// Start from a named pattern instead of random cells
        #[arg(short, long)]
        pattern: Option<String>,

        /// Probability of a cell starting alive (0.0-1.0)
        #[arg(short, long)]
        density: Option<f64>,

        /// Character for live cells
        #[arg(long, default_value = "#")]
        alive: char,

        /// Character for dead cells
        #[arg(long, default_value = ".")]
        dead: char,
    },

    /// List the built-in patterns
    Patterns,
}

fn init_logging(log_file: Option<&PathBuf>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match log_file {
        Some(path) => {
            let file = File::create(path)?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        None => builder.with_writer(std::io::stderr).init(),
    }
    Ok(())
}

fn print_generation(columns: usize, rows: usize, generations: u64, start: Start, alive: char, dead: char) -> Result<()> {
    let mut engine = Engine::new(Grid::with_size(columns, rows)?);
    engine.seed(start.seed());

    Frames::new(generations).drive(&mut |_| {
        engine.tick()?;
        Ok(Flow::Continue)
    })?;

    let mut surface = TextSurface::new(columns, rows, alive, dead);
    render_generation(engine.grid(), &mut surface, 1)?;
    for line in surface.lines() {
        println!("{line}");
    }

    info!(
        generation = engine.generation(),
        population = engine.population(),
        "printed generation"
    );
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    init_logging(cli.log_file.as_ref())?;

    match cli.command {
        Commands::Run {
            fps,
            cell_size,
            seed,
            pattern,
            density,
            char: draw_char,
            color,
            config,
        } => {
            let settings = Settings::load(config.as_deref());
            let overrides = Overrides {
                fps,
                cell_size,
                draw_char,
                color_scheme: color,
                density,
                seed,
                pattern,
            };
            let config = LifeConfig::resolve(overrides, &settings.life)?;
            if let Start::Random { seed, .. } = config.start {
                info!(seed, "random start");
            }
            app::run(config)?;
        }
        Commands::Print {
            columns,
            rows,
            generations,
            seed,
            pattern,
            density,
            alive,
            dead,
        } => {
            let start = Start::from_options(pattern.as_deref(), seed, density)?;
            print_generation(columns, rows, generations, start, alive, dead)?;
        }
        Commands::Patterns => {
            for pattern in patterns::PATTERNS {
                println!(
                    "{:<12} {:>2}x{:<2}  {}",
                    pattern.name,
                    pattern.width(),
                    pattern.height(),
                    pattern.kind
                );
            }
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("termlife: {err}");
            ExitCode::from(2)
        }
    }
}
