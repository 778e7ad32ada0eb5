use crate::error::{LifeError, Result};
use crate::life::grid::DEFAULT_DENSITY;
use crate::life::patterns::{self, Pattern};
use crate::life::Seed;
use crate::settings::LifeSettings;
use tracing::warn;

pub const DEFAULT_FPS: u32 = 60;
pub const DEFAULT_CELL_SIZE: usize = 1;
pub const DEFAULT_DRAW_CHAR: char = '#';

/// Values given on the command line; `None` falls back to the settings file
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub fps: Option<u32>,
    pub cell_size: Option<usize>,
    pub draw_char: Option<char>,
    pub color_scheme: Option<u8>,
    pub density: Option<f64>,
    pub seed: Option<u64>,
    pub pattern: Option<String>,
}

/// Fully resolved configuration for an interactive run
#[derive(Clone, Copy)]
pub struct LifeConfig {
    pub fps: u32,
    pub cell_size: usize,
    pub draw_char: char,
    pub color_scheme: u8,
    pub start: Start,
}

/// How the first generation is chosen
#[derive(Clone, Copy)]
pub enum Start {
    Random { seed: u64, density: f64 },
    Pattern(&'static Pattern),
}

impl Start {
    /// A named pattern wins over random cells. Density is validated either way.
    pub fn from_options(pattern: Option<&str>, seed: Option<u64>, density: Option<f64>) -> Result<Self> {
        if let Some(density) = density {
            if !(0.0..=1.0).contains(&density) {
                return Err(LifeError::InvalidDensity(density));
            }
        }
        if let Some(name) = pattern {
            let pattern = patterns::find(name).ok_or_else(|| LifeError::UnknownPattern(name.to_string()))?;
            if seed.is_some() || density.is_some() {
                warn!(pattern = pattern.name, ?seed, ?density, "pattern start ignores seed and density");
            }
            return Ok(Start::Pattern(pattern));
        }
        let density = density.unwrap_or(DEFAULT_DENSITY);
        Ok(Start::Random { seed: resolve_seed(seed), density })
    }

    pub fn seed(&self) -> Seed {
        match *self {
            Start::Random { seed, density } => Seed::Random { seed, density },
            Start::Pattern(pattern) => Seed::Pattern(pattern),
        }
    }
}

impl LifeConfig {
    pub fn resolve(cli: Overrides, file: &LifeSettings) -> Result<Self> {
        let fps = cli.fps.or(file.fps).unwrap_or(DEFAULT_FPS);
        if fps == 0 {
            return Err(LifeError::InvalidFrameRate(fps));
        }
        let cell_size = cli.cell_size.or(file.cell_size).unwrap_or(DEFAULT_CELL_SIZE);
        if cell_size == 0 {
            return Err(LifeError::InvalidCellSize);
        }

        Ok(Self {
            fps,
            cell_size,
            draw_char: cli.draw_char.or(file.draw_char).unwrap_or(DEFAULT_DRAW_CHAR),
            color_scheme: cli.color_scheme.or(file.color_scheme).unwrap_or(0),
            start: Start::from_options(cli.pattern.as_deref(), cli.seed, cli.density.or(file.density))?,
        })
    }
}

/// Use the given seed, or derive one from the clock
pub fn resolve_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default()
    })
}
