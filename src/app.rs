//! Interactive terminal session

use crate::config::{resolve_seed, LifeConfig, Start};
use crate::error::Result;
use crate::help::LIFE_HELP;
use crate::life::{Engine, Grid, GridDimensions, Seed};
use crate::render::{render_generation, RenderAdapter};
use crate::scheduler::{FixedRate, Flow, Scheduler};
use crate::terminal::Terminal;
use crossterm::event::{KeyCode, KeyModifiers};
use tracing::{debug, info};

/// Frame rates selected by the digit keys 1-9
const FPS_PRESETS: [u32; 9] = [2, 5, 10, 15, 20, 30, 45, 60, 120];

/// What a key press asks the session to do
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Quit,
    TogglePause,
    Step,
    Reseed,
    SetFps(u32),
    ToggleHelp,
    None,
}

fn command_for(code: KeyCode, modifiers: KeyModifiers) -> Command {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => Command::Quit,
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Command::Quit,
        KeyCode::Char(' ') => Command::TogglePause,
        KeyCode::Char('n') => Command::Step,
        KeyCode::Char('r') => Command::Reseed,
        KeyCode::Char('?') => Command::ToggleHelp,
        KeyCode::Char(c @ '1'..='9') => {
            let slot = c as usize - '1' as usize;
            Command::SetFps(FPS_PRESETS[slot])
        }
        _ => Command::None,
    }
}

struct Session {
    config: LifeConfig,
    engine: Engine,
    paused: bool,
    step_once: bool,
}

impl Session {
    fn start(config: LifeConfig, surface: &dyn RenderAdapter) -> Result<Self> {
        let engine = Self::fresh_engine(&config, surface, config.start.seed())?;
        Ok(Self {
            config,
            engine,
            paused: false,
            step_once: false,
        })
    }

    fn fresh_engine(config: &LifeConfig, surface: &dyn RenderAdapter, seed: Seed) -> Result<Engine> {
        let (width, height) = surface.surface_size();
        let dims = GridDimensions::from_surface(width, height, config.cell_size)?;
        let mut engine = Engine::new(Grid::build(dims));
        engine.seed(seed);
        info!(
            columns = dims.columns(),
            rows = dims.rows(),
            population = engine.population(),
            "simulation started"
        );
        Ok(engine)
    }

    /// Fresh random cells for the `r` key, keeping the configured density
    fn random_seed(&self) -> Seed {
        let seed = resolve_seed(None);
        debug!(seed, "reseeding");
        match self.config.start {
            Start::Random { density, .. } => Seed::Random { seed, density },
            Start::Pattern(_) => Seed::random(seed),
        }
    }

    /// Rebuild the grid for a new surface size, restarting from the configured start
    fn resize(&mut self, surface: &dyn RenderAdapter) -> Result<()> {
        self.engine = Self::fresh_engine(&self.config, surface, self.config.start.seed())?;
        Ok(())
    }

    fn status(&self, fps: u32, scheme: &str) -> String {
        format!(
            " gen {}  pop {}  {} fps  {}{}  ? help",
            self.engine.generation(),
            self.engine.population(),
            fps,
            scheme,
            if self.paused { "  [paused]" } else { "" },
        )
    }

    /// One scheduler tick: input, resize, generation, frame
    fn frame(&mut self, term: &mut Terminal, scheduler: &mut FixedRate) -> Result<Flow> {
        while let Some((code, mods)) = term.check_key()? {
            if term.colors.handle_key(code) {
                continue;
            }
            match command_for(code, mods) {
                Command::Quit => return Ok(Flow::Stop),
                Command::TogglePause => self.paused = !self.paused,
                Command::Step => self.step_once = true,
                Command::Reseed => self.engine.seed(self.random_seed()),
                Command::SetFps(fps) => scheduler.set_fps(fps)?,
                Command::ToggleHelp => {
                    let shown = term.help_visible();
                    term.set_help((!shown).then_some(LIFE_HELP));
                }
                Command::None => {}
            }
        }

        if term.refresh_size()? {
            debug!(size = ?term.size(), "terminal resized");
            self.resize(&*term)?;
        }

        if !self.paused || std::mem::take(&mut self.step_once) {
            self.engine.tick()?;
        }

        term.set_status(self.status(scheduler.fps(), term.colors.scheme().name));
        render_generation(self.engine.grid(), term, self.config.cell_size)?;
        Ok(Flow::Continue)
    }
}

/// Run the interactive simulation until the user quits
pub fn run(config: LifeConfig) -> Result<()> {
    let mut scheduler = FixedRate::new(config.fps)?;
    let mut term = Terminal::new(config.draw_char, crate::colors::ColorState::new(config.color_scheme))?;
    let mut session = Session::start(config, &term)?;

    // first frame shows the seed generation untouched
    term.set_status(session.status(scheduler.fps(), term.colors.scheme().name));
    render_generation(session.engine.grid(), &mut term, config.cell_size)?;

    scheduler.drive(&mut |s| session.frame(&mut term, s))?;

    info!(
        generations = session.engine.generation(),
        population = session.engine.population(),
        "simulation stopped"
    );
    Ok(())
}
