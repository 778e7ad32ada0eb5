//! B3/S23 generation engine

use super::grid::{Generation, Grid, Seed};
use super::topology::CellIndex;
use crate::error::{LifeError, Result};
use tracing::debug;

/// Number of live cells among `neighbors` in `generation`
#[inline]
pub fn life_points(neighbors: &[CellIndex; 8], generation: &Generation) -> u8 {
    neighbors
        .iter()
        .map(|&n| generation.is_alive(n) as u8)
        .sum()
}

/// Next liveness of a cell given its live neighbor count
#[inline]
pub fn extinction(life_points: u8, alive: bool) -> bool {
    match (alive, life_points) {
        (false, 3) => true,
        (true, n) if !(2..=3).contains(&n) => false,
        _ => alive,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineState {
    Idle,
    Running,
}

pub struct Engine {
    grid: Grid,
    state: EngineState,
    generation: u64,
}

impl Engine {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            state: EngineState::Idle,
            generation: 0,
        }
    }

    /// Populate the first generation and start running
    pub fn seed(&mut self, seed: Seed) {
        self.grid.initialize_liveness(seed);
        self.state = EngineState::Running;
        self.generation = 0;
    }

    /// Compute one synchronous generation and return it
    pub fn tick(&mut self) -> Result<&Generation> {
        if self.state() == EngineState::Idle {
            return Err(LifeError::NotRunning);
        }
        let total = self.grid.dimensions().total();
        evaluate(&mut self.grid, 0..total);
        self.generation += 1;
        Ok(self.grid.current())
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.grid.current().population()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }
}

/// Evaluate every index yielded by `order` against the pre-tick snapshot, then
/// commit. `order` must visit each index exactly once.
pub(crate) fn evaluate(grid: &mut Grid, order: impl IntoIterator<Item = CellIndex>) {
    let mut next = grid.take_next();
    for index in order {
        next.set(index, extinction(grid.live_neighbors(index), grid.is_alive(index)));
    }
    grid.commit(next);
    debug!(population = grid.current().population(), "generation complete");
}
