//! Cell grid: precomputed torus topology plus the two generation buffers

use super::patterns::Pattern;
use super::topology::{
    cell_index, coordinate_of, wrap, CellIndex, Coordinate, GridDimensions, NEIGHBOR_MASK,
};
use crate::error::Result;
use rand::prelude::*;
use tracing::{debug, warn};

/// Probability of a cell starting alive under the default random seed
pub const DEFAULT_DENSITY: f64 = 0.5;

/// One grid position and the indices of its eight neighbors
#[derive(Clone, Debug)]
pub struct Cell {
    pub index: CellIndex,
    pub coordinate: Coordinate,
    pub neighbors: [CellIndex; 8],
}

/// Liveness of every cell at one tick
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Generation {
    alive: Vec<bool>,
}

impl Generation {
    pub fn dead(len: usize) -> Self {
        Self { alive: vec![false; len] }
    }

    pub fn from_fn(len: usize, f: impl FnMut(CellIndex) -> bool) -> Self {
        Self { alive: (0..len).map(f).collect() }
    }

    #[inline]
    pub fn is_alive(&self, index: CellIndex) -> bool {
        self.alive[index]
    }

    #[inline]
    pub fn set(&mut self, index: CellIndex, alive: bool) {
        self.alive[index] = alive;
    }

    pub fn population(&self) -> usize {
        self.alive.iter().filter(|&&a| a).count()
    }

    #[cfg(test)]
    pub fn live_indices(&self) -> impl Iterator<Item = CellIndex> + '_ {
        self.alive
            .iter()
            .enumerate()
            .filter_map(|(i, &a)| a.then_some(i))
    }
}

/// How the first generation is populated
pub enum Seed {
    /// Each cell independently alive with probability `density`
    Random { seed: u64, density: f64 },
    /// A named pattern centred on the grid
    Pattern(&'static Pattern),
    /// Caller-supplied liveness per index
    #[allow(dead_code)] // library entry point; the binary only seeds randomly or from patterns
    With(Box<dyn Fn(CellIndex) -> bool>),
}

impl Seed {
    pub fn random(seed: u64) -> Self {
        Seed::Random { seed, density: DEFAULT_DENSITY }
    }
}

pub struct Grid {
    dims: GridDimensions,
    cells: Vec<Cell>,
    current: Generation,
    next: Generation,
}

impl Grid {
    /// Build every cell and its wrapped neighbor indices, row-major.
    pub fn build(dims: GridDimensions) -> Self {
        let total = dims.total();
        let mut cells = Vec::with_capacity(total);

        for index in 0..total {
            let coordinate = coordinate_of(index, dims);
            let neighbors =
                NEIGHBOR_MASK.map(|offset| cell_index(wrap(coordinate, offset, dims), dims));
            debug_assert!(neighbors.iter().all(|&n| n < total));
            cells.push(Cell {
                index,
                coordinate,
                neighbors,
            });
        }

        debug!(columns = dims.columns(), rows = dims.rows(), "built torus topology");

        Self {
            dims,
            cells,
            current: Generation::dead(total),
            next: Generation::dead(total),
        }
    }

    pub fn with_size(columns: usize, rows: usize) -> Result<Self> {
        Ok(Self::build(GridDimensions::new(columns, rows)?))
    }

    /// Populate the current generation. The next buffer is left as scratch.
    pub fn initialize_liveness(&mut self, seed: Seed) {
        let total = self.dims.total();
        self.current = match seed {
            Seed::Random { seed, density } => {
                let mut rng = StdRng::seed_from_u64(seed);
                let density = density.clamp(0.0, 1.0);
                Generation::from_fn(total, |_| rng.gen_bool(density))
            }
            Seed::Pattern(pattern) => self.place(pattern),
            Seed::With(f) => Generation::from_fn(total, f),
        };
        debug!(population = self.current.population(), "initialized liveness");
    }

    fn place(&self, pattern: &Pattern) -> Generation {
        let (columns, rows) = (self.dims.columns(), self.dims.rows());
        if pattern.width() > columns || pattern.height() > rows {
            warn!(
                pattern = pattern.name,
                columns, rows, "pattern is larger than the grid and will wrap onto itself"
            );
        }

        let origin_x = columns.saturating_sub(pattern.width()) / 2;
        let origin_y = rows.saturating_sub(pattern.height()) / 2;
        let mut generation = Generation::dead(self.dims.total());
        for &(dx, dy) in pattern.cells {
            let coord = Coordinate {
                x: (origin_x + dx) % columns,
                y: (origin_y + dy) % rows,
            };
            generation.set(cell_index(coord, self.dims), true);
        }
        generation
    }

    pub fn dimensions(&self) -> GridDimensions {
        self.dims
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn current(&self) -> &Generation {
        &self.current
    }

    #[inline]
    pub fn is_alive(&self, index: CellIndex) -> bool {
        self.current.is_alive(index)
    }

    #[inline]
    pub fn neighbors_of(&self, index: CellIndex) -> &[CellIndex; 8] {
        &self.cells[index].neighbors
    }

    /// Live neighbors of `index` in the current generation
    pub fn live_neighbors(&self, index: CellIndex) -> u8 {
        super::engine::life_points(self.neighbors_of(index), &self.current)
    }

    /// Hand out the next buffer for writing while the grid stays readable
    pub(crate) fn take_next(&mut self) -> Generation {
        std::mem::take(&mut self.next)
    }

    /// Install a fully written next generation as current
    pub(crate) fn commit(&mut self, next: Generation) {
        debug_assert_eq!(next.alive.len(), self.dims.total());
        self.next = std::mem::replace(&mut self.current, next);
    }
}
