//! Conway's Game of Life on a torus
//!
//! `topology` maps coordinates onto the wrap-around grid, `grid` owns the cells
//! and the current/next generation buffers, and `engine` applies B3/S23 once
//! per tick.

pub mod engine;
pub mod grid;
pub mod patterns;
pub mod topology;

pub use engine::Engine;
pub use grid::{Grid, Seed};
pub use topology::GridDimensions;
