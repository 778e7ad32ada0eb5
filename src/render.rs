//! Drawing surfaces and the per-frame live-cell pass

use crate::error::Result;
use crate::life::Grid;

/// Axis-aligned rectangle in surface pixels
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelRect {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

/// Anything that can clear itself and draw filled cell rectangles
pub trait RenderAdapter {
    /// Drawable area in pixels
    fn surface_size(&self) -> (usize, usize);
    fn clear(&mut self);
    /// Draw one live cell; `intensity` (0-2) picks a shade
    fn draw_cell(&mut self, rect: PixelRect, intensity: u8);
    fn present(&mut self) -> Result<()>;
}

/// Shade for a live cell from its neighbor count
fn intensity(live_neighbors: u8) -> u8 {
    match live_neighbors {
        2 => 1,
        3 => 2,
        _ => 0,
    }
}

/// Clear the surface and draw every live cell of the current generation.
pub fn render_generation(grid: &Grid, surface: &mut dyn RenderAdapter, cell_size: usize) -> Result<()> {
    surface.clear();
    for cell in grid.cells().iter().filter(|cell| grid.is_alive(cell.index)) {
        let rect = PixelRect {
            x: cell.coordinate.x * cell_size,
            y: cell.coordinate.y * cell_size,
            width: cell_size,
            height: cell_size,
        };
        surface.draw_cell(rect, intensity(grid.live_neighbors(cell.index)));
    }
    surface.present()
}

/// In-memory character surface, one char per pixel
pub struct TextSurface {
    width: usize,
    height: usize,
    alive: char,
    dead: char,
    pixels: Vec<Vec<char>>,
}

impl TextSurface {
    pub fn new(width: usize, height: usize, alive: char, dead: char) -> Self {
        Self {
            width,
            height,
            alive,
            dead,
            pixels: vec![vec![dead; width]; height],
        }
    }

    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.pixels.iter().map(|row| row.iter().collect())
    }
}

impl RenderAdapter for TextSurface {
    fn surface_size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        for row in &mut self.pixels {
            row.fill(self.dead);
        }
    }

    fn draw_cell(&mut self, rect: PixelRect, _intensity: u8) {
        for y in rect.y..(rect.y + rect.height).min(self.height) {
            for x in rect.x..(rect.x + rect.width).min(self.width) {
                self.pixels[y][x] = self.alive;
            }
        }
    }

    fn present(&mut self) -> Result<()> {
        Ok(())
    }
}
