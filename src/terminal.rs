use crate::colors::ColorState;
use crate::error::Result;
use crate::help;
use crate::render::{PixelRect, RenderAdapter};
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{poll, read, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{
        disable_raw_mode, enable_raw_mode, size, Clear, ClearType, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use std::io::{self, stdout, Write};
use std::time::Duration;

/// Terminal back buffer drawn with crossterm. One character cell is one pixel.
pub struct Terminal {
    width: u16,
    height: u16,
    buffer: Vec<Vec<Cell>>,
    draw_char: char,
    status: String,
    help: Option<&'static str>,
    pub colors: ColorState,
}

/// A single cell in the terminal buffer
#[derive(Clone)]
struct Cell {
    ch: char,
    fg: Option<Color>,
    bold: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: None,
            bold: false,
        }
    }
}

impl Terminal {
    /// Enter raw mode and the alternate screen
    pub fn new(draw_char: char, colors: ColorState) -> io::Result<Self> {
        let (width, height) = size()?;

        enable_raw_mode()?;
        execute!(stdout(), EnterAlternateScreen, Hide, Clear(ClearType::All))?;

        Ok(Self {
            width,
            height,
            buffer: vec![vec![Cell::default(); width as usize]; height as usize],
            draw_char,
            status: String::new(),
            help: None,
            colors,
        })
    }

    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// Pick up a new terminal size. Returns true if it changed.
    pub fn refresh_size(&mut self) -> io::Result<bool> {
        let (width, height) = size()?;
        if (width, height) == (self.width, self.height) {
            return Ok(false);
        }
        self.width = width;
        self.height = height;
        self.buffer = vec![vec![Cell::default(); width as usize]; height as usize];
        execute!(stdout(), Clear(ClearType::All))?;
        Ok(true)
    }

    /// Set a character at position with optional color
    pub fn set(&mut self, x: i32, y: i32, ch: char, fg: Option<Color>, bold: bool) {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            self.buffer[y as usize][x as usize] = Cell { ch, fg, bold };
        }
    }

    /// Set a string starting at position
    pub fn set_str(&mut self, x: i32, y: i32, s: &str, fg: Option<Color>, bold: bool) {
        for (i, ch) in s.chars().enumerate() {
            self.set(x + i as i32, y, ch, fg, bold);
        }
    }

    /// Status message for the bottom row, which the grid never uses
    pub fn set_status(&mut self, text: String) {
        self.status = text;
    }

    /// Help text drawn over the grid on every frame while set
    pub fn set_help(&mut self, text: Option<&'static str>) {
        self.help = text;
    }

    pub fn help_visible(&self) -> bool {
        self.help.is_some()
    }

    fn draw_status(&mut self) {
        let y = self.height as i32 - 1;
        let accent = self.colors.scheme().accent;
        let status = std::mem::take(&mut self.status);
        self.set_str(0, y, &status, Some(accent), false);
        self.status = status;
    }

    /// Flush the whole back buffer to the screen
    fn flush(&self) -> io::Result<()> {
        let mut out = stdout();
        let mut pen: Option<(Option<Color>, bool)> = None;

        for (y, row) in self.buffer.iter().enumerate() {
            queue!(out, MoveTo(0, y as u16))?;
            for cell in row {
                if pen != Some((cell.fg, cell.bold)) {
                    queue!(out, SetAttribute(Attribute::Reset), ResetColor)?;
                    if cell.bold {
                        queue!(out, SetAttribute(Attribute::Bold))?;
                    }
                    if let Some(color) = cell.fg {
                        queue!(out, SetForegroundColor(color))?;
                    }
                    pen = Some((cell.fg, cell.bold));
                }
                queue!(out, Print(cell.ch))?;
            }
        }

        queue!(out, SetAttribute(Attribute::Reset), ResetColor)?;
        out.flush()
    }

    /// Check for keypress (non-blocking), returns (code, modifiers)
    pub fn check_key(&self) -> io::Result<Option<(KeyCode, KeyModifiers)>> {
        if poll(Duration::from_millis(0))? {
            if let Event::Key(key_event) = read()? {
                if key_event.kind != KeyEventKind::Release {
                    return Ok(Some((key_event.code, key_event.modifiers)));
                }
            }
        }
        Ok(None)
    }
}

impl RenderAdapter for Terminal {
    fn surface_size(&self) -> (usize, usize) {
        (self.width as usize, self.height.saturating_sub(1) as usize)
    }

    fn clear(&mut self) {
        for row in &mut self.buffer {
            row.fill(Cell::default());
        }
    }

    fn draw_cell(&mut self, rect: PixelRect, intensity: u8) {
        let (color, bold) = self.colors.cell_color(intensity);
        let (_, max_y) = self.surface_size();
        for y in rect.y..(rect.y + rect.height).min(max_y) {
            for x in rect.x..rect.x + rect.width {
                self.set(x as i32, y as i32, self.draw_char, Some(color), bold);
            }
        }
    }

    fn present(&mut self) -> Result<()> {
        self.draw_status();
        if let Some(text) = self.help {
            help::render_help_overlay(self, text);
        }
        Ok(self.flush()?)
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        if let Err(err) = execute!(stdout(), Show, LeaveAlternateScreen) {
            tracing::error!(?err, "failed to leave alternate screen");
        }
        if let Err(err) = disable_raw_mode() {
            tracing::error!(?err, "failed to disable raw mode");
        }
    }
}
