use crossterm::event::KeyCode;
use crossterm::style::Color;

/// Shades for live cells (lonely, stable, crowded-birth) plus a status accent
pub struct Scheme {
    pub name: &'static str,
    pub shades: [Color; 3],
    pub accent: Color,
}

pub static SCHEMES: [Scheme; 10] = [
    Scheme { name: "matrix", shades: [Color::DarkGreen, Color::Green, Color::AnsiValue(10)], accent: Color::Green },
    Scheme { name: "fire", shades: [Color::DarkRed, Color::Red, Color::Yellow], accent: Color::DarkYellow },
    Scheme { name: "ice", shades: [Color::DarkBlue, Color::Blue, Color::Cyan], accent: Color::Cyan },
    Scheme { name: "pink", shades: [Color::DarkMagenta, Color::Magenta, Color::AnsiValue(13)], accent: Color::Magenta },
    Scheme { name: "gold", shades: [Color::DarkYellow, Color::Yellow, Color::AnsiValue(11)], accent: Color::Yellow },
    Scheme { name: "electric", shades: [Color::DarkCyan, Color::Cyan, Color::AnsiValue(14)], accent: Color::Cyan },
    Scheme { name: "lava", shades: [Color::DarkRed, Color::Red, Color::Magenta], accent: Color::Red },
    Scheme { name: "mono", shades: [Color::DarkGrey, Color::Grey, Color::White], accent: Color::White },
    Scheme { name: "rainbow", shades: [Color::Red, Color::Yellow, Color::Green], accent: Color::Cyan },
    Scheme { name: "neon", shades: [Color::DarkBlue, Color::Blue, Color::Magenta], accent: Color::Magenta },
];

/// Active color scheme, switched with Shift+digit
#[derive(Clone, Copy)]
pub struct ColorState {
    pub scheme: u8,
}

impl ColorState {
    pub fn new(default_scheme: u8) -> Self {
        Self { scheme: default_scheme.min(SCHEMES.len() as u8 - 1) }
    }

    /// Handle color scheme key input. Returns true if key was handled.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        // Shift+1..Shift+0 on a US layout
        const SHIFTED: [char; 10] = [')', '!', '@', '#', '$', '%', '^', '&', '*', '('];
        match code {
            KeyCode::Char(c) => match SHIFTED.iter().position(|&s| s == c) {
                Some(scheme) => {
                    self.scheme = scheme as u8;
                    true
                }
                None => false,
            },
            _ => false,
        }
    }

    pub fn scheme(&self) -> &'static Scheme {
        &SCHEMES[self.scheme as usize]
    }

    /// Color and boldness for a live cell of the given intensity (0-2)
    pub fn cell_color(&self, intensity: u8) -> (Color, bool) {
        let shades = &self.scheme().shades;
        let i = (intensity as usize).min(shades.len() - 1);
        (shades[i], i == shades.len() - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shifted_digits_select_schemes() {
        let mut colors = ColorState::new(0);
        assert!(colors.handle_key(KeyCode::Char('@')));
        assert_eq!(colors.scheme().name, "ice");
        assert!(colors.handle_key(KeyCode::Char(')')));
        assert_eq!(colors.scheme().name, "matrix");
        assert!(!colors.handle_key(KeyCode::Char('x')));
        assert!(!colors.handle_key(KeyCode::Esc));
    }

    #[test]
    fn out_of_range_scheme_clamps() {
        assert_eq!(ColorState::new(42).scheme().name, "neon");
    }

    #[test]
    fn brightest_shade_is_bold() {
        let colors = ColorState::new(7);
        assert_eq!(colors.cell_color(0), (Color::DarkGrey, false));
        assert_eq!(colors.cell_color(2), (Color::White, true));
        assert_eq!(colors.cell_color(9), (Color::White, true));
    }
}
