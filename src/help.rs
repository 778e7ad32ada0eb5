use crate::terminal::Terminal;
use crossterm::style::Color;

pub const LIFE_HELP: &str = "\
GAME OF LIFE
─────────────────
 Space   Pause/resume
 n       Step once (paused)
 r       Reseed randomly
 1-9     Speed (1=slow, 9=fast)
 !-()    Color scheme
 q/Esc   Quit
 ?       Close help";

/// Box `help_text` and draw it centred in the terminal back buffer.
pub fn render_help_overlay(term: &mut Terminal, help_text: &str) {
    let lines: Vec<&str> = help_text.lines().collect();
    if lines.is_empty() {
        return;
    }

    let (width, height) = term.size();
    let inner = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) + 2;
    let left = (width as usize).saturating_sub(inner + 2) as i32 / 2;
    let top = (height as usize).saturating_sub(lines.len() + 2) as i32 / 2;
    let right = left + inner as i32 + 1;
    let bottom = top + lines.len() as i32 + 1;

    let border = Some(Color::White);
    let text = Some(Color::Grey);

    let rule = "─".repeat(inner);
    term.set_str(left, top, &format!("┌{rule}┐"), border, false);
    for (i, line) in lines.iter().enumerate() {
        let y = top + 1 + i as i32;
        term.set(left, y, '│', border, false);
        term.set_str(left + 1, y, &format!(" {line:<w$} ", w = inner - 2), text, false);
        term.set(right, y, '│', border, false);
    }
    term.set_str(left, bottom, &format!("└{rule}┘"), border, false);
}
