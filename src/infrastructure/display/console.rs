//! Text console renderer.
//!
//! Same observer contract as the panel: look at the current node, never
//! touch it. Lines are terminated with `\r\n` when the terminal is in raw mode.

use std::io::Write;

use crossterm::{
    cursor, execute,
    terminal::{self, ClearType},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::domain::ports::FrameObserver;
use crate::domain::view::MenuView;
use crate::error::MenuResult;

/// Key hint printed under the menu
pub const HELP_LINE: &str = "[Use arrow keys: ↑ ↓ → Enter  ← Back]";

/// Render a view to plain text
pub fn render_text(view: &MenuView, max_width: Option<usize>) -> String {
    let mut lines = Vec::with_capacity(view.items.len() + 4);
    lines.push(String::new());
    lines.push(format!("=== {} ===", view.title));
    for item in &view.items {
        let cursor = if item.selected { " > " } else { "   " };
        lines.push(format!("{}{}", cursor, item.label));
    }
    lines.push(String::new());
    lines.push(HELP_LINE.to_string());

    let mut out = String::new();
    for line in lines {
        match max_width {
            Some(width) => out.push_str(&truncate_to_width(&line, width)),
            None => out.push_str(&line),
        }
        out.push('\n');
    }
    out
}

/// Cut `s` so its display width fits in `width` columns
pub fn truncate_to_width(s: &str, width: usize) -> String {
    if s.width() <= width {
        return s.to_string();
    }
    let mut used = 0;
    let mut out = String::new();
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        out.push(ch);
    }
    out
}

/// Console renderer writing to any `Write`
pub struct ConsoleRenderer {
    out: Box<dyn Write>,
    clear_screen: bool,
    raw_mode: bool,
}

impl ConsoleRenderer {
    /// Full-screen renderer on stdout that redraws in place
    pub fn stdout(raw_mode: bool) -> Self {
        Self {
            out: Box::new(std::io::stdout()),
            clear_screen: true,
            raw_mode,
        }
    }

    /// Append frames to a custom writer (for testing or logging)
    pub fn with_writer<W: Write + 'static>(writer: W) -> Self {
        Self {
            out: Box::new(writer),
            clear_screen: false,
            raw_mode: false,
        }
    }
}

impl FrameObserver for ConsoleRenderer {
    fn name(&self) -> &'static str {
        "console"
    }

    fn render(&mut self, view: &MenuView) -> MenuResult<()> {
        let width = if self.clear_screen {
            execute!(self.out, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;
            terminal::size().ok().map(|(cols, _)| cols as usize)
        } else {
            None
        };

        let text = render_text(view, width);
        for line in text.lines() {
            if self.raw_mode {
                write!(self.out, "{}\r\n", line)?;
            } else {
                writeln!(self.out, "{}", line)?;
            }
        }
        self.out.flush()?;
        Ok(())
    }

    fn teardown(&mut self) -> MenuResult<()> {
        if self.clear_screen {
            execute!(self.out, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;
        }
        self.out.flush()?;
        Ok(())
    }
}
