//! Keyboard input handling.
//!
//! Maps crossterm key events onto the navigation alphabet and provides a
//! blocking raw-mode terminal source.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::{cursor, execute, terminal};

use crate::domain::navigation::Input;
use crate::domain::ports::InputSource;
use crate::error::{MenuError, MenuResult};

/// Convert a keyboard event to an input symbol
pub fn key_to_input(key: KeyEvent) -> Input {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Input::MoveUp,
        KeyCode::Down | KeyCode::Char('j') => Input::MoveDown,
        KeyCode::Right | KeyCode::Enter | KeyCode::Char('l') => Input::Commit,
        KeyCode::Left | KeyCode::Backspace | KeyCode::Esc | KeyCode::Char('h') => Input::Back,
        _ => Input::Noop,
    }
}

/// Ctrl+C closes the input source instead of producing a symbol
pub fn is_interrupt(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
}

/// Raw-mode terminal input; restores the terminal when dropped
pub struct TerminalInput {
    active: bool,
}

impl TerminalInput {
    /// Enable raw mode and hide the cursor
    pub fn enable() -> MenuResult<Self> {
        terminal::enable_raw_mode().map_err(|e| MenuError::Terminal(e.to_string()))?;
        execute!(std::io::stdout(), cursor::Hide)
            .map_err(|e| MenuError::Terminal(e.to_string()))?;
        Ok(Self { active: true })
    }

    /// Restore the terminal; safe to call more than once
    pub fn restore(&mut self) -> MenuResult<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        execute!(std::io::stdout(), cursor::Show)
            .map_err(|e| MenuError::Terminal(e.to_string()))?;
        terminal::disable_raw_mode().map_err(|e| MenuError::Terminal(e.to_string()))
    }
}

impl InputSource for TerminalInput {
    fn next_input(&mut self) -> MenuResult<Option<Input>> {
        loop {
            let event = event::read().map_err(|e| MenuError::Terminal(e.to_string()))?;
            if let Event::Key(key) = event {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if is_interrupt(&key) {
                    return Ok(None);
                }
                return Ok(Some(key_to_input(key)));
            }
        }
    }
}

impl Drop for TerminalInput {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}
