//! Replayable input scripts.
//!
//! A script is a string of key letters: `u`/`k` up, `d`/`j` down,
//! `c`/`l`/`r` or a newline commit, `b`/`h` back. Other whitespace and commas
//! are skipped; every other character becomes `Noop`.

use std::collections::VecDeque;

use crate::domain::navigation::Input;
use crate::domain::ports::InputSource;
use crate::error::MenuResult;

/// Map one script letter to an input; `None` for separators
pub fn char_to_input(ch: char) -> Option<Input> {
    match ch.to_ascii_lowercase() {
        'u' | 'k' => Some(Input::MoveUp),
        'd' | 'j' => Some(Input::MoveDown),
        'c' | 'l' | 'r' | '\n' => Some(Input::Commit),
        'b' | 'h' => Some(Input::Back),
        ',' => None,
        c if c.is_whitespace() => None,
        _ => Some(Input::Noop),
    }
}

/// Input source that replays a fixed sequence, then closes
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    queue: VecDeque<Input>,
}

impl ScriptedInput {
    pub fn new(inputs: impl IntoIterator<Item = Input>) -> Self {
        Self {
            queue: inputs.into_iter().collect(),
        }
    }

    /// Parse a key-letter script
    pub fn parse(script: &str) -> Self {
        Self::new(script.chars().filter_map(char_to_input))
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl InputSource for ScriptedInput {
    fn next_input(&mut self) -> MenuResult<Option<Input>> {
        Ok(self.queue.pop_front())
    }
}
