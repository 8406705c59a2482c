use crate::constants::{TYPEWRITER_CHAR_INTERVAL_MS, TYPEWRITER_START_DELAY_MS};

/// Reveals a string one character (Unicode scalar) at a time.
#[derive(Clone, Debug, Default)]
pub struct Typewriter {
    chars: Vec<char>,
    shown: usize,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            shown: 0,
        }
    }

    #[inline]
    pub fn char_count(&self) -> usize {
        self.chars.len()
    }

    /// Reveal the next character. `None` once the whole text is visible.
    pub fn advance(&mut self) -> Option<char> {
        let c = self.chars.get(self.shown).copied()?;
        self.shown += 1;
        Some(c)
    }

    pub fn visible(&self) -> String {
        self.chars[..self.shown].iter().collect()
    }
}

/// Milliseconds from wiring until the caret is removed for a text of `len`
/// characters: the first tick fires after the start delay, every later tick
/// one interval after the previous, and the tick after the last character
/// clears the caret.
#[inline]
pub fn completion_ms(len: usize) -> u32 {
    TYPEWRITER_START_DELAY_MS + TYPEWRITER_CHAR_INTERVAL_MS * len as u32
}
