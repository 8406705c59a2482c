// Host-side tests for the typewriter title.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod typewriter {
    include!("../src/core/typewriter.rs");
}

use constants::{TYPEWRITER_CHAR_INTERVAL_MS, TYPEWRITER_START_DELAY_MS};
use typewriter::*;

struct Replay {
    ticks: usize,
    caret_removed_at: u32,
    visible: String,
}

/// Replays the timer chain used in the browser: first tick after the start
/// delay, then one tick per interval. The tick on which `advance` runs dry
/// clears the caret.
fn replay(text: &str) -> Replay {
    let mut writer = Typewriter::new(text);
    let mut now = TYPEWRITER_START_DELAY_MS;
    let mut ticks = 1;
    while writer.advance().is_some() {
        now += TYPEWRITER_CHAR_INTERVAL_MS;
        ticks += 1;
    }
    Replay {
        ticks,
        caret_removed_at: now,
        visible: writer.visible(),
    }
}

#[test]
fn reveals_one_character_per_tick() {
    let mut writer = Typewriter::new("Hi!");
    assert_eq!(writer.visible(), "");
    assert_eq!(writer.advance(), Some('H'));
    assert_eq!(writer.visible(), "H");
    assert_eq!(writer.advance(), Some('i'));
    assert_eq!(writer.advance(), Some('!'));
    assert_eq!(writer.visible(), "Hi!");
    assert_eq!(writer.advance(), None);
    assert_eq!(writer.visible(), "Hi!");
}

#[test]
fn full_text_and_caret_removed_at_completion_time() {
    for text in ["", "A", "Turn photos into magic", "Café ✨ déjà vu"] {
        let len = text.chars().count();
        let run = replay(text);
        assert_eq!(run.visible, text);
        // One tick per character plus the one that clears the caret
        assert_eq!(run.ticks, len + 1);
        assert_eq!(run.caret_removed_at, completion_ms(len));
        assert_eq!(run.caret_removed_at, 500 + 100 * len as u32);
    }
}

#[test]
fn counts_unicode_scalars_not_bytes() {
    let writer = Typewriter::new("né✨");
    assert_eq!(writer.char_count(), 3);
    assert_eq!(completion_ms(3), 800);
}

#[test]
fn completion_formula() {
    assert_eq!(completion_ms(0), 500);
    assert_eq!(completion_ms(10), 1500);
}
