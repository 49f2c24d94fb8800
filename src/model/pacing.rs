//! Per-word display timing

use std::time::Duration;

pub const MIN_WPM: u32 = 50;
pub const MAX_WPM: u32 = 1500;
pub const DEFAULT_WPM: u32 = 300;
/// Step used by the speed keys.
pub const WPM_STEP: u32 = 50;
/// Speeds reachable directly from the number keys.
pub const SPEED_PRESETS: [u32; 6] = [150, 250, 300, 450, 600, 900];

const SENTENCE_PAUSE: f64 = 1.5;
const LONG_WORD_PAUSE: f64 = 1.2;
const LONG_WORD_CHARS: usize = 8;

pub fn clamp_wpm(wpm: u32) -> u32 {
    wpm.clamp(MIN_WPM, MAX_WPM)
}

/// Milliseconds one word stays on screen at the given speed.
pub fn base_delay_ms(wpm: u32) -> f64 {
    60_000.0 / f64::from(wpm.max(1))
}

/// Display time for `word` at `wpm`.
///
/// Words ending in `. ! ? ;` get 1.5x; otherwise words longer than eight
/// characters get 1.2x. The two never stack.
pub fn word_delay_ms(word: &str, wpm: u32) -> f64 {
    base_delay_ms(wpm) * delay_multiplier(word)
}

pub fn word_delay(word: &str, wpm: u32) -> Duration {
    Duration::from_micros((word_delay_ms(word, wpm) * 1000.0).round() as u64)
}

fn delay_multiplier(word: &str) -> f64 {
    if matches!(word.chars().last(), Some('.' | '!' | '?' | ';')) {
        SENTENCE_PAUSE
    } else if word.chars().count() > LONG_WORD_CHARS {
        LONG_WORD_PAUSE
    } else {
        1.0
    }
}
