//! Optimal Recognition Point placement

/// Character index of the anchor letter, slightly left of centre.
///
/// Counts characters, not bytes. Returns 0 for the empty string; callers
/// render an empty word as three empty parts (see [`AnchorSplit`]).
pub fn anchor_index(word: &str) -> usize {
    let len = word.chars().count();
    match len {
        0 | 1 => 0,
        2 | 3 => 1,
        _ => len / 2 - 1,
    }
}

/// A word cut around its anchor letter for rendering.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnchorSplit {
    pub before: String,
    pub anchor: String,
    pub after: String,
}

impl AnchorSplit {
    pub fn new(word: &str) -> Self {
        if word.is_empty() {
            return Self::default();
        }

        let anchor = anchor_index(word);
        let mut before = String::new();
        let mut anchor_char = String::new();
        let mut after = String::new();
        for (i, ch) in word.chars().enumerate() {
            if i < anchor {
                before.push(ch);
            } else if i == anchor {
                anchor_char.push(ch);
            } else {
                after.push(ch);
            }
        }

        Self {
            before,
            anchor: anchor_char,
            after,
        }
    }
}
