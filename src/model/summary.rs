//! Extractive gist: rank sentences by a fixed heuristic score.
//!
//! Score per sentence is the mean token length, plus 2.0 for the first three
//! sentences or 1.5 for the last three (first-three wins when both apply),
//! plus 3.0 when any signal word occurs anywhere in the sentence, case
//! insensitive. Results come back best first, not in reading order.

use once_cell::sync::Lazy;
use regex::Regex;

pub const DEFAULT_MAX_SENTENCES: usize = 6;
pub const NO_SUMMARY_TEXT: &str = "No text to summarise.";

/// Sentences at or under this many characters are dropped.
const MIN_SENTENCE_CHARS: usize = 20;
const LEADING_BONUS: f64 = 2.0;
const TRAILING_BONUS: f64 = 1.5;
const SIGNAL_BONUS: f64 = 3.0;
const POSITION_WINDOW: usize = 3;

static WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex pattern"));

// Punctuation stays with the sentence it closes
static SENTENCE_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]\s+").expect("Invalid sentence regex pattern"));

// Substring match: "found" also hits "foundation"
static SIGNAL_WORDS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)key|important|significant|discover|found|implicat|insight|radical|profound")
        .expect("Invalid signal word regex pattern")
});

#[derive(Debug)]
struct ScoredSentence<'a> {
    text: &'a str,
    score: f64,
}

/// Pick up to `max_sentences` of the highest scoring sentences in `text`.
///
/// Returns a single fallback line when nothing long enough survives.
pub fn summarize(text: &str, max_sentences: usize) -> Vec<String> {
    let normalized = WHITESPACE.replace_all(text, " ");
    let sentences: Vec<&str> = split_sentences(&normalized)
        .into_iter()
        .map(str::trim)
        .filter(|s| s.chars().count() > MIN_SENTENCE_CHARS)
        .collect();

    if sentences.is_empty() {
        return vec![NO_SUMMARY_TEXT.to_string()];
    }

    let total = sentences.len();
    let mut scored: Vec<ScoredSentence> = sentences
        .iter()
        .enumerate()
        .map(|(i, s)| ScoredSentence {
            text: s,
            score: mean_word_length(s) + position_bonus(i, total) + signal_bonus(s),
        })
        .collect();

    // stable, so ties keep document order
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));

    scored
        .into_iter()
        .take(max_sentences)
        .map(|s| s.text.to_string())
        .collect()
}

fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    for m in SENTENCE_BREAK.find_iter(text) {
        // the punctuation mark is a single byte
        sentences.push(&text[start..m.start() + 1]);
        start = m.end();
    }
    sentences.push(&text[start..]);
    sentences
}

fn mean_word_length(sentence: &str) -> f64 {
    let (count, chars) = sentence
        .split_whitespace()
        .fold((0usize, 0usize), |(n, c), w| (n + 1, c + w.chars().count()));
    if count == 0 {
        0.0
    } else {
        chars as f64 / count as f64
    }
}

fn position_bonus(index: usize, total: usize) -> f64 {
    if index < POSITION_WINDOW {
        LEADING_BONUS
    } else if index >= total.saturating_sub(POSITION_WINDOW) {
        TRAILING_BONUS
    } else {
        0.0
    }
}

fn signal_bonus(sentence: &str) -> f64 {
    if SIGNAL_WORDS.is_match(sentence) {
        SIGNAL_BONUS
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::document::SAMPLE_TEXT;

    #[test]
    fn test_fallback_for_empty_and_short_text() {
        assert_eq!(summarize("", 6), vec![NO_SUMMARY_TEXT]);
        assert_eq!(summarize("Too short. Also short!", 6), vec![NO_SUMMARY_TEXT]);
    }

    #[test]
    fn test_split_keeps_delimiters_with_preceding_sentence() {
        let parts = split_sentences("First one here. Second? Third! tail");
        assert_eq!(parts, vec!["First one here.", "Second?", "Third!", "tail"]);
    }

    #[test]
    fn test_split_needs_whitespace_after_punctuation() {
        assert_eq!(split_sentences("version 1.5 is out."), vec!["version 1.5 is out."]);
    }

    #[test]
    fn test_respects_max_sentences() {
        let out = summarize(SAMPLE_TEXT, 3);
        assert_eq!(out.len(), 3);
        assert!(summarize(SAMPLE_TEXT, 100).len() <= 100);
        assert!(summarize(SAMPLE_TEXT, 0).is_empty());
    }

    #[test]
    fn test_never_returns_short_sentences() {
        for sentence in summarize(SAMPLE_TEXT, 100) {
            assert!(sentence.chars().count() > MIN_SENTENCE_CHARS, "{sentence}");
            assert_eq!(sentence, sentence.trim());
        }
    }

    #[test]
    fn test_whitespace_is_normalized() {
        let out = summarize("This   sentence\nspans\t\tseveral lines of text.", 6);
        assert_eq!(out, vec!["This sentence spans several lines of text."]);
    }

    #[test]
    fn test_signal_word_outranks_position() {
        let text = "Alpha beta gamma delta epsilon. \
                    Alpha beta gamma delta epsilon zeta. \
                    Alpha beta gamma delta epsilon eta. \
                    Alpha beta gamma delta epsilon theta. \
                    Alpha beta gamma delta epsilon iota. \
                    Alpha beta gamma delta epsilon kappa. \
                    Alpha beta gamma delta epsilon lambda. \
                    This is a rather important sentence.";
        let out = summarize(text, 1);
        assert_eq!(out, vec!["This is a rather important sentence."]);
    }

    #[test]
    fn test_signal_match_is_case_insensitive_substring() {
        assert_eq!(signal_bonus("A PROFOUND change"), SIGNAL_BONUS);
        assert_eq!(signal_bonus("the foundation holds"), SIGNAL_BONUS);
        assert_eq!(signal_bonus("nothing to see"), 0.0);
    }

    #[test]
    fn test_position_bonus_precedence() {
        // four sentences: windows overlap, first three keep 2.0
        assert_eq!(position_bonus(0, 4), LEADING_BONUS);
        assert_eq!(position_bonus(2, 4), LEADING_BONUS);
        assert_eq!(position_bonus(3, 4), TRAILING_BONUS);

        assert_eq!(position_bonus(3, 10), 0.0);
        assert_eq!(position_bonus(6, 10), 0.0);
        assert_eq!(position_bonus(7, 10), TRAILING_BONUS);
        assert_eq!(position_bonus(9, 10), TRAILING_BONUS);
    }

    #[test]
    fn test_ties_keep_document_order() {
        let text = "Aaaa bbbb cccc dddd eeee. \
                    Ffff gggg hhhh iiii jjjj. \
                    Kkkk llll mmmm nnnn oooo.";
        let out = summarize(text, 3);
        assert_eq!(
            out,
            vec![
                "Aaaa bbbb cccc dddd eeee.",
                "Ffff gggg hhhh iiii jjjj.",
                "Kkkk llll mmmm nnnn oooo.",
            ]
        );
    }

    #[test]
    fn test_ranked_not_reading_order() {
        let text = "Tiny words in a row go here. \
                    Tiny words in a row go here. \
                    Tiny words in a row go here. \
                    Tiny words in a row go here. \
                    Tiny words in a row go here. \
                    Tiny words in a row go here. \
                    Tiny words in a row go here. \
                    Extraordinarily elaborate vocabulary demonstrates sophistication.";
        let out = summarize(text, 2);
        assert_eq!(out[0], "Extraordinarily elaborate vocabulary demonstrates sophistication.");
        assert_eq!(out[1], "Tiny words in a row go here.");
    }

    #[test]
    fn test_mean_word_length() {
        assert_eq!(mean_word_length("ab abcd"), 3.0);
        assert_eq!(mean_word_length(""), 0.0);
    }
}
