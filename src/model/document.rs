//! Loaded text and its word tokens

/// Text shown when the reader starts without a file.
pub const SAMPLE_TEXT: &str = "The art of reading is in danger of being lost. In a world saturated with information, our attention fractures into a thousand glittering shards. We skim, we scroll, we scan, but rarely do we read. RSVP, or Rapid Serial Visual Presentation, offers a radical alternative. By displaying one word at a time at a fixed focal point, it eliminates saccadic eye movements and forces the mind into a singular stream of comprehension. The technique was first developed in cognitive psychology laboratories in the 1970s. Researchers discovered that the human visual system could process words far faster when they appeared sequentially at a single point than when the eye had to traverse lines of text. The implications were profound. Reading speeds of 500, 700, even 1000 words per minute became achievable without significant loss of comprehension. The key insight was the \"Optimal Recognition Point\", a specific letter within each word where the eye naturally fixates. By aligning this anchor letter to the center of the display, recognition time drops dramatically. Punctuation and long words require slightly more processing time, so intelligent pacing systems add brief pauses after sentence boundaries and complex vocabulary. Modern implementations combine this scientific foundation with careful typography to create a meditative, almost musical reading experience. Each word arrives like a note in a composition: precise, deliberate, staccato.";

/// Split text into words on runs of whitespace, dropping empty pieces.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_owned).collect()
}

/// Raw text plus the word sequence derived from it.
///
/// Never mutated in place; loading new text builds a fresh `Document`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Document {
    raw_text: String,
    words: Vec<String>,
}

impl Document {
    pub fn new(text: impl Into<String>) -> Self {
        let raw_text = text.into();
        let words = tokenize(&raw_text);
        Self { raw_text, words }
    }

    pub fn sample() -> Self {
        Self::new(SAMPLE_TEXT)
    }

    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn word(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_collapses_whitespace_runs() {
        assert_eq!(
            tokenize("  one\ttwo \n\n three   "),
            vec!["one", "two", "three"]
        );
    }

    #[test]
    fn test_tokenize_empty_and_blank_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" \n\t  ").is_empty());
    }

    #[test]
    fn test_tokenize_keeps_punctuation_attached() {
        assert_eq!(tokenize("Hello, world! Done."), vec!["Hello,", "world!", "Done."]);
    }

    #[test]
    fn test_document_word_count_matches_non_whitespace_runs() {
        let text = "a  bb\u{3000}ccc\r\ndddd";
        let doc = Document::new(text);
        assert_eq!(doc.len(), text.split_whitespace().count());
        assert_eq!(doc.word(1), Some("bb"));
        assert_eq!(doc.word(10), None);
        assert_eq!(doc.raw_text(), text);
    }

    #[test]
    fn test_sample_document_is_not_empty() {
        let doc = Document::sample();
        assert!(!doc.is_empty());
        assert_eq!(doc.word(0), Some("The"));
    }
}
