// Tokenization pipeline: strip punctuation, segment, filter.
//
// The output is always a subsequence of the segmentation of the cleaned
// text, in the original order. Filtering is idempotent: feeding a filtered
// sequence back through the filter changes nothing.

use tracing::debug;

use super::jieba::JiebaSegmenter;
use super::stopwords::{is_punctuation, StopWordList, StopWords};
use super::traits::{SegmentMode, Segmenter};

/// Tokenize `text` with the jieba segmenter and the core stop-word list.
pub fn tokenize(text: &str, mode: SegmentMode) -> Vec<String> {
    Tokenizer::new(mode, StopWordList::Core).tokenize(text)
}

/// Remove punctuation and trim surrounding whitespace.
///
/// Character order is preserved; inner whitespace is kept and later
/// dropped as empty tokens.
pub fn strip_punctuation(text: &str) -> String {
    let cleaned: String = text.chars().filter(|c| !is_punctuation(*c)).collect();
    cleaned.trim().to_string()
}

/// A configured tokenizer: one segmenter plus one stop-word set.
pub struct Tokenizer {
    segmenter: Box<dyn Segmenter>,
    stop_words: &'static StopWords,
}

impl Tokenizer {
    pub fn new(mode: SegmentMode, list: StopWordList) -> Self {
        Self::with_segmenter(Box::new(JiebaSegmenter::new(mode)), list)
    }

    /// Build a tokenizer around any segmentation backend.
    pub fn with_segmenter(segmenter: Box<dyn Segmenter>, list: StopWordList) -> Self {
        Self {
            segmenter,
            stop_words: StopWords::shared(list),
        }
    }

    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let cleaned = strip_punctuation(text);
        let tokens = self.filter(self.segmenter.segment(&cleaned));

        debug!(
            input_chars = text.chars().count(),
            tokens = tokens.len(),
            "Tokenized document"
        );

        tokens
    }

    /// Drop empty/whitespace tokens and stop words.
    pub fn filter<S: AsRef<str>>(&self, words: Vec<S>) -> Vec<String> {
        words
            .into_iter()
            .filter(|w| {
                let w = w.as_ref();
                !w.trim().is_empty() && !self.stop_words.contains(w)
            })
            .map(|w| w.as_ref().to_string())
            .collect()
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(SegmentMode::default(), StopWordList::default())
    }
}
