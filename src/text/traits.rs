// Segmenter trait: swap-ready abstraction over word segmentation.
//
// The tokenizer only needs "split this cleaned text into word-like spans".
// The default implementation is dictionary based (jieba), but any library
// that can produce borrowed spans of the input fits behind this trait.

use std::fmt;
use std::str::FromStr;

/// Trait for splitting cleaned text into word-like spans.
///
/// Implementations must never reorder spans relative to the input.
pub trait Segmenter {
    /// Segment `text` into spans borrowed from it, in input order.
    fn segment<'a>(&self, text: &'a str) -> Vec<&'a str>;
}

/// Which segmentation granularity to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SegmentMode {
    /// Minimal non-overlapping segmentation, dictionary matching only.
    /// Deterministic: identical input always yields identical tokens.
    #[default]
    Precise,
    /// Finer-grained segmentation that also emits sub-words of compounds.
    /// Unknown words may be discovered probabilistically.
    Search,
}

impl FromStr for SegmentMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "precise" => Ok(Self::Precise),
            "search" => Ok(Self::Search),
            other => Err(format!(
                "unknown segment mode '{other}' (expected 'precise' or 'search')"
            )),
        }
    }
}

impl fmt::Display for SegmentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Precise => f.write_str("precise"),
            Self::Search => f.write_str("search"),
        }
    }
}
