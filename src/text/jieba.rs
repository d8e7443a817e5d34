// Dictionary-based segmentation backed by the `jieba-rs` crate.
//
// Loading the bundled dictionary builds a prefix trie of ~350k entries, so
// it happens once per process and the result is shared read-only.

use std::sync::LazyLock;

use jieba_rs::Jieba;

use super::traits::{SegmentMode, Segmenter};

static JIEBA: LazyLock<Jieba> = LazyLock::new(Jieba::new);

/// Jieba segmenter in either precise or search mode.
///
/// Precise mode runs with the HMM disabled so output depends on the
/// dictionary alone. Search mode enables the HMM and additionally emits the
/// dictionary sub-words of long compounds.
#[derive(Debug, Clone, Copy, Default)]
pub struct JiebaSegmenter {
    pub mode: SegmentMode,
}

impl JiebaSegmenter {
    pub fn new(mode: SegmentMode) -> Self {
        Self { mode }
    }
}

impl Segmenter for JiebaSegmenter {
    fn segment<'a>(&self, text: &'a str) -> Vec<&'a str> {
        match self.mode {
            SegmentMode::Precise => JIEBA.cut(text, false),
            SegmentMode::Search => JIEBA.cut_for_search(text, true),
        }
    }
}
