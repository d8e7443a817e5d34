// Punctuation and stop-word sets.
//
// Both are fixed configuration. The core list is deliberately short: it
// only removes closed-class words (pronouns, particles, temporal connectives)
// so that topical words like 天气 or 看 survive into the comparison.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use stop_words::{get, LANGUAGE};

/// Full-width punctuation stripped in addition to ASCII punctuation.
pub const CJK_PUNCTUATION: &[char] = &[
    '，', '。', '、', '；', '：', '？', '！', '（', '）', '【', '】', '《', '》', '“', '”',
    '‘', '’',
];

/// The default stop-word set.
pub const CORE_STOP_WORDS: &[&str] = &[
    "的", "是", "在", "我", "要", "去", "今天", "晚上", "和", "及", "与", "了", "就", "也",
    "很", "非常",
];

static CORE: LazyLock<StopWords> = LazyLock::new(|| StopWords::build(StopWordList::Core));
static EXTENDED: LazyLock<StopWords> =
    LazyLock::new(|| StopWords::build(StopWordList::Extended));

/// Whether `c` is removed during punctuation stripping.
pub fn is_punctuation(c: char) -> bool {
    c.is_ascii_punctuation() || CJK_PUNCTUATION.contains(&c)
}

/// Which stop-word list to filter with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StopWordList {
    /// The short fixed list in `CORE_STOP_WORDS`.
    #[default]
    Core,
    /// Core plus the published Chinese and English lists.
    Extended,
}

impl FromStr for StopWordList {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "core" => Ok(Self::Core),
            "extended" => Ok(Self::Extended),
            other => Err(format!(
                "unknown stop-word list '{other}' (expected 'core' or 'extended')"
            )),
        }
    }
}

impl fmt::Display for StopWordList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Core => f.write_str("core"),
            Self::Extended => f.write_str("extended"),
        }
    }
}

/// An immutable stop-word set.
#[derive(Debug)]
pub struct StopWords {
    words: HashSet<String>,
    /// Match ASCII tokens case-insensitively (the English list is lowercase).
    fold_case: bool,
}

impl StopWords {
    /// Shared process-wide instance for `list`.
    pub fn shared(list: StopWordList) -> &'static StopWords {
        match list {
            StopWordList::Core => &CORE,
            StopWordList::Extended => &EXTENDED,
        }
    }

    fn build(list: StopWordList) -> Self {
        let mut words: HashSet<String> = CORE_STOP_WORDS.iter().map(|w| w.to_string()).collect();
        if list == StopWordList::Extended {
            words.extend(get(LANGUAGE::Chinese));
            words.extend(get(LANGUAGE::English).into_iter().map(|w| w.to_lowercase()));
        }
        Self {
            words,
            fold_case: list == StopWordList::Extended,
        }
    }

    pub fn contains(&self, token: &str) -> bool {
        if self.words.contains(token) {
            return true;
        }
        self.fold_case && self.words.contains(&token.to_lowercase())
    }
}
