// Text normalization: punctuation stripping, word segmentation, and
// stop-word filtering.

pub mod jieba;
pub mod stopwords;
pub mod tokenizer;
pub mod traits;
