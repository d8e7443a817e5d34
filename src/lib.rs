// Papercheck: repeat-rate scoring between two plain-text papers.
//
// This is the library root. Text normalization and similarity scoring are
// pure and infallible; file handling and configuration sit at the edges.

pub mod config;
pub mod files;
pub mod output;
pub mod similarity;
pub mod text;

pub use similarity::rate::compute_repeat_rate;
pub use text::tokenizer::tokenize;
pub use text::traits::SegmentMode;
