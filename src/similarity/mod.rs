// Similarity scoring: set overlap, frequency-vector angle, and the
// repeat-rate blend of the two.

pub mod overlap;
pub mod rate;
