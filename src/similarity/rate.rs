// Repeat-rate formula.
//
// The repeat rate blends Jaccard and cosine similarity. For short pairs the
// two metrics count equally. Once either document passes the long-form
// threshold, plain set overlap gets noisy (common words collide), so the
// blend leans on the frequency angle: 20% Jaccard, 80% cosine.
//
// Very long documents are compared chunk by chunk: both sequences are cut
// into consecutive fixed-size chunks, chunk i of one side is scored against
// chunk i of the other, and the per-chunk scores are averaged. A side that
// runs out of chunks contributes empty chunks, which score 0.0 against the
// other side's remaining content.

use serde::Serialize;
use tracing::debug;

use super::overlap::{cosine_similarity, jaccard_similarity, round4};

/// Jaccard share of the blend for long-form pairs.
pub const LONG_FORM_JACCARD_WEIGHT: f64 = 0.2;
/// Cosine share of the blend for long-form pairs.
pub const LONG_FORM_COSINE_WEIGHT: f64 = 0.8;

/// Thresholds for the repeat-rate formula.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateParams {
    /// Tokens per chunk in chunked mode (default 1000)
    pub chunk_size: usize,
    /// Chunked mode kicks in when either side has more tokens than this (default 10000)
    pub chunk_threshold: usize,
    /// Long-form weighting applies when either side has more tokens than this (default 50)
    pub long_form_threshold: usize,
}

impl Default for RateParams {
    fn default() -> Self {
        Self {
            chunk_size: 1000,
            chunk_threshold: 10_000,
            long_form_threshold: 50,
        }
    }
}

/// Everything that went into one repeat-rate computation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RateBreakdown {
    /// Jaccard score (chunk average in chunked mode), 4 decimals
    pub jaccard: f64,
    /// Cosine score (chunk average in chunked mode), 4 decimals
    pub cosine: f64,
    /// Final blended repeat rate, 4 decimals
    pub rate: f64,
    /// Whether chunked mode was used
    pub chunked: bool,
    /// Number of chunk pairs compared (1 in direct mode)
    pub chunks: usize,
    /// Whether the 20/80 long-form weighting was applied
    pub long_form: bool,
    pub tokens_original: usize,
    pub tokens_candidate: usize,
}

/// Repeat rate with the default thresholds.
pub fn compute_repeat_rate<S: AsRef<str>>(original: &[S], candidate: &[S]) -> f64 {
    RateParams::default().combine(original, candidate).rate
}

/// Chunk-averaged scores and how many chunk pairs went into them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChunkedScores {
    pub jaccard: f64,
    pub cosine: f64,
    pub chunks: usize,
}

/// Average Jaccard and cosine over aligned chunk pairs.
///
/// Returns unrounded averages. Two empty inputs produce no chunk pairs and
/// score 1.0 on both metrics, same as the direct comparison.
pub fn chunked_scores<S: AsRef<str>>(
    original: &[S],
    candidate: &[S],
    chunk_size: usize,
) -> ChunkedScores {
    let chunk_size = chunk_size.max(1);
    let chunks_a: Vec<&[S]> = original.chunks(chunk_size).collect();
    let chunks_b: Vec<&[S]> = candidate.chunks(chunk_size).collect();
    let total = chunks_a.len().max(chunks_b.len());

    if total == 0 {
        return ChunkedScores {
            jaccard: 1.0,
            cosine: 1.0,
            chunks: 0,
        };
    }

    let empty: &[S] = &[];
    let (jaccard_sum, cosine_sum) = (0..total)
        .map(|i| {
            let a = chunks_a.get(i).copied().unwrap_or(empty);
            let b = chunks_b.get(i).copied().unwrap_or(empty);
            (jaccard_similarity(a, b), cosine_similarity(a, b))
        })
        .fold((0.0, 0.0), |(j, c), (dj, dc)| (j + dj, c + dc));

    ChunkedScores {
        jaccard: jaccard_sum / total as f64,
        cosine: cosine_sum / total as f64,
        chunks: total,
    }
}

impl RateParams {
    /// Compute the repeat rate of `candidate` against `original`.
    pub fn combine<S: AsRef<str>>(&self, original: &[S], candidate: &[S]) -> RateBreakdown {
        let (len_a, len_b) = (original.len(), candidate.len());
        let chunked = len_a > self.chunk_threshold || len_b > self.chunk_threshold;

        let (jaccard, cosine, chunks) = if chunked {
            let scores = chunked_scores(original, candidate, self.chunk_size);
            (scores.jaccard, scores.cosine, scores.chunks)
        } else {
            (
                jaccard_similarity(original, candidate),
                cosine_similarity(original, candidate),
                1,
            )
        };

        let long_form = len_a > self.long_form_threshold || len_b > self.long_form_threshold;
        let rate = if long_form {
            round4(LONG_FORM_JACCARD_WEIGHT * jaccard + LONG_FORM_COSINE_WEIGHT * cosine)
        } else {
            round4((jaccard + cosine) / 2.0)
        };

        debug!(
            len_a,
            len_b, chunked, chunks, long_form, jaccard, cosine, rate, "Computed repeat rate"
        );

        RateBreakdown {
            jaccard: round4(jaccard),
            cosine: round4(cosine),
            rate,
            chunked,
            chunks,
            long_form,
            tokens_original: len_a,
            tokens_candidate: len_b,
        }
    }
}
