// Jaccard and cosine similarity over word sequences.
//
// Jaccard compares the *sets* of words:
//
//   |A ∩ B| / |A ∪ B|
//
// Cosine compares word *frequencies* over the shared vocabulary:
//
//   dot(freq_a, freq_b) / (‖freq_a‖ · ‖freq_b‖)
//
// Both treat two empty documents as identical (1.0) and an empty document
// against a non-empty one as disjoint (0.0). Scores are rounded to 4 decimals.

use std::collections::{HashMap, HashSet};

/// Occurrence count per token within one word sequence.
pub type FrequencyTable<'a> = HashMap<&'a str, usize>;

/// Round to 4 decimal places and clamp into [0, 1].
pub fn round4(value: f64) -> f64 {
    ((value * 10_000.0).round() / 10_000.0).clamp(0.0, 1.0)
}

/// Count how often each token occurs.
pub fn frequency_table<S: AsRef<str>>(words: &[S]) -> FrequencyTable<'_> {
    let mut table = HashMap::new();
    for word in words {
        *table.entry(word.as_ref()).or_insert(0) += 1;
    }
    table
}

/// Jaccard similarity of the two token sets.
pub fn jaccard_similarity<S: AsRef<str>>(words_a: &[S], words_b: &[S]) -> f64 {
    let set_a: HashSet<&str> = words_a.iter().map(|w| w.as_ref()).collect();
    let set_b: HashSet<&str> = words_b.iter().map(|w| w.as_ref()).collect();

    match (set_a.is_empty(), set_b.is_empty()) {
        (true, true) => return 1.0,
        (true, false) | (false, true) => return 0.0,
        _ => {}
    }

    let intersection = set_a.intersection(&set_b).count();
    let union = set_a.len() + set_b.len() - intersection;

    round4(intersection as f64 / union as f64)
}

/// Cosine similarity of the two token frequency vectors.
pub fn cosine_similarity<S: AsRef<str>>(words_a: &[S], words_b: &[S]) -> f64 {
    match (words_a.is_empty(), words_b.is_empty()) {
        (true, true) => return 1.0,
        (true, false) | (false, true) => return 0.0,
        _ => {}
    }

    let freq_a = frequency_table(words_a);
    let freq_b = frequency_table(words_b);
    cosine_from_frequencies(&freq_a, &freq_b)
}

/// Cosine similarity from precomputed frequency tables.
///
/// A zero norm on exactly one side scores 0.0; zero on both sides scores 1.0.
pub fn cosine_from_frequencies(freq_a: &FrequencyTable<'_>, freq_b: &FrequencyTable<'_>) -> f64 {
    let vocabulary: HashSet<&str> = freq_a.keys().chain(freq_b.keys()).copied().collect();

    let mut dot = 0.0;
    let mut norm_a_sq = 0.0;
    let mut norm_b_sq = 0.0;

    for word in vocabulary {
        let a = freq_a.get(word).copied().unwrap_or(0) as f64;
        let b = freq_b.get(word).copied().unwrap_or(0) as f64;
        dot += a * b;
        norm_a_sq += a * a;
        norm_b_sq += b * b;
    }

    match (norm_a_sq == 0.0, norm_b_sq == 0.0) {
        (true, true) => 1.0,
        (true, false) | (false, true) => 0.0,
        _ => round4(dot / (norm_a_sq.sqrt() * norm_b_sq.sqrt())),
    }
}
