// Colored terminal summary for a finished comparison.

use std::path::Path;

use colored::{ColoredString, Colorize};

use super::format_rate;
use crate::similarity::rate::RateBreakdown;

/// Rates at or above this are shown in red.
pub const HIGH_RATE: f64 = 0.75;
/// Rates at or above this (and below `HIGH_RATE`) are shown in yellow.
pub const MODERATE_RATE: f64 = 0.40;

/// Color a formatted rate by how much overlap it indicates.
pub fn colorize_rate(rate: f64) -> ColoredString {
    let text = format_rate(rate);
    if rate >= HIGH_RATE {
        text.red().bold()
    } else if rate >= MODERATE_RATE {
        text.yellow()
    } else {
        text.green()
    }
}

/// Print the repeat rate and the scores behind it.
pub fn display_breakdown(breakdown: &RateBreakdown, result_path: &Path) {
    println!("\n{}", "=== Repeat Rate ===".bold());
    println!();
    println!("  Repeat rate:  {}", colorize_rate(breakdown.rate));
    println!(
        "  {}",
        format!(
            "Jaccard {:.4}  Cosine {:.4}  ({} weighting)",
            breakdown.jaccard,
            breakdown.cosine,
            if breakdown.long_form { "20/80" } else { "50/50" }
        )
        .dimmed()
    );
    println!(
        "  {}",
        format!(
            "Tokens: original {}, candidate {}",
            breakdown.tokens_original, breakdown.tokens_candidate
        )
        .dimmed()
    );
    if breakdown.chunked {
        println!(
            "  {}",
            format!("Compared in {} chunks", breakdown.chunks).dimmed()
        );
    }
    println!();
    println!("Result saved to: {}", result_path.display());
}
