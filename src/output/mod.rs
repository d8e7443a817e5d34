// Output formatting: result file text and terminal display.

pub mod terminal;

/// Format a repeat rate the way it is persisted: fixed-point, 2 decimals.
pub fn format_rate(rate: f64) -> String {
    format!("{rate:.2}")
}
