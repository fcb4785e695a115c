//! ANSI color utilities for the terminal summary.
//!
//! Color scheme optimized for both light and dark terminals: strong
//! colors for the scores people scan for, muted tones for metadata.

use owo_colors::{OwoColorize, Style};

/// Style for a gravity total. Tiers follow how totals read in practice:
/// the p95 note of a balanced vault lands near 100, mid-field notes in
/// the tens, the long tail below that.
pub fn score_style(total: f64) -> Style {
    if total >= 80.0 {
        Style::new().bright_green().bold()
    } else if total >= 40.0 {
        Style::new().green()
    } else if total >= 15.0 {
        Style::new().yellow()
    } else {
        Style::new().dimmed()
    }
}

/// Apply a style when color is enabled, pass through otherwise.
pub fn colorize(text: &str, style: Style, enabled: bool) -> String {
    if enabled {
        format!("{}", text.style(style))
    } else {
        text.to_string()
    }
}
