//! Clock-duration input for the time category

use regex::Regex;
use std::sync::LazyLock;

// One-or-two-digit hours, exactly two-digit minutes.
static CLOCK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,2}):(\d{2})$").expect("clock pattern is valid"));

/// Parse an `H:MM` / `HH:MM` input into fractional hours.
///
/// Minutes are not range-checked; `1:90` reads as 2.5 hours, matching the
/// arithmetic of the original surface.
pub fn parse_clock(input: &str) -> Option<f64> {
    let caps = CLOCK_PATTERN.captures(input)?;
    let hours: f64 = caps[1].parse().ok()?;
    let minutes: f64 = caps[2].parse().ok()?;
    Some(hours + minutes / 60.0)
}

/// Render fractional hours as zero-padded `HH:MM`, minutes rounded to the
/// nearest integer.
pub fn render_clock(hours: f64) -> String {
    let whole = hours.floor();
    let minutes = ((hours - whole) * 60.0).round();
    format!("{:02}:{:02}", whole as i64, minutes as i64)
}
