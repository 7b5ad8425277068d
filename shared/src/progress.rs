pub const MAX_PERCENTAGE: f64 = 100.0;

/// Clamp a progress percentage to at most 100.
///
/// There is no lower bound: negative percentages pass through unchanged.
pub fn fill_width(percentage: f64) -> f64 {
    percentage.min(MAX_PERCENTAGE)
}

/// CSS width for a progress fill, e.g. `"42.5%"`.
pub fn width_css(percentage: f64) -> String {
    let width = fill_width(percentage);
    // "-0%" would be a distinct string for the same width
    let width = if width == 0.0 { 0.0 } else { width };
    format!("{}%", width)
}
