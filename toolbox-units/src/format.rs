//! Display formatting for converted values

/// Format a converted value for display.
///
/// Magnitude-tiered policy, fixed for output compatibility:
/// values below 1e-6 collapse to "0", small values use scientific
/// notation, and the fixed-point precision shrinks as magnitude grows.
pub fn format_value(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude < 0.000001 {
        "0".to_string()
    } else if magnitude < 0.01 {
        to_exponential(value, 6)
    } else if magnitude < 1.0 {
        format!("{value:.8}")
    } else if magnitude < 1000.0 {
        format!("{value:.6}")
    } else if magnitude < 1000000.0 {
        format!("{value:.4}")
    } else {
        to_exponential(value, 6)
    }
}

/// Scientific notation with an explicitly signed exponent,
/// e.g. `5.000000e-3` and `1.500000e+6`.
fn to_exponential(value: f64, digits: usize) -> String {
    let rendered = format!("{value:.digits$e}");
    match rendered.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => rendered,
    }
}
