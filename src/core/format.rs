//! Display formatting for numbers.
//!
//! Formatting only affects presentation; stored values keep full precision.

/// Render an optional number. `None` renders as an empty string.
///
/// # Example
///
/// ```rust
/// use calcbook::core::format_number;
///
/// assert_eq!(format_number(Some(5.0)), "5");
/// assert_eq!(format_number(Some(5.5)), "5.5");
/// assert_eq!(format_number(None), "");
/// ```
pub fn format_number(value: Option<f64>) -> String {
    value.map(format_value).unwrap_or_default()
}

/// Render a number, dropping the decimal point for integer-valued floats.
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    // Exact equality, no tolerance
    if value == value.trunc() {
        if value == 0.0 {
            // Covers negative zero
            return "0".to_string();
        }
        return format!("{value:.0}");
    }
    value.to_string()
}
