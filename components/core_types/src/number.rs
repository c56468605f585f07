//! Display form of Trio numbers.

/// Format a number the way Trio prints it.
///
/// Integral values print without a fractional part, non-finite values
/// print as `NaN`, `Infinity` and `-Infinity`, and everything else uses the
/// shortest representation that round-trips.
///
/// ```
/// use core_types::format_number;
///
/// assert_eq!(format_number(10.0), "10");
/// assert_eq!(format_number(-3.0), "-3");
/// assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
/// assert_eq!(format_number(f64::NAN), "NaN");
/// ```
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if n.fract() == 0.0 && n.abs() < 1e15 {
        // -0 prints as 0
        format!("{}", n as i64)
    } else {
        let mut buffer = ryu::Buffer::new();
        buffer.format_finite(n).to_string()
    }
}
