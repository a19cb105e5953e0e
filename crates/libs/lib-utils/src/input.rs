//! # Input Sanitising
//!
//! Helpers for free-text numeric inputs.

/// Keep only ASCII digits and the first decimal point.
///
/// ```rust
/// use lib_utils::input::sanitize_decimal;
///
/// assert_eq!(sanitize_decimal("1,234.5.6abc"), "1234.56");
/// assert_eq!(sanitize_decimal(".5"), ".5");
/// ```
pub fn sanitize_decimal(value: &str) -> String {
    let mut seen_point = false;
    value
        .chars()
        .filter(|c| match c {
            '0'..='9' => true,
            '.' if !seen_point => {
                seen_point = true;
                true
            }
            _ => false,
        })
        .collect()
}

/// Drop `,` thousands separators from a display number.
pub fn strip_thousands(value: &str) -> String {
    value.replace(',', "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_decimal() {
        assert_eq!(sanitize_decimal(""), "");
        assert_eq!(sanitize_decimal("abc"), "");
        assert_eq!(sanitize_decimal("-12.5"), "12.5");
        assert_eq!(sanitize_decimal("1..2"), "1.2");
        assert_eq!(sanitize_decimal("0.000001"), "0.000001");
    }

    #[test]
    fn test_strip_thousands() {
        assert_eq!(strip_thousands("12,345.67"), "12345.67");
    }
}
