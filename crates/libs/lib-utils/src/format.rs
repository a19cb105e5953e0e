//! # Number Formatting
//!
//! Display formatting shared by the swap and markets screens.
//!
//! - [`format_number`] - Format numbers with comma separators
//! - [`format_fixed`] - Fixed decimal places, no separators (amount fields)
//! - [`format_usd_compact`] - `$1.23M` / `$4.50B` style values

/// Format a number with commas (e.g., 1234567.89 -> "1,234,567.89")
///
/// # Examples
///
/// ```rust
/// use lib_utils::format::format_number;
///
/// assert_eq!(format_number(1234567.89, 2), "1,234,567.89");
/// assert_eq!(format_number(-1234.5, 1), "-1,234.5");
/// ```
pub fn format_number(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.prec$}", value.abs(), prec = decimals);
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((int, dec)) => (int, dec),
        None => (formatted.as_str(), ""),
    };

    let mut result = String::new();
    for (i, ch) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    let integer_with_commas: String = result.chars().rev().collect();

    let sign = if value < 0.0 && formatted.chars().any(|c| c != '0' && c != '.') {
        "-"
    } else {
        ""
    };

    if decimal_part.is_empty() {
        format!("{}{}", sign, integer_with_commas)
    } else {
        format!("{}{}.{}", sign, integer_with_commas, decimal_part)
    }
}

/// Enough fractional digits to print any finite `f64` exactly.
const EXACT_FRACTION_DIGITS: usize = 1_075;

/// Fixed decimal places without separators, as written into amount inputs.
///
/// Rounds the exact binary value half away from zero, so an exact tie such
/// as `0.0078125` goes up to `0.007813` rather than to the even digit.
///
/// ```rust
/// use lib_utils::format::format_fixed;
///
/// assert_eq!(format_fixed(1.0 / 128.0, 6), "0.007813");
/// assert_eq!(format_fixed(1.005, 2), "1.00"); // 1.005 is stored as 1.00499…
/// ```
pub fn format_fixed(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let exact = format!("{:.prec$}", value.abs(), prec = EXACT_FRACTION_DIGITS);
    let (integer_part, fraction) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut digits: Vec<u8> = integer_part
        .bytes()
        .chain(fraction.bytes().take(decimals))
        .collect();
    if fraction.as_bytes().get(decimals).is_some_and(|d| *d >= b'5') {
        round_up(&mut digits);
    }

    let split = digits.len() - decimals;
    let mut out = String::with_capacity(digits.len() + 2);
    if value < 0.0 {
        out.push('-');
    }
    out.extend(digits[..split].iter().map(|d| *d as char));
    if decimals > 0 {
        out.push('.');
        out.extend(digits[split..].iter().map(|d| *d as char));
    }
    out
}

/// Add one unit in the last place of a string of ASCII digits.
fn round_up(digits: &mut Vec<u8>) {
    for d in digits.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}

/// Compact USD value: billions and millions get a suffix, smaller values
/// get thousands separators.
///
/// ```rust
/// use lib_utils::format::format_usd_compact;
///
/// assert_eq!(format_usd_compact(3_270_000.0), "$3.27M");
/// assert_eq!(format_usd_compact(12_345.0), "$12,345");
/// ```
pub fn format_usd_compact(value: f64) -> String {
    let abs = value.abs();
    if abs >= 1e9 {
        format!("${:.2}B", value / 1e9)
    } else if abs >= 1e6 {
        format!("${:.2}M", value / 1e6)
    } else if abs >= 1.0 {
        format!("${}", format_number(value, 0))
    } else {
        format!("${:.4}", value)
    }
}
