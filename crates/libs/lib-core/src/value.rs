//! Display-value parsing shared by every market ordering.
//!
//! Market figures arrive as the strings the UI shows (`"$3,269,906"`,
//! `"$3.27M"`, `"$1.1B"`, `"10.05%"`). Both the grouped view and the flat list
//! order by [`display_value`] so the two views never disagree.

/// Parse a display string into a number.
///
/// A leading `$` and `,` separators are stripped, then a `B` suffix
/// multiplies by 1e9 and `M` by 1e6. A trailing `%` yields the bare
/// percentage. Anything else is parsed as a plain float.
///
/// ```rust
/// use lib_core::value::parse_display_value;
///
/// assert_eq!(parse_display_value("$3.27M"), Some(3_270_000.0));
/// assert_eq!(parse_display_value("10.05%"), Some(10.05));
/// assert_eq!(parse_display_value("n/a"), None);
/// ```
pub fn parse_display_value(display: &str) -> Option<f64> {
    let trimmed = display.trim();
    if let Some(percent) = trimmed.strip_suffix('%') {
        return parse_float(&percent.replace(',', ""));
    }

    let cleaned = trimmed.strip_prefix('$').unwrap_or(trimmed).replace(',', "");
    let (number, multiplier) = if let Some(n) = cleaned.strip_suffix('B') {
        (n, 1e9)
    } else if let Some(n) = cleaned.strip_suffix('M') {
        (n, 1e6)
    } else {
        (cleaned.as_str(), 1.0)
    };

    parse_float(number).map(|v| v * multiplier)
}

/// [`parse_display_value`], with unparseable input ordered as `0`.
pub fn display_value(display: &str) -> f64 {
    parse_display_value(display).unwrap_or(0.0)
}

/// Whether `display` is a well-formed TVL string: `$`, digits with optional
/// `,` thousands separators, an optional fraction and an optional `M`/`B`.
pub fn is_tvl_display(display: &str) -> bool {
    let Some(rest) = display.strip_prefix('$') else {
        return false;
    };
    let rest = rest
        .strip_suffix('B')
        .or_else(|| rest.strip_suffix('M'))
        .unwrap_or(rest);

    let (integer, fraction) = match rest.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (rest, None),
    };

    let groups: Vec<&str> = integer.split(',').collect();
    let integer_ok = match groups.split_first() {
        Some((first, tail)) => {
            !first.is_empty()
                && first.chars().all(|c| c.is_ascii_digit())
                && (tail.is_empty() || first.len() <= 3)
                && tail
                    .iter()
                    .all(|g| g.len() == 3 && g.chars().all(|c| c.is_ascii_digit()))
        }
        None => false,
    };
    let fraction_ok =
        fraction.map_or(true, |f| !f.is_empty() && f.chars().all(|c| c.is_ascii_digit()));

    integer_ok && fraction_ok
}

fn parse_float(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffix_multipliers() {
        assert_eq!(parse_display_value("$3.27M"), Some(3_270_000.0));
        assert_eq!(parse_display_value("$1.5B"), Some(1_500_000_000.0));
        assert_eq!(parse_display_value("$3,269,906"), Some(3_269_906.0));
        assert_eq!(parse_display_value("$12"), Some(12.0));
    }

    #[test]
    fn test_percentages() {
        assert_eq!(parse_display_value("10.05%"), Some(10.05));
        assert_eq!(parse_display_value("-2.5%"), Some(-2.5));
        assert_eq!(parse_display_value("0%"), Some(0.0));
    }

    #[test]
    fn test_plain_float() {
        assert_eq!(parse_display_value("42.5"), Some(42.5));
        assert_eq!(parse_display_value(" 7 "), Some(7.0));
    }

    #[test]
    fn test_unparseable_orders_as_zero() {
        assert_eq!(parse_display_value(""), None);
        assert_eq!(parse_display_value("$"), None);
        assert_eq!(parse_display_value("--"), None);
        assert_eq!(display_value("--"), 0.0);
    }

    #[test]
    fn test_tvl_grammar() {
        assert!(is_tvl_display("$3,269,906"));
        assert!(is_tvl_display("$3.27M"));
        assert!(is_tvl_display("$1B"));
        assert!(is_tvl_display("$950"));
        assert!(!is_tvl_display("3.27M"));
        assert!(!is_tvl_display("$3,26,906"));
        assert!(!is_tvl_display("$1.2K"));
        assert!(!is_tvl_display("$"));
        assert!(!is_tvl_display("$1."));
    }
}
