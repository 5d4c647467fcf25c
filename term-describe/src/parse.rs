//! Numeric classification of a single raw cell.

/// Parses `raw` as a number.
///
/// Accepts integers, decimals, an optional sign, scientific notation, and
/// the `inf`/`nan` spellings, after trimming surrounding whitespace.
/// Single underscores between digits are accepted as group separators
/// (`1_000`). Returns `None` for anything else, including the empty string.
pub fn parse_numeric(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if !trimmed.contains('_') {
        return trimmed.parse::<f64>().ok();
    }
    if !underscores_between_digits(trimmed.as_bytes()) {
        return None;
    }
    trimmed.replace('_', "").parse::<f64>().ok()
}

fn underscores_between_digits(bytes: &[u8]) -> bool {
    bytes.iter().enumerate().all(|(i, &b)| {
        b != b'_'
            || (i > 0
                && bytes[i - 1].is_ascii_digit()
                && matches!(bytes.get(i + 1), Some(next) if next.is_ascii_digit()))
    })
}

/// Returns true if `raw` parses as a number.
pub fn is_numeric(raw: &str) -> bool {
    parse_numeric(raw).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers_and_decimals() {
        assert_eq!(parse_numeric("42"), Some(42.0));
        assert_eq!(parse_numeric("-7"), Some(-7.0));
        assert_eq!(parse_numeric("+3.25"), Some(3.25));
        assert_eq!(parse_numeric(".5"), Some(0.5));
        assert_eq!(parse_numeric("5."), Some(5.0));
    }

    #[test]
    fn test_scientific_notation() {
        assert_eq!(parse_numeric("1e3"), Some(1000.0));
        assert_eq!(parse_numeric("-1.5E-2"), Some(-0.015));
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        assert_eq!(parse_numeric("  12  "), Some(12.0));
        assert_eq!(parse_numeric("\t8\n"), Some(8.0));
    }

    #[test]
    fn test_rejects_non_numeric() {
        assert_eq!(parse_numeric(""), None);
        assert_eq!(parse_numeric("   "), None);
        assert_eq!(parse_numeric("abc"), None);
        assert_eq!(parse_numeric("1,000"), None);
        assert_eq!(parse_numeric("12abc"), None);
        assert!(!is_numeric("$5"));
    }

    #[test]
    fn test_digit_group_underscores() {
        assert_eq!(parse_numeric("1_000"), Some(1000.0));
        assert_eq!(parse_numeric(" 2_500.7_5 "), Some(2500.75));
        assert_eq!(parse_numeric("_1"), None);
        assert_eq!(parse_numeric("1_"), None);
        assert_eq!(parse_numeric("1__0"), None);
        assert_eq!(parse_numeric("1_.5"), None);
        assert_eq!(parse_numeric("in_f"), None);
    }

    #[test]
    fn test_special_values() {
        assert!(parse_numeric("inf").unwrap().is_infinite());
        assert!(parse_numeric("NaN").unwrap().is_nan());
    }
}
