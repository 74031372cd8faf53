//! Lenient numeric coercion for form and query input.

/// Reads the integer prefix of `input`.
///
/// Leading whitespace and a single sign are allowed; parsing stops at the
/// first non-digit, so `"45.9"` and `"45 min"` both read as `45`. Returns
/// `None` when no digit follows, or when the prefix overflows `i64`.
#[must_use]
pub fn coerce_integer(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let magnitude: i128 = digits[..end].parse().ok()?;
    i64::try_from(if negative { -magnitude } else { magnitude }).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_integers() {
        assert_eq!(coerce_integer("45"), Some(45));
        assert_eq!(coerce_integer("0"), Some(0));
        assert_eq!(coerce_integer("-10"), Some(-10));
        assert_eq!(coerce_integer("+7"), Some(7));
    }

    #[test]
    fn test_truncates_at_first_non_digit() {
        assert_eq!(coerce_integer("45.9"), Some(45));
        assert_eq!(coerce_integer("  30 minutes"), Some(30));
        assert_eq!(coerce_integer("12abc"), Some(12));
    }

    #[test]
    fn test_rejects_input_without_leading_digits() {
        assert_eq!(coerce_integer(""), None);
        assert_eq!(coerce_integer("abc"), None);
        assert_eq!(coerce_integer("-"), None);
        assert_eq!(coerce_integer(".5"), None);
        assert_eq!(coerce_integer("--5"), None);
    }

    #[test]
    fn test_overflow_is_rejected() {
        assert_eq!(coerce_integer("99999999999999999999"), None);
        assert_eq!(coerce_integer("9223372036854775808"), None);
        assert_eq!(coerce_integer("-9223372036854775809"), None);
    }

    #[test]
    fn test_full_i64_range() {
        assert_eq!(coerce_integer("-9223372036854775808"), Some(i64::MIN));
        assert_eq!(coerce_integer("9223372036854775807"), Some(i64::MAX));
    }
}
