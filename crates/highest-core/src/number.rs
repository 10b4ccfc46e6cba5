//! Leading-prefix integer parsing.
//!
//! Both the score field and the display length are read the lenient way:
//! leading whitespace and an optional sign are skipped, then as many decimal
//! digits as are present are consumed. Anything after the digits is ignored,
//! so `"12abc"` reads as 12 while `"abc"` has no value at all.

/// Result of reading a leading integer from a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntPrefix {
    /// Zero or a positive value (`"-0"` lands here too).
    NonNegative(u64),
    /// A strictly negative value.
    Negative,
    /// A positive value too large for `u64`.
    Overflow,
}

/// Read the leading integer of `text`. Returns `None` when no digit follows
/// the optional whitespace and sign.
pub fn parse_int_prefix(text: &str) -> Option<IntPrefix> {
    let text = text.trim_start_matches(|c: char| c.is_whitespace() || c == '\u{feff}');

    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let mut value: Option<u64> = Some(0);
    for digit in rest.bytes().take(digits_len) {
        value = value
            .and_then(|v| v.checked_mul(10))
            .and_then(|v| v.checked_add(u64::from(digit - b'0')));
    }

    Some(match (negative, value) {
        (true, Some(0)) => IntPrefix::NonNegative(0),
        (true, _) => IntPrefix::Negative,
        (false, Some(v)) => IntPrefix::NonNegative(v),
        (false, None) => IntPrefix::Overflow,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_integers() {
        assert_eq!(parse_int_prefix("42"), Some(IntPrefix::NonNegative(42)));
        assert_eq!(parse_int_prefix("0"), Some(IntPrefix::NonNegative(0)));
        assert_eq!(parse_int_prefix("+7"), Some(IntPrefix::NonNegative(7)));
    }

    #[test]
    fn test_trailing_garbage_is_ignored() {
        assert_eq!(parse_int_prefix("12abc"), Some(IntPrefix::NonNegative(12)));
        assert_eq!(parse_int_prefix("3.9"), Some(IntPrefix::NonNegative(3)));
        assert_eq!(parse_int_prefix("0x10"), Some(IntPrefix::NonNegative(0)));
        assert_eq!(parse_int_prefix("  5 "), Some(IntPrefix::NonNegative(5)));
    }

    #[test]
    fn test_no_digits() {
        assert_eq!(parse_int_prefix(""), None);
        assert_eq!(parse_int_prefix("abc"), None);
        assert_eq!(parse_int_prefix("-"), None);
        assert_eq!(parse_int_prefix("- 1"), None);
        assert_eq!(parse_int_prefix("   "), None);
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(parse_int_prefix("-1"), Some(IntPrefix::Negative));
        assert_eq!(parse_int_prefix("-3"), Some(IntPrefix::Negative));
        assert_eq!(parse_int_prefix("-0"), Some(IntPrefix::NonNegative(0)));
        assert_eq!(
            parse_int_prefix("-99999999999999999999999"),
            Some(IntPrefix::Negative)
        );
    }

    #[test]
    fn test_overflow() {
        assert_eq!(
            parse_int_prefix("18446744073709551615"),
            Some(IntPrefix::NonNegative(u64::MAX))
        );
        assert_eq!(
            parse_int_prefix("18446744073709551616"),
            Some(IntPrefix::Overflow)
        );
    }
}
