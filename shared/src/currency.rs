use num_format::{Locale, ToFormattedString};

/// Format an amount of cents as `$1,234.56`.
///
/// Dollars get en-US thousands separators, cents are always two digits.
/// Negative amounts render with a leading minus: `-$5.00`.
pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let magnitude = cents.unsigned_abs();
    let dollars = magnitude / 100;
    let remaining_cents = magnitude % 100;

    format!("{}${}.{:02}", sign, dollars.to_formatted_string(&Locale::en), remaining_cents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_cents_basic() {
        assert_eq!(format_cents(0), "$0.00");
        assert_eq!(format_cents(5), "$0.05");
        assert_eq!(format_cents(50), "$0.50");
        assert_eq!(format_cents(100), "$1.00");
        assert_eq!(format_cents(12345), "$123.45");
    }

    #[test]
    fn test_format_cents_thousands_separators() {
        assert_eq!(format_cents(99_999), "$999.99");
        assert_eq!(format_cents(100_000), "$1,000.00");
        assert_eq!(format_cents(123_456_789), "$1,234,567.89");
        assert_eq!(format_cents(10_000_000_000), "$100,000,000.00");
    }

    #[test]
    fn test_format_cents_negative() {
        assert_eq!(format_cents(-500), "-$5.00");
        assert_eq!(format_cents(-123_456), "-$1,234.56");
        assert_eq!(format_cents(i64::MIN), "-$92,233,720,368,547,758.08");
    }

    #[test]
    fn test_format_group_boundaries() {
        assert_eq!(format_cents(9_999_999), "$99,999.99");
        assert_eq!(format_cents(10_000_000), "$100,000.00");
        assert_eq!(format_cents(100_000_001), "$1,000,000.01");
    }
}
