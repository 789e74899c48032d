//! Result formatting.

/// Format a result for printing or for the keypad display.
///
/// Uses the shortest text that parses back to the same value, so whole
/// numbers drop the fractional part (`5`, not `5.0`).
pub fn format_result(value: f64) -> String {
    // Avoid showing "-0"
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_numbers() {
        assert_eq!(format_result(5.0), "5");
        assert_eq!(format_result(80.0), "80");
        assert_eq!(format_result(-12.0), "-12");
    }

    #[test]
    fn test_fractions() {
        assert_eq!(format_result(2.5), "2.5");
        assert_eq!(format_result(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn test_negative_zero() {
        assert_eq!(format_result(-0.0), "0");
    }

    #[test]
    fn test_round_trips() {
        for value in [1.0 / 3.0, 1e21, -7.25, 123456789.0] {
            let parsed: f64 = format_result(value).parse().unwrap();
            assert_eq!(parsed, value);
        }
    }
}
