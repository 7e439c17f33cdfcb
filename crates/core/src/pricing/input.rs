//! Locale-tolerant numeric input handling.
//!
//! Quantity and price fields arrive as raw user keystrokes: decimal commas,
//! stray currency symbols, half-typed numbers like `"1.2.3"`. These helpers
//! turn that into a float without ever failing mid-keystroke.

/// Strip a typed numeric string down to a single parseable decimal.
///
/// Removes everything outside `[0-9.,]`, converts the first comma to a
/// period, and merges any extra period-separated segments back into the
/// integer part so at most one decimal point survives.
pub fn normalize_real(text: &str) -> String {
    let mut cleaned = String::with_capacity(text.len());
    let mut seen_separator = false;
    for ch in text.chars() {
        match ch {
            '0'..='9' => cleaned.push(ch),
            '.' | ',' if !seen_separator => {
                cleaned.push('.');
                seen_separator = true;
            }
            '.' | ',' => {}
            _ => {}
        }
    }
    cleaned
}

/// Parse a typed numeric string, returning `fallback` when nothing numeric
/// survives normalization.
pub fn parse_real(text: &str, fallback: f64) -> f64 {
    let normalized = normalize_real(text);
    normalized.parse::<f64>().unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::{normalize_real, parse_real};

    #[test]
    fn decimal_comma_parses_as_decimal_point() {
        assert_eq!(parse_real("3,50", 0.0), 3.5);
        assert_eq!(normalize_real("3,50"), "3.50");
    }

    #[test]
    fn extra_separators_collapse_to_one() {
        assert_eq!(normalize_real("1.2.3"), "1.23");
        assert_eq!(normalize_real("1,2,3"), "1.23");
        assert_eq!(parse_real("1.2.3", 0.0), 1.23);
    }

    #[test]
    fn garbage_characters_are_stripped() {
        assert_eq!(parse_real("€ 12.99", 0.0), 12.99);
        assert_eq!(parse_real("abc", 7.0), 7.0);
        assert_eq!(parse_real("", 0.0), 0.0);
    }

    #[test]
    fn round_trip_is_stable() {
        for raw in ["3,50", "0.25", "12", "1.2.3"] {
            let value = parse_real(raw, 0.0);
            let reparsed = parse_real(&normalize_real(&value.to_string()), 0.0);
            assert_eq!(reparsed, value, "round trip of {raw}");
        }
    }
}
