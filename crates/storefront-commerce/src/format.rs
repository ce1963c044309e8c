//! Formatting utilities for display strings.

use chrono::{DateTime, Utc};

/// Group an integer amount in thousands with dots (e.g., 250000 -> "250.000").
pub fn group_thousands(amount: i64) -> String {
    let negative = amount < 0;
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    if negative {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Format a Unix timestamp (seconds) as "dd/MM/yyyy HH:mm".
pub fn format_timestamp(secs: i64) -> String {
    match DateTime::<Utc>::from_timestamp(secs, 0) {
        Some(dt) => dt.format("%d/%m/%Y %H:%M").to_string(),
        None => String::from("-"),
    }
}

/// Format a Unix timestamp (seconds) as a date only, "dd/MM/yyyy".
pub fn format_date(secs: i64) -> String {
    match DateTime::<Utc>::from_timestamp(secs, 0) {
        Some(dt) => dt.format("%d/%m/%Y").to_string(),
        None => String::from("-"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1.000");
        assert_eq!(group_thousands(250_000), "250.000");
        assert_eq!(group_thousands(1_234_567), "1.234.567");
    }

    #[test]
    fn test_group_thousands_negative() {
        assert_eq!(group_thousands(-25_000), "-25.000");
    }

    #[test]
    fn test_format_date() {
        // 2024-01-15 00:00:00 UTC
        assert_eq!(format_date(1_705_276_800), "15/01/2024");
    }

    #[test]
    fn test_format_timestamp_invalid() {
        assert_eq!(format_timestamp(i64::MAX), "-");
    }
}
