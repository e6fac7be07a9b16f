//! Date display.

use chrono::NaiveDate;

use super::error::FormatError;

/// Parses an ISO calendar date (`YYYY-MM-DD`).
///
/// # Errors
///
/// Returns `FormatError::InvalidDate` when the input is not a valid date.
pub fn parse_iso_date(input: &str) -> Result<NaiveDate, FormatError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|source| {
        FormatError::InvalidDate {
            input: input.to_string(),
            source,
        }
    })
}

/// Formats a date in en-US short form: month/day/year without padding.
#[must_use]
pub fn short_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

/// Parses an ISO date and formats it with [`short_date`].
///
/// # Errors
///
/// Returns `FormatError::InvalidDate` when the input is not a valid date.
pub fn short_date_from_iso(input: &str) -> Result<String, FormatError> {
    parse_iso_date(input).map(short_date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("2025-12-31", "12/31/2025")]
    #[case("2026-01-05", "1/5/2026")]
    #[case(" 2024-02-29 ", "2/29/2024")]
    fn test_short_date_from_iso(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(short_date_from_iso(input).unwrap(), expected);
    }

    #[rstest]
    #[case("2025-13-01")]
    #[case("2025-02-30")]
    #[case("31/12/2025")]
    #[case("")]
    fn test_malformed_dates_are_rejected(#[case] input: &str) {
        let err = short_date_from_iso(input).unwrap_err();
        assert!(matches!(err, FormatError::InvalidDate { .. }));
    }
}
