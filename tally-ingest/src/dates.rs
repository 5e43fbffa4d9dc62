//! Statement rows carry day + month only; the year comes from the caller.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use tally_core::NormalizeError;

/// Parse `"{text} {year}"` with `format` into a midnight timestamp.
///
/// Inner whitespace in `text` is collapsed first ("1  Jan" == "1 Jan").
pub fn parse_with_year(text: &str, year: i32, format: &str) -> Result<NaiveDateTime, NormalizeError> {
    let composed = format!("{} {year}", text.split_whitespace().collect::<Vec<_>>().join(" "));
    NaiveDate::parse_from_str(&composed, format)
        .map(|d| d.and_time(NaiveTime::MIN))
        .map_err(|source| NormalizeError::DateParse {
            text: composed,
            format: format.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn midnight(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_time(NaiveTime::MIN)
    }

    #[test]
    fn test_full_and_short_month_names() {
        assert_eq!(parse_with_year("1 January", 2024, "%d %B %Y").unwrap(), midnight(2024, 1, 1));
        assert_eq!(parse_with_year("1 Jan", 2024, "%d %B %Y").unwrap(), midnight(2024, 1, 1));
        assert_eq!(parse_with_year(" 28  Feb ", 2023, "%d %B %Y").unwrap(), midnight(2023, 2, 28));
    }

    #[test]
    fn test_unknown_month_is_date_error() {
        match parse_with_year("1 Smarch", 2024, "%d %B %Y") {
            Err(NormalizeError::DateParse { text, format, .. }) => {
                assert_eq!(text, "1 Smarch 2024");
                assert_eq!(format, "%d %B %Y");
            }
            other => panic!("expected DateParse, got {other:?}"),
        }
    }

    #[test]
    fn test_impossible_day_is_date_error() {
        assert!(matches!(
            parse_with_year("30 Feb", 2024, "%d %B %Y"),
            Err(NormalizeError::DateParse { .. })
        ));
    }
}
