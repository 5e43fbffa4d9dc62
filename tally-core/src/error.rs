//! Errors raised while turning raw tables into a statement.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NormalizeError {
    #[error("missing required parameter `{0}`")]
    MissingParameter(&'static str),

    #[error("invalid value for parameter `{name}`: {value:?}")]
    InvalidParameter { name: &'static str, value: String },

    #[error("no ledger tables left after table selection")]
    NoLedgerTables,

    #[error("no amount candidate column parses")]
    UnparseableAmount,

    #[error("cannot parse date {text:?} with format {format:?}: {source}")]
    DateParse {
        text: String,
        format: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("unknown bank: {0}")]
    UnknownBank(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unparseable_amount_message() {
        assert_eq!(
            NormalizeError::UnparseableAmount.to_string(),
            "no amount candidate column parses"
        );
    }

    #[test]
    fn test_date_parse_message_names_text_and_format() {
        let source = chrono::NaiveDate::parse_from_str("1 Smarch 2024", "%d %B %Y").unwrap_err();
        let err = NormalizeError::DateParse {
            text: "1 Smarch 2024".to_string(),
            format: "%d %B %Y".to_string(),
            source,
        };
        let msg = err.to_string();
        assert!(msg.contains("\"1 Smarch 2024\""), "{msg}");
        assert!(msg.contains("%d %B %Y"), "{msg}");
    }
}
