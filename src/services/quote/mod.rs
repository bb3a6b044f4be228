//! Random quote retrieval.
//!
//! A single GET to a public endpoint, run on a worker thread so the UI never
//! blocks. Any failure collapses to [`FALLBACK_QUOTE`].

mod fetcher;
mod state;

pub use fetcher::HttpQuoteSource;
pub use state::{QuoteState, FALLBACK_QUOTE};

use serde::Deserialize;
use thiserror::Error;

/// The subset of the quote API response the widget uses.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Quote {
    pub quote: String,
    #[serde(default)]
    pub author: Option<String>,
}

#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("network error while fetching quote: {0}")]
    Network(#[from] reqwest::Error),
    #[error("quote endpoint answered with HTTP {0}")]
    Status(reqwest::StatusCode),
    #[error("malformed quote response: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("quote worker stopped before reporting")]
    WorkerGone,
    #[error("no quote client available")]
    Unavailable,
}

#[cfg_attr(test, mockall::automock)]
pub trait QuoteSource: Send + Sync {
    fn fetch_random(&self) -> Result<Quote, QuoteError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_deserializes_with_extra_fields() {
        let quote: Quote = serde_json::from_str(
            r#"{"id": 12, "quote": "Well begun is half done.", "author": "Aristotle"}"#,
        )
        .unwrap();

        assert_eq!(quote.quote, "Well begun is half done.");
        assert_eq!(quote.author.as_deref(), Some("Aristotle"));
    }

    #[test]
    fn test_quote_without_author() {
        let quote: Quote = serde_json::from_str(r#"{"quote": "Keep going."}"#).unwrap();
        assert_eq!(quote.author, None);
    }

    #[test]
    fn test_quote_field_is_required() {
        let result: Result<Quote, _> = serde_json::from_str(r#"{"author": "Nobody"}"#);
        assert!(result.is_err());
    }
}
