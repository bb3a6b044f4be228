use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use reqwest::StatusCode;

use super::{Quote, QuoteError, QuoteSource};
use crate::models::settings::QuoteSettings;

/// Fetches one random quote per call. No retries.
pub struct HttpQuoteSource {
    client: Client,
    url: String,
}

impl HttpQuoteSource {
    pub fn new(settings: &QuoteSettings) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .context("Failed to build quote HTTP client")?;

        Ok(Self {
            client,
            url: settings.url.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl QuoteSource for HttpQuoteSource {
    fn fetch_random(&self) -> Result<Quote, QuoteError> {
        let response = self.client.get(&self.url).send()?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(QuoteError::Status(status));
        }

        let body = response.text()?;
        let quote = serde_json::from_str(&body)?;
        Ok(quote)
    }
}
