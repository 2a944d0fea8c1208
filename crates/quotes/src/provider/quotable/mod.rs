//! Quotable provider, the primary quotes source.
//!
//! # API Endpoints
//!
//! - Random quote: `GET {base}/random`
//!
//! # Response Format
//!
//! A JSON object carrying `content` and `author` fields; everything else in
//! the payload is ignored.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::Client;
use serde::Deserialize;
use tokio_util::sync::CancellationToken;

use crate::config::QuotesConfig;
use crate::errors::QuotesError;
use crate::models::ProviderQuote;
use crate::provider::QuoteProvider;

const PROVIDER_ID: &str = "QUOTABLE";

/// Response from the random quote endpoint.
#[derive(Debug, Deserialize)]
struct RandomQuoteResponse {
    content: String,
    author: String,
}

/// Quotable API provider.
pub struct QuotableProvider {
    client: Client,
    base_url: String,
}

impl QuotableProvider {
    /// Create a provider against `base_url` with a per-call timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .default_headers(json_headers())
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn from_config(config: &QuotesConfig) -> Self {
        Self::new(&config.primary_base_url, config.primary_timeout)
    }

    async fn fetch_inner(&self) -> Result<ProviderQuote, QuotesError> {
        let url = format!("{}/random", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| QuotesError::request(PROVIDER_ID, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(QuotesError::Status {
                provider: PROVIDER_ID.to_string(),
                status: status.as_u16(),
            });
        }

        let body: RandomQuoteResponse =
            response
                .json()
                .await
                .map_err(|e| QuotesError::MalformedResponse {
                    provider: PROVIDER_ID.to_string(),
                    message: e.to_string(),
                })?;

        Ok(ProviderQuote {
            text: body.content,
            author: body.author,
        })
    }
}

fn json_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers
}

#[async_trait]
impl QuoteProvider for QuotableProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    fn priority(&self) -> u8 {
        1
    }

    async fn fetch_random(
        &self,
        cancel: &CancellationToken,
    ) -> Result<ProviderQuote, QuotesError> {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(QuotesError::Cancelled),
            result = self.fetch_inner() => result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_id_and_priority() {
        let provider = QuotableProvider::new("https://api.quotable.io", Duration::from_secs(10));
        assert_eq!(provider.id(), "QUOTABLE");
        assert_eq!(provider.priority(), 1);
    }

    #[test]
    fn test_decode_random_quote_response() {
        let json = r#"{
            "_id": "abc123",
            "content": "The way to get started is to quit talking and begin doing.",
            "author": "Walt Disney",
            "tags": ["famous-quotes"],
            "length": 58
        }"#;

        let body: RandomQuoteResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            body.content,
            "The way to get started is to quit talking and begin doing."
        );
        assert_eq!(body.author, "Walt Disney");
    }

    #[test]
    fn test_decode_rejects_missing_content() {
        let json = r#"{"author": "Nobody"}"#;
        assert!(serde_json::from_str::<RandomQuoteResponse>(json).is_err());
    }

    #[tokio::test]
    async fn test_cancelled_token_short_circuits() {
        let provider = QuotableProvider::new("https://api.quotable.io", Duration::from_secs(10));
        let cancel = CancellationToken::new();
        cancel.cancel();

        let result = provider.fetch_random(&cancel).await;
        assert!(matches!(result, Err(QuotesError::Cancelled)));
    }

    #[tokio::test]
    #[ignore] // Requires network access
    async fn test_fetch_random_live() {
        let provider = QuotableProvider::new("https://api.quotable.io", Duration::from_secs(10));
        let cancel = CancellationToken::new();

        let quote = provider.fetch_random(&cancel).await.unwrap();
        assert!(!quote.text.is_empty());
        assert!(!quote.author.is_empty());
    }
}
