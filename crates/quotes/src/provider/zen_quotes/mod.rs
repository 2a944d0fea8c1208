//! ZenQuotes provider, the backup quotes source.
//!
//! # API Endpoints
//!
//! - Random quote: `GET {base}/random`
//!
//! # Response Format
//!
//! The payload is either a single object or a one-element array, with the
//! text under `q` or `quote` and the author under `a` or `author`. The
//! shape is decoded once here as a tagged union and never re-inspected
//! downstream. Missing fields fall back to fixed literals.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;
use serde::Deserialize;
use tokio_util::sync::CancellationToken;

use crate::config::QuotesConfig;
use crate::errors::QuotesError;
use crate::models::ProviderQuote;
use crate::provider::QuoteProvider;

const PROVIDER_ID: &str = "ZEN_QUOTES";

/// Placeholder when the payload carries no text under either alias.
const MISSING_TEXT: &str = "No quote available";

/// Placeholder when the payload carries no author under either alias.
const MISSING_AUTHOR: &str = "Unknown";

/// One entry of the random quote payload.
#[derive(Debug, Deserialize)]
struct ZenQuoteEntry {
    /// Quote text, aliased field.
    #[serde(default, alias = "quote")]
    q: Option<String>,

    /// Author, aliased field.
    #[serde(default, alias = "author")]
    a: Option<String>,
}

/// The two payload shapes the API is known to produce.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ZenQuotesPayload {
    Single(ZenQuoteEntry),
    Many(Vec<ZenQuoteEntry>),
}

impl ZenQuotesPayload {
    fn into_quote(self) -> ProviderQuote {
        let entry = match self {
            ZenQuotesPayload::Single(entry) => Some(entry),
            ZenQuotesPayload::Many(entries) => entries.into_iter().next(),
        };

        match entry {
            Some(entry) => ProviderQuote {
                text: entry.q.unwrap_or_else(|| MISSING_TEXT.to_string()),
                author: entry.a.unwrap_or_else(|| MISSING_AUTHOR.to_string()),
            },
            None => ProviderQuote {
                text: MISSING_TEXT.to_string(),
                author: MISSING_AUTHOR.to_string(),
            },
        }
    }
}

/// ZenQuotes API provider.
pub struct ZenQuotesProvider {
    client: Client,
    base_url: String,
}

impl ZenQuotesProvider {
    /// Create a provider against `base_url` with a per-call timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn from_config(config: &QuotesConfig) -> Self {
        Self::new(&config.backup_base_url, config.backup_timeout)
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

        let payload: ZenQuotesPayload =
            response
                .json()
                .await
                .map_err(|e| QuotesError::MalformedResponse {
                    provider: PROVIDER_ID.to_string(),
                    message: e.to_string(),
                })?;

        Ok(payload.into_quote())
    }
}

#[async_trait]
impl QuoteProvider for ZenQuotesProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    fn priority(&self) -> u8 {
        2
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

    fn decode(json: &str) -> ProviderQuote {
        serde_json::from_str::<ZenQuotesPayload>(json)
            .unwrap()
            .into_quote()
    }

    #[test]
    fn test_provider_id_and_priority() {
        let provider = ZenQuotesProvider::new("https://zenquotes.io/api", Duration::from_secs(8));
        assert_eq!(provider.id(), "ZEN_QUOTES");
        assert_eq!(provider.priority(), 2);
    }

    #[test]
    fn test_decode_single_element_array() {
        let quote = decode(r#"[{"q": "Waste no more time arguing.", "a": "Marcus Aurelius"}]"#);
        assert_eq!(quote.text, "Waste no more time arguing.");
        assert_eq!(quote.author, "Marcus Aurelius");
    }

    #[test]
    fn test_decode_bare_object() {
        let quote = decode(r#"{"q": "Fall seven times, stand up eight.", "a": "Japanese proverb"}"#);
        assert_eq!(quote.text, "Fall seven times, stand up eight.");
        assert_eq!(quote.author, "Japanese proverb");
    }

    #[test]
    fn test_decode_alias_fields() {
        let quote = decode(r#"{"quote": "Stay hungry.", "author": "Steve Jobs"}"#);
        assert_eq!(quote.text, "Stay hungry.");
        assert_eq!(quote.author, "Steve Jobs");
    }

    #[test]
    fn test_decode_missing_fields_use_placeholders() {
        let quote = decode(r#"{"h": "<blockquote>markup only</blockquote>"}"#);
        assert_eq!(quote.text, "No quote available");
        assert_eq!(quote.author, "Unknown");
    }

    #[test]
    fn test_decode_empty_array_uses_placeholders() {
        let quote = decode("[]");
        assert_eq!(quote.text, "No quote available");
        assert_eq!(quote.author, "Unknown");
    }

    #[tokio::test]
    async fn test_cancelled_token_short_circuits() {
        let provider = ZenQuotesProvider::new("https://zenquotes.io/api", Duration::from_secs(8));
        let cancel = CancellationToken::new();
        cancel.cancel();

        let result = provider.fetch_random(&cancel).await;
        assert!(matches!(result, Err(QuotesError::Cancelled)));
    }

    #[tokio::test]
    #[ignore] // Requires network access
    async fn test_fetch_random_live() {
        let provider = ZenQuotesProvider::new("https://zenquotes.io/api", Duration::from_secs(8));
        let cancel = CancellationToken::new();

        let quote = provider.fetch_random(&cancel).await.unwrap();
        assert!(!quote.text.is_empty());
        assert!(!quote.author.is_empty());
    }
}
