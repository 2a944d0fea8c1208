//! Best-effort translation of quote text.
//!
//! The pipeline feeds the winning provider text through a translator and
//! keeps the original text on any failure. Translation is never fatal and
//! never retried.
//!
//! # API Endpoints
//!
//! - `GET {base}/get?q={urlencoded text}&langpair={source|target}`
//!
//! # Response Format
//!
//! `{"responseStatus": 200, "responseData": {"translatedText": "..."}}`;
//! only `responseStatus == 200` with a present body counts as success.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tokio_util::sync::CancellationToken;

use crate::config::QuotesConfig;
use crate::errors::QuotesError;

/// Trait for translation backends.
///
/// Implementations must observe `cancel` the same way providers do.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate `text`, returning the translated string.
    async fn translate(
        &self,
        text: &str,
        cancel: &CancellationToken,
    ) -> Result<String, QuotesError>;
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    #[serde(rename = "responseStatus")]
    response_status: i64,

    #[serde(rename = "responseData", default)]
    response_data: Option<TranslateData>,
}

#[derive(Debug, Deserialize)]
struct TranslateData {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

/// MyMemory translation client.
pub struct MyMemoryTranslator {
    client: Client,
    base_url: String,
    langpair: String,
}

impl MyMemoryTranslator {
    /// Create a translator against `base_url` with a per-call timeout.
    pub fn new(
        base_url: impl Into<String>,
        langpair: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into(),
            langpair: langpair.into(),
        }
    }

    pub fn from_config(config: &QuotesConfig) -> Self {
        Self::new(
            &config.translate_base_url,
            &config.langpair,
            config.translate_timeout,
        )
    }

    async fn translate_inner(&self, text: &str) -> Result<String, QuotesError> {
        let url = format!(
            "{}/get?q={}&langpair={}",
            self.base_url,
            urlencoding::encode(text),
            self.langpair
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| QuotesError::TranslationUnavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(QuotesError::TranslationUnavailable(format!(
                "HTTP {}",
                status.as_u16()
            )));
        }

        let body: TranslateResponse = response
            .json()
            .await
            .map_err(|e| QuotesError::TranslationUnavailable(e.to_string()))?;

        if body.response_status != 200 {
            return Err(QuotesError::TranslationUnavailable(format!(
                "responseStatus {}",
                body.response_status
            )));
        }

        match body.response_data {
            Some(data) => Ok(data.translated_text),
            None => Err(QuotesError::TranslationUnavailable(
                "missing responseData".to_string(),
            )),
        }
    }
}

#[async_trait]
impl Translator for MyMemoryTranslator {
    async fn translate(
        &self,
        text: &str,
        cancel: &CancellationToken,
    ) -> Result<String, QuotesError> {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(QuotesError::Cancelled),
            result = self.translate_inner(text) => result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_successful_response() {
        let json = r#"{
            "responseData": {"translatedText": "La forma de empezar es dejar de hablar."},
            "responseStatus": 200,
            "matches": []
        }"#;

        let body: TranslateResponse = serde_json::from_str(json).unwrap();
        assert_eq!(body.response_status, 200);
        assert_eq!(
            body.response_data.unwrap().translated_text,
            "La forma de empezar es dejar de hablar."
        );
    }

    #[test]
    fn test_decode_error_status() {
        let json = r#"{"responseStatus": 403, "responseData": null}"#;
        let body: TranslateResponse = serde_json::from_str(json).unwrap();
        assert_eq!(body.response_status, 403);
        assert!(body.response_data.is_none());
    }

    #[tokio::test]
    async fn test_cancelled_token_short_circuits() {
        let translator = MyMemoryTranslator::new(
            "https://api.mymemory.translated.net",
            "en|es",
            Duration::from_secs(10),
        );
        let cancel = CancellationToken::new();
        cancel.cancel();

        let result = translator.translate("hello", &cancel).await;
        assert!(matches!(result, Err(QuotesError::Cancelled)));
    }

    #[tokio::test]
    #[ignore] // Requires network access
    async fn test_translate_live() {
        let translator = MyMemoryTranslator::new(
            "https://api.mymemory.translated.net",
            "en|es",
            Duration::from_secs(10),
        );
        let cancel = CancellationToken::new();

        let translated = translator.translate("Good morning", &cancel).await.unwrap();
        assert!(!translated.is_empty());
    }
}
