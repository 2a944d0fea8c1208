//! Error types for the quote pipeline.
//!
//! Every variant here is absorbed inside the pipeline: the public resolve
//! operations return a plain [`Quote`](crate::models::Quote) and cannot
//! fail. The taxonomy exists so provider and translation failures can be
//! logged precisely and so tests can assert on the failure mode.

use thiserror::Error;

/// Errors that can occur while fetching or translating a quote.
#[derive(Error, Debug)]
pub enum QuotesError {
    /// A transport-level failure while talking to a provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The per-call inner deadline expired.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// The provider answered with a non-2xx status.
    #[error("Unexpected status: {provider} - {status}")]
    Status {
        /// The provider that returned the status
        provider: String,
        /// The HTTP status code
        status: u16,
    },

    /// The response body did not match the expected shape.
    #[error("Malformed response: {provider} - {message}")]
    MalformedResponse {
        /// The provider that returned the body
        provider: String,
        /// Decode failure detail
        message: String,
    },

    /// The translation pass failed. Never fatal: the pipeline keeps the
    /// untranslated text.
    #[error("Translation unavailable: {0}")]
    TranslationUnavailable(String),

    /// The cancellation token fired before the call settled (the outer
    /// deadline won the race).
    #[error("Cancelled")]
    Cancelled,
}

impl QuotesError {
    /// Classify a `reqwest` failure for a given provider.
    ///
    /// Client-level timeouts become [`QuotesError::Timeout`]; everything
    /// else stays a transport error.
    pub fn request(provider: &str, error: reqwest::Error) -> Self {
        if error.is_timeout() {
            QuotesError::Timeout {
                provider: provider.to_string(),
            }
        } else {
            QuotesError::Network(error)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = QuotesError::Timeout {
            provider: "QUOTABLE".to_string(),
        };
        assert_eq!(format!("{}", error), "Timeout: QUOTABLE");

        let error = QuotesError::Status {
            provider: "ZEN_QUOTES".to_string(),
            status: 503,
        };
        assert_eq!(format!("{}", error), "Unexpected status: ZEN_QUOTES - 503");

        let error = QuotesError::MalformedResponse {
            provider: "QUOTABLE".to_string(),
            message: "missing field `content`".to_string(),
        };
        assert_eq!(
            format!("{}", error),
            "Malformed response: QUOTABLE - missing field `content`"
        );

        let error = QuotesError::Cancelled;
        assert_eq!(format!("{}", error), "Cancelled");
    }

    #[test]
    fn test_translation_unavailable_display() {
        let error = QuotesError::TranslationUnavailable("responseStatus 403".to_string());
        assert_eq!(
            format!("{}", error),
            "Translation unavailable: responseStatus 403"
        );
    }
}
