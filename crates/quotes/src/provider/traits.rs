//! Quote provider trait definition.

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::errors::QuotesError;
use crate::models::ProviderQuote;

/// Trait for quote providers.
///
/// Implement this trait to add a new quotes source. The pipeline tries
/// providers in priority order and falls through to the next one on any
/// failure.
///
/// Implementations must observe `cancel`: once the token fires the call
/// returns [`QuotesError::Cancelled`] promptly and the underlying request
/// is aborted, not merely ignored.
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Unique identifier for this provider.
    ///
    /// A constant string like "QUOTABLE" or "ZEN_QUOTES"; used for logging
    /// and diagnostics.
    fn id(&self) -> &'static str;

    /// Provider priority for ordering.
    ///
    /// Lower values = higher priority. Default is 10.
    fn priority(&self) -> u8 {
        10
    }

    /// Fetch one random quote.
    async fn fetch_random(
        &self,
        cancel: &CancellationToken,
    ) -> Result<ProviderQuote, QuotesError>;
}
