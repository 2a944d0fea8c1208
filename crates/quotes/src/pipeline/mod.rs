//! Quote resolution pipeline.
//!
//! Orchestrates the provider chain, the best-effort translation pass,
//! category derivation and the static fallback, all under an optional outer
//! deadline:
//!
//! 1. Try providers in priority order; any failure falls through to the
//!    next provider.
//! 2. Pass the winning text through the translator; keep the original text
//!    on any failure.
//! 3. Derive the category from the final text.
//! 4. If every provider failed, or the outer deadline fired first, resolve
//!    to a static fallback quote.
//!
//! The resolve operations cannot fail: every error is absorbed into the
//! fallback branch.

mod diagnostics;

pub use diagnostics::{FetchDiagnostics, ProviderAttempt};

use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use log::{debug, warn};
use reqwest::Client;
use tokio_util::sync::CancellationToken;

use crate::config::QuotesConfig;
use crate::fallback;
use crate::models::{Category, Quote, QuoteSource};
use crate::provider::{QuotableProvider, QuoteProvider, ZenQuotesProvider};
use crate::translate::{MyMemoryTranslator, Translator};

/// The quote fetch pipeline.
///
/// Stateless across invocations: each resolve call builds a fresh attempt
/// chain and nothing is cached or shared between calls.
pub struct QuotePipeline {
    providers: Vec<Arc<dyn QuoteProvider>>,
    translator: Option<Arc<dyn Translator>>,
    probe_client: Client,
    primary_base_url: String,
    initial_load_deadline: Duration,
    refresh_deadline: Duration,
}

impl QuotePipeline {
    /// Create the default pipeline: Quotable, then ZenQuotes, with the
    /// MyMemory translation pass (unless disabled in `config`).
    pub fn new(config: &QuotesConfig) -> Self {
        let providers: Vec<Arc<dyn QuoteProvider>> = vec![
            Arc::new(QuotableProvider::from_config(config)),
            Arc::new(ZenQuotesProvider::from_config(config)),
        ];

        let translator = if config.translate {
            Some(Arc::new(MyMemoryTranslator::from_config(config)) as Arc<dyn Translator>)
        } else {
            None
        };

        Self::with_providers(providers, translator, config)
    }

    /// Create a pipeline with custom providers and translator.
    ///
    /// Providers are tried in ascending [`priority`](QuoteProvider::priority)
    /// order regardless of the order given here.
    pub fn with_providers(
        mut providers: Vec<Arc<dyn QuoteProvider>>,
        translator: Option<Arc<dyn Translator>>,
        config: &QuotesConfig,
    ) -> Self {
        providers.sort_by_key(|p| p.priority());

        let probe_client = Client::builder()
            .timeout(config.primary_timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            providers,
            translator,
            probe_client,
            primary_base_url: config.primary_base_url.clone(),
            initial_load_deadline: config.initial_load_deadline,
            refresh_deadline: config.refresh_deadline,
        }
    }

    /// Resolve one quote with no outer deadline.
    ///
    /// Still bounded: every provider call carries its own client-level
    /// timeout, so the chain settles within the sum of inner timeouts.
    pub async fn resolve_quote(&self) -> Quote {
        let cancel = CancellationToken::new();
        let (quote, _) = self.resolve_chain(&cancel).await;
        quote
    }

    /// Resolve one quote within `deadline`.
    ///
    /// First-settled wins: whichever of the attempt chain and the deadline
    /// finishes first determines the result. A provider success arriving
    /// after the deadline has fired is discarded.
    pub async fn resolve_quote_within(&self, deadline: Duration) -> Quote {
        self.resolve_quote_with_diagnostics(deadline).await.0
    }

    /// Like [`resolve_quote_within`](Self::resolve_quote_within), also
    /// returning the attempt record for this resolution.
    pub async fn resolve_quote_with_diagnostics(
        &self,
        deadline: Duration,
    ) -> (Quote, FetchDiagnostics) {
        let cancel = CancellationToken::new();

        tokio::select! {
            resolved = self.resolve_chain(&cancel) => resolved,
            _ = tokio::time::sleep(deadline) => {
                // A success arriving after this point must not be applied;
                // cancel in-flight calls and abort their connections.
                cancel.cancel();
                warn!(
                    "Deadline of {:?} elapsed before any provider settled, using static fallback",
                    deadline
                );
                (fallback::fallback_quote(), FetchDiagnostics::timed_out())
            }
        }
    }

    /// Resolve the quote of the day (cold-load deadline).
    pub async fn quote_of_the_day(&self) -> Quote {
        self.resolve_quote_within(self.initial_load_deadline).await
    }

    /// Resolve a fresh quote for a refresh action (shorter deadline).
    pub async fn refresh_quote(&self) -> Quote {
        self.resolve_quote_within(self.refresh_deadline).await
    }

    /// Resolve `count` quotes concurrently.
    ///
    /// Each resolution is independent; a failed chain yields a fallback
    /// quote for that slot, never a hole.
    pub async fn resolve_many(&self, count: usize) -> Vec<Quote> {
        join_all((0..count).map(|_| self.resolve_quote())).await
    }

    /// Probe the primary endpoint with a HEAD request.
    pub async fn check_connectivity(&self) -> bool {
        let url = format!("{}/random", self.primary_base_url);
        match self.probe_client.head(&url).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                debug!("Connectivity check failed: {}", e);
                false
            }
        }
    }

    /// Total time budget for a cold load.
    pub fn initial_load_deadline(&self) -> Duration {
        self.initial_load_deadline
    }

    /// Total time budget for a refresh.
    pub fn refresh_deadline(&self) -> Duration {
        self.refresh_deadline
    }

    async fn resolve_chain(&self, cancel: &CancellationToken) -> (Quote, FetchDiagnostics) {
        let mut diagnostics = FetchDiagnostics::new();

        for provider in &self.providers {
            match provider.fetch_random(cancel).await {
                Ok(raw) => {
                    debug!("Provider '{}' returned a quote by {}", provider.id(), raw.author);
                    diagnostics.record_success(provider.id());
                    diagnostics.source = QuoteSource::Provider(provider.id());

                    let text = self
                        .translate_best_effort(raw.text, cancel, &mut diagnostics)
                        .await;
                    let category = Category::derive(&text);

                    return (Quote::new(text, raw.author, category), diagnostics);
                }
                Err(e) => {
                    warn!(
                        "Provider '{}' failed to fetch a quote: {}. Trying next.",
                        provider.id(),
                        e
                    );
                    diagnostics.record_error(provider.id(), e.to_string());
                }
            }
        }

        debug!(
            "All providers failed ({}), using static fallback",
            diagnostics.summary()
        );
        (fallback::fallback_quote(), diagnostics)
    }

    async fn translate_best_effort(
        &self,
        text: String,
        cancel: &CancellationToken,
        diagnostics: &mut FetchDiagnostics,
    ) -> String {
        let Some(translator) = &self.translator else {
            return text;
        };

        match translator.translate(&text, cancel).await {
            Ok(translated) => {
                diagnostics.translated = true;
                translated
            }
            Err(e) => {
                debug!("Translation failed, keeping original text: {}", e);
                text
            }
        }
    }
}
