//! Per-resolution diagnostics.

use crate::models::QuoteSource;

/// Record of one provider attempt within a resolution.
#[derive(Clone, Debug)]
pub struct ProviderAttempt {
    pub provider_id: &'static str,
    pub error: Option<String>,
    pub success: bool,
}

/// Diagnostic record for a single resolution.
///
/// The resolve operations themselves never fail, so this record is the only
/// way for a caller to learn which path produced the quote, for example to
/// surface a "no connection" hint when the static fallback was used.
#[derive(Clone, Debug)]
pub struct FetchDiagnostics {
    /// Provider attempts in the order they ran.
    pub attempts: Vec<ProviderAttempt>,

    /// The path that produced the returned quote.
    pub source: QuoteSource,

    /// Whether the translation pass replaced the text.
    pub translated: bool,

    /// Whether the outer deadline fired before the chain settled. When set,
    /// `attempts` may be incomplete: in-flight attempts were cancelled.
    pub deadline_elapsed: bool,
}

impl FetchDiagnostics {
    pub(crate) fn new() -> Self {
        Self {
            attempts: Vec::new(),
            source: QuoteSource::Fallback,
            translated: false,
            deadline_elapsed: false,
        }
    }

    pub(crate) fn timed_out() -> Self {
        Self {
            deadline_elapsed: true,
            ..Self::new()
        }
    }

    pub(crate) fn record_error(&mut self, provider_id: &'static str, error: String) {
        self.attempts.push(ProviderAttempt {
            provider_id,
            error: Some(error),
            success: false,
        });
    }

    pub(crate) fn record_success(&mut self, provider_id: &'static str) {
        self.attempts.push(ProviderAttempt {
            provider_id,
            error: None,
            success: true,
        });
    }

    /// True if the returned quote came from the static fallback list.
    pub fn used_fallback(&self) -> bool {
        self.source.is_fallback()
    }

    /// Summary for logging/debugging.
    pub fn summary(&self) -> String {
        if self.attempts.is_empty() {
            return if self.deadline_elapsed {
                "deadline elapsed before any attempt settled".to_string()
            } else {
                "no attempts".to_string()
            };
        }

        self.attempts
            .iter()
            .map(|a| {
                if a.success {
                    format!("{}: SUCCESS", a.provider_id)
                } else if let Some(err) = &a.error {
                    format!("{}: ERROR ({})", a.provider_id, err)
                } else {
                    format!("{}: UNKNOWN", a.provider_id)
                }
            })
            .collect::<Vec<_>>()
            .join(" -> ")
    }
}
