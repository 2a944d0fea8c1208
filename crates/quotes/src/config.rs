//! Pipeline configuration.
//!
//! Endpoint URLs and deadlines are named configuration values with
//! documented defaults rather than literals scattered across call sites.
//! The deadline values for cold load and refresh are caller policy, carried
//! here so call sites share one source of truth.

use std::time::Duration;

/// Default primary quotes endpoint.
pub const DEFAULT_PRIMARY_BASE_URL: &str = "https://api.quotable.io";

/// Default backup quotes endpoint.
pub const DEFAULT_BACKUP_BASE_URL: &str = "https://zenquotes.io/api";

/// Default translation endpoint.
pub const DEFAULT_TRANSLATE_BASE_URL: &str = "https://api.mymemory.translated.net";

/// Inner deadline for a primary provider call.
pub const DEFAULT_PRIMARY_TIMEOUT: Duration = Duration::from_secs(10);

/// Inner deadline for a backup provider call.
pub const DEFAULT_BACKUP_TIMEOUT: Duration = Duration::from_secs(8);

/// Inner deadline for a translation call.
pub const DEFAULT_TRANSLATE_TIMEOUT: Duration = Duration::from_secs(10);

/// Outer deadline for a cold load.
pub const DEFAULT_INITIAL_LOAD_DEADLINE: Duration = Duration::from_secs(15);

/// Outer deadline for a refresh.
pub const DEFAULT_REFRESH_DEADLINE: Duration = Duration::from_secs(12);

/// Default language pair for the translation pass, `source|target`.
pub const DEFAULT_LANGPAIR: &str = "en|es";

/// Configuration for the quote pipeline.
#[derive(Clone, Debug)]
pub struct QuotesConfig {
    /// Base URL of the primary quotes API.
    pub primary_base_url: String,

    /// Base URL of the backup quotes API.
    pub backup_base_url: String,

    /// Base URL of the translation API.
    pub translate_base_url: String,

    /// Per-call timeout for the primary provider.
    pub primary_timeout: Duration,

    /// Per-call timeout for the backup provider.
    pub backup_timeout: Duration,

    /// Per-call timeout for the translation call.
    pub translate_timeout: Duration,

    /// Total time budget for a cold load.
    pub initial_load_deadline: Duration,

    /// Total time budget for a refresh.
    pub refresh_deadline: Duration,

    /// Language pair passed to the translation API.
    pub langpair: String,

    /// Set to `false` to skip the translation pass entirely.
    pub translate: bool,
}

impl Default for QuotesConfig {
    fn default() -> Self {
        Self {
            primary_base_url: DEFAULT_PRIMARY_BASE_URL.to_string(),
            backup_base_url: DEFAULT_BACKUP_BASE_URL.to_string(),
            translate_base_url: DEFAULT_TRANSLATE_BASE_URL.to_string(),
            primary_timeout: DEFAULT_PRIMARY_TIMEOUT,
            backup_timeout: DEFAULT_BACKUP_TIMEOUT,
            translate_timeout: DEFAULT_TRANSLATE_TIMEOUT,
            initial_load_deadline: DEFAULT_INITIAL_LOAD_DEADLINE,
            refresh_deadline: DEFAULT_REFRESH_DEADLINE,
            langpair: DEFAULT_LANGPAIR.to_string(),
            translate: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = QuotesConfig::default();
        assert_eq!(config.primary_base_url, "https://api.quotable.io");
        assert_eq!(config.backup_base_url, "https://zenquotes.io/api");
        assert_eq!(config.primary_timeout, Duration::from_secs(10));
        assert_eq!(config.backup_timeout, Duration::from_secs(8));
        assert_eq!(config.initial_load_deadline, Duration::from_secs(15));
        assert_eq!(config.refresh_deadline, Duration::from_secs(12));
        assert_eq!(config.langpair, "en|es");
        assert!(config.translate);
    }
}
