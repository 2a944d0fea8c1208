//! Environment-driven configuration.
//!
//! Every knob falls back to the library defaults; set `MOTIVA_*` variables
//! to override.

use std::time::Duration;

use motiva_quotes::QuotesConfig;

pub struct Config {
    pub quotes: QuotesConfig,
}

impl Config {
    pub fn from_env() -> Self {
        let mut quotes = QuotesConfig::default();

        if let Some(url) = env_url("MOTIVA_PRIMARY_URL") {
            quotes.primary_base_url = url;
        }
        if let Some(url) = env_url("MOTIVA_BACKUP_URL") {
            quotes.backup_base_url = url;
        }
        if let Some(url) = env_url("MOTIVA_TRANSLATE_URL") {
            quotes.translate_base_url = url;
        }
        if let Some(deadline) = env_secs("MOTIVA_LOAD_DEADLINE_SECS") {
            quotes.initial_load_deadline = deadline;
        }
        if let Some(deadline) = env_secs("MOTIVA_REFRESH_DEADLINE_SECS") {
            quotes.refresh_deadline = deadline;
        }
        if let Some(langpair) = env_value("MOTIVA_LANGPAIR") {
            quotes.langpair = langpair;
        }
        if env_value("MOTIVA_NO_TRANSLATE").is_some() {
            quotes.translate = false;
        }

        Self { quotes }
    }
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn env_url(key: &str) -> Option<String> {
    env_value(key).map(|v| v.trim_end_matches('/').to_string())
}

fn env_secs(key: &str) -> Option<Duration> {
    env_value(key)
        .and_then(|v| v.parse::<u64>().ok())
        .map(Duration::from_secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_url_strips_trailing_slash() {
        std::env::set_var("MOTIVA_TEST_URL", "https://example.com/api/ ");
        assert_eq!(
            env_url("MOTIVA_TEST_URL").as_deref(),
            Some("https://example.com/api")
        );
        std::env::remove_var("MOTIVA_TEST_URL");
    }

    #[test]
    fn test_env_secs_ignores_garbage() {
        std::env::set_var("MOTIVA_TEST_SECS", "not-a-number");
        assert_eq!(env_secs("MOTIVA_TEST_SECS"), None);

        std::env::set_var("MOTIVA_TEST_SECS", "9");
        assert_eq!(env_secs("MOTIVA_TEST_SECS"), Some(Duration::from_secs(9)));
        std::env::remove_var("MOTIVA_TEST_SECS");
    }
}
