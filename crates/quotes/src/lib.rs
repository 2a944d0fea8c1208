//! Motiva Quotes Crate
//!
//! This crate provides the quote fetching pipeline for the Motiva daily
//! quote app: resolve exactly one displayable quote per request, never
//! failing, by racing a provider chain against a caller-supplied deadline.
//!
//! # Overview
//!
//! The pipeline supports:
//! - Multiple providers tried in priority order (Quotable, ZenQuotes)
//! - A best-effort translation pass (MyMemory)
//! - Keyword-based category derivation
//! - A static in-memory fallback when every network path fails
//!
//! # Architecture
//!
//! ```text
//! +------------------+
//! |  QuotePipeline   |  (deadline race + cancellation)
//! +------------------+
//!         |
//!         v
//! +------------------+     +------------------+
//! |  QuoteProvider   | --> |   Translator     |  (best-effort)
//! |  chain           |     +------------------+
//! +------------------+             |
//!         |                        v
//!         |               +------------------+
//!         +-------------> | Category::derive |
//!  (all failed)           +------------------+
//!         |                        |
//!         v                        v
//! +------------------+     +------------------+
//! | static fallback  | --> |      Quote       |
//! +------------------+     +------------------+
//! ```
//!
//! # Core Types
//!
//! - [`Quote`] - The displayable value object (text, author, category)
//! - [`QuotePipeline`] - The resolve operations and the deadline race
//! - [`QuotesConfig`] - Named endpoints and deadlines with documented defaults
//! - [`QuoteProvider`] - Trait for quote sources
//! - [`Translator`] - Trait for the translation pass
//! - [`FetchDiagnostics`] - Per-resolution attempt record

pub mod config;
pub mod errors;
pub mod fallback;
pub mod models;
pub mod pipeline;
pub mod provider;
pub mod translate;

// Re-export all public types from models
pub use models::{Category, ProviderQuote, Quote, QuoteSource};

// Re-export configuration
pub use config::QuotesConfig;

// Re-export errors
pub use errors::QuotesError;

// Re-export provider types
pub use provider::{QuotableProvider, QuoteProvider, ZenQuotesProvider};

// Re-export the pipeline
pub use pipeline::{FetchDiagnostics, ProviderAttempt, QuotePipeline};

// Re-export translation types
pub use translate::{MyMemoryTranslator, Translator};
