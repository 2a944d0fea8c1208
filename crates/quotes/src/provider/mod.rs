//! Quote provider abstractions and implementations.
//!
//! This module contains:
//! - The `QuoteProvider` trait that all providers implement
//! - Concrete provider implementations (Quotable, ZenQuotes)
//!
//! Providers are deliberately dumb: one endpoint, one decode, one inner
//! timeout. Ordering, fallback and translation live in the pipeline.

mod traits;

// Provider implementations
pub mod quotable;
pub mod zen_quotes;

// Re-exports
pub use quotable::QuotableProvider;
pub use traits::QuoteProvider;
pub use zen_quotes::ZenQuotesProvider;
