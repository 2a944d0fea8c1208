//! Core value objects for the quote pipeline.

mod category;
mod quote;

pub use category::Category;
pub use quote::{ProviderQuote, Quote, QuoteSource};
