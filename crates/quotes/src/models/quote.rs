use serde::{Deserialize, Serialize};

use super::category::Category;

/// A displayable quote.
///
/// Value object with no identity and no persistence; constructed fresh per
/// fetch and immutable once returned. `text` is shown verbatim.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Quote text, possibly translated.
    pub text: String,

    /// Attributed author.
    pub author: String,

    /// Derived category (not authoritative).
    pub category: Category,
}

impl Quote {
    pub fn new(
        text: impl Into<String>,
        author: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
            category,
        }
    }
}

/// What a provider yields before translation and categorization.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProviderQuote {
    pub text: String,
    pub author: String,
}

/// Where a resolved quote came from.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum QuoteSource {
    /// A network provider succeeded; carries the provider id.
    Provider(&'static str),

    /// Every network path failed (or the deadline fired) and the static
    /// fallback list was used.
    Fallback,
}

impl QuoteSource {
    pub fn is_fallback(&self) -> bool {
        matches!(self, QuoteSource::Fallback)
    }
}
