//! Static fallback quotes.
//!
//! Used when every network path fails or the outer deadline fires first.
//! Performs no I/O and cannot fail; the result is indistinguishable from a
//! network-sourced quote to the caller.

use rand::Rng;

use crate::models::{Category, Quote};

/// The fixed fallback list.
const FALLBACK_QUOTES: &[(&str, &str, Category)] = &[
    (
        "La forma de empezar es dejar de hablar y comenzar a hacer.",
        "Walt Disney",
        Category::Motivation,
    ),
    (
        "No tengas miedo de renunciar a lo bueno para ir por lo grandioso.",
        "John D. Rockefeller",
        Category::Success,
    ),
    (
        "La innovación distingue entre un líder y un seguidor.",
        "Steve Jobs",
        Category::Motivation,
    ),
    (
        "El futuro pertenece a quienes creen en la belleza de sus sueños.",
        "Eleanor Roosevelt",
        Category::Dreams,
    ),
    (
        "El éxito no es definitivo, el fracaso no es fatal: es el coraje para continuar lo que cuenta.",
        "Winston Churchill",
        Category::Perseverance,
    ),
];

/// Pick one fallback quote uniformly at random.
pub fn fallback_quote() -> Quote {
    let idx = rand::thread_rng().gen_range(0..FALLBACK_QUOTES.len());
    let (text, author, category) = FALLBACK_QUOTES[idx];
    Quote::new(text, author, category)
}

/// True if `quote` is a member of the fallback list.
pub fn is_fallback(quote: &Quote) -> bool {
    FALLBACK_QUOTES
        .iter()
        .any(|(text, author, _)| quote.text == *text && quote.author == *author)
}
