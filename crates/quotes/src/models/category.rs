//! Category derivation from quote text.
//!
//! Categories are derived, not authoritative: a quote carries whatever
//! category its final (possibly translated) text maps to at fetch time.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Keyword groups, checked in priority order. First group with a hit wins.
const SUCCESS_KEYWORDS: &[&str] = &["success", "achieve", "win"];
const MOTIVATION_KEYWORDS: &[&str] = &["motivation", "inspire", "motivate"];
const PERSEVERANCE_KEYWORDS: &[&str] = &["perseverance", "persist", "continue"];
const DREAMS_KEYWORDS: &[&str] = &["dream", "goal", "future"];
const WISDOM_KEYWORDS: &[&str] = &["wisdom", "knowledge", "learn"];

/// Quote category.
///
/// Serialized as its plain string form (e.g. `"Success"`).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Category {
    Success,
    Motivation,
    Perseverance,
    Dreams,
    Wisdom,
}

impl Category {
    /// Derive a category from quote text.
    ///
    /// Membership tests run in a fixed priority order (success, motivation,
    /// perseverance, dreams, wisdom); the first group containing a keyword of
    /// the lowercased text wins. No scoring. `Motivation` is the default when
    /// nothing matches.
    ///
    /// This is a pure function: the same text always derives the same
    /// category.
    pub fn derive(text: &str) -> Self {
        let lower = text.to_lowercase();
        let hit = |keywords: &[&str]| keywords.iter().any(|k| lower.contains(k));

        if hit(SUCCESS_KEYWORDS) {
            Category::Success
        } else if hit(MOTIVATION_KEYWORDS) {
            Category::Motivation
        } else if hit(PERSEVERANCE_KEYWORDS) {
            Category::Perseverance
        } else if hit(DREAMS_KEYWORDS) {
            Category::Dreams
        } else if hit(WISDOM_KEYWORDS) {
            Category::Wisdom
        } else {
            Category::Motivation
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Success => "Success",
            Category::Motivation => "Motivation",
            Category::Perseverance => "Perseverance",
            Category::Dreams => "Dreams",
            Category::Wisdom => "Wisdom",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_keywords() {
        assert_eq!(Category::derive("Success is not final"), Category::Success);
        assert_eq!(
            Category::derive("You can achieve anything"),
            Category::Success
        );
        assert_eq!(Category::derive("Play to WIN"), Category::Success);
    }

    #[test]
    fn test_priority_order_first_match_wins() {
        // Contains both "success" and "dream"; success group is checked first.
        assert_eq!(
            Category::derive("Success starts with a dream"),
            Category::Success
        );
        // Contains both "dream" and "learn"; dreams group is checked first.
        assert_eq!(
            Category::derive("Dream big and learn fast"),
            Category::Dreams
        );
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(Category::derive("WISDOM of the ages"), Category::Wisdom);
    }

    #[test]
    fn test_default_is_motivation() {
        assert_eq!(Category::derive("An unrelated sentence"), Category::Motivation);
        assert_eq!(Category::derive(""), Category::Motivation);
    }

    #[test]
    fn test_deterministic() {
        let text = "Persistence is the road";
        let first = Category::derive(text);
        for _ in 0..10 {
            assert_eq!(Category::derive(text), first);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Category::Perseverance.to_string(), "Perseverance");
        assert_eq!(Category::Dreams.as_str(), "Dreams");
    }
}
