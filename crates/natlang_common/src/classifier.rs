//! Response Classifier
//!
//! Extracts sentiment and category from the model's free-text reply with
//! plain substring matching against a fixed vocabulary. No LLM calls, no
//! scoring: the reply is expected to name a sentiment word and one of the
//! category keywords, and anything else falls back to defaults.
//!
//! Known limitation: only `"unhappy"` flips the sentiment. A reply that says
//! "Sad" without "unhappy" is classified as positive. The marker must stay in
//! lockstep with the wording the prompt template asks the model to use.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Substring that marks a reply as negative (matched case-insensitively)
pub const NEGATIVE_MARKER: &str = "unhappy";

/// Category keywords in scan order. When several appear in a reply the last
/// one in this list wins.
pub const CATEGORY_KEYWORDS: [Category; 3] =
    [Category::Food, Category::Service, Category::Atmosphere];

// ============================================================================
// Category
// ============================================================================

/// What part of the visit a review is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Service,
    Atmosphere,
    /// Fallback when the reply names no known category
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "food",
            Category::Service => "service",
            Category::Atmosphere => "atmosphere",
            Category::Other => "other",
        }
    }

    /// Parse a category label. Unknown labels yield `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "food" => Some(Category::Food),
            "service" => Some(Category::Service),
            "atmosphere" => Some(Category::Atmosphere),
            "other" => Some(Category::Other),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Review Profile
// ============================================================================

/// Sentiment and category extracted from one reply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewProfile {
    pub positive: bool,
    pub category: Option<Category>,
}

impl Default for ReviewProfile {
    fn default() -> Self {
        Self {
            positive: true,
            category: None,
        }
    }
}

impl ReviewProfile {
    pub fn new(positive: bool, category: Option<Category>) -> Self {
        Self { positive, category }
    }

    /// Category used for response selection (`Other` when none matched)
    pub fn effective_category(&self) -> Category {
        self.category.unwrap_or(Category::Other)
    }
}

// ============================================================================
// Classification
// ============================================================================

/// Classify a model reply. Never fails: empty or malformed replies produce
/// the default profile (positive, no category).
pub fn classify(reply: &str) -> ReviewProfile {
    let reply = reply.to_lowercase();
    let mut profile = ReviewProfile::default();

    if reply.contains(NEGATIVE_MARKER) {
        profile.positive = false;
    }

    // Overwrite on every hit: last keyword in scan order wins
    for keyword in CATEGORY_KEYWORDS {
        if reply.contains(keyword.as_str()) {
            profile.category = Some(keyword);
        }
    }

    profile
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_reply_defaults() {
        assert_eq!(classify(""), ReviewProfile::new(true, None));
    }

    #[test]
    fn test_unhappy_any_case_is_negative() {
        assert!(!classify("Sentiment: UNHAPPY").positive);
        assert!(!classify("the guest seems Unhappy overall").positive);
        assert!(!classify("unhappy").positive);
    }

    #[test]
    fn test_happy_is_positive() {
        assert!(classify("Sentiment: Happy").positive);
    }

    #[test]
    fn test_sad_without_marker_stays_positive() {
        let profile = classify("Sentiment: Sad. Category: service.");
        assert!(profile.positive);
        assert_eq!(profile.category, Some(Category::Service));
    }

    #[test]
    fn test_single_category() {
        assert_eq!(classify("Category: Atmosphere").category, Some(Category::Atmosphere));
        assert_eq!(classify("it's about the FOOD").category, Some(Category::Food));
    }

    #[test]
    fn test_last_keyword_in_scan_order_wins() {
        // Text order does not matter, only keyword order
        assert_eq!(classify("food and service").category, Some(Category::Service));
        assert_eq!(classify("service and food").category, Some(Category::Service));
        assert_eq!(
            classify("atmosphere, food, service").category,
            Some(Category::Atmosphere)
        );
    }

    #[test]
    fn test_keyword_matches_inside_words() {
        // Substring matching: "seafood" contains "food"
        assert_eq!(classify("the seafood").category, Some(Category::Food));
    }

    #[test]
    fn test_unknown_vocabulary() {
        let profile = classify("Sentiment: Neutral. Category: parking.");
        assert_eq!(profile, ReviewProfile::default());
    }

    #[test]
    fn test_other_never_produced() {
        assert_eq!(classify("Category: other").category, None);
    }

    #[test]
    fn test_classify_is_deterministic() {
        let reply = "Sentiment: Unhappy. Category: service.";
        assert_eq!(classify(reply), classify(reply));
    }

    #[test]
    fn test_category_from_label() {
        assert_eq!(Category::from_label("Food"), Some(Category::Food));
        assert_eq!(Category::from_label(" other "), Some(Category::Other));
        assert_eq!(Category::from_label("unknown-value"), None);
    }

    #[test]
    fn test_effective_category() {
        assert_eq!(ReviewProfile::new(true, None).effective_category(), Category::Other);
        assert_eq!(
            ReviewProfile::new(false, Some(Category::Food)).effective_category(),
            Category::Food
        );
    }

    #[test]
    fn test_profile_serializes_lowercase() {
        let json = serde_json::to_string(&ReviewProfile::new(false, Some(Category::Food))).unwrap();
        assert_eq!(json, r#"{"positive":false,"category":"food"}"#);
    }
}
