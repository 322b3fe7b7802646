//! Response Composer
//!
//! Maps a review profile to one of eight fixed customer-facing paragraphs:
//! prefix, one space, category suffix, conclusion. Every suffix table has an
//! `other` entry, so composition is total.

use crate::classifier::{Category, ReviewProfile};
use crate::error::{NatlangError, Result};
use serde::{Deserialize, Serialize};

/// Fixed sentences for one sentiment
#[derive(Debug, Clone, Copy)]
pub struct SentimentTemplates {
    pub prefix: &'static str,
    pub conclusion: &'static str,
    pub food: &'static str,
    pub service: &'static str,
    pub atmosphere: &'static str,
    pub other: &'static str,
}

impl SentimentTemplates {
    pub fn suffix(&self, category: Category) -> &'static str {
        match category {
            Category::Food => self.food,
            Category::Service => self.service,
            Category::Atmosphere => self.atmosphere,
            Category::Other => self.other,
        }
    }

    fn render(&self, category: Category) -> String {
        format!("{} {}{}", self.prefix, self.suffix(category), self.conclusion)
    }
}

/// Positive and negative template tables
#[derive(Debug, Clone, Copy)]
pub struct ResponseTemplateSet {
    pub positive: SentimentTemplates,
    pub negative: SentimentTemplates,
}

impl ResponseTemplateSet {
    pub fn for_sentiment(&self, positive: bool) -> &SentimentTemplates {
        if positive {
            &self.positive
        } else {
            &self.negative
        }
    }
}

pub const RESPONSE_TEMPLATES: ResponseTemplateSet = ResponseTemplateSet {
    positive: SentimentTemplates {
        prefix: "We are thrilled that you enjoyed your visit to our Restaurant!",
        conclusion: "and we would love to see you again soon.",
        food: "Our chefs greatly appreciate your compliments, ",
        service: "Our staff is happy to have provided a pleasant dining experience, ",
        atmosphere: "Our management is delighted to know you've enjoyed our restaurant's setting, ",
        other: "On behalf of our whole staff it was a pleasure to host you, ",
    },
    negative: SentimentTemplates {
        prefix: "On behalf of the White Fox Lounge, we are so sorry to hear that your visit to our establishment.",
        conclusion: "and we would appreciate if you could take a moment to complete the following survey so we can understand how we could do better next time: https://not-a-real-survey.com/a3csa93b4 .",
        food: "Our kitchen staff apologizes for your unsatisfactory meal, ",
        service: "Our waitstaff apologizes for your unsatisfactory experience, ",
        atmosphere: "Our management apologizes for your dissatisfaction with our restaurant's atmosphere, ",
        other: "Our staff apologizes for your unsatisfactory dining experience, ",
    },
};

/// Compose the customer-facing response for a profile
pub fn compose(profile: &ReviewProfile) -> String {
    RESPONSE_TEMPLATES
        .for_sentiment(profile.positive)
        .render(profile.effective_category())
}

// ============================================================================
// Loosely-typed profiles
// ============================================================================

/// Profile as received from outside the crate (e.g. JSON). Both fields may
/// be missing and the category may be any string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawProfile {
    #[serde(default)]
    pub positive: Option<bool>,
    #[serde(default)]
    pub category: Option<String>,
}

impl TryFrom<RawProfile> for ReviewProfile {
    type Error = NatlangError;

    fn try_from(raw: RawProfile) -> Result<Self> {
        let positive = raw
            .positive
            .ok_or_else(|| NatlangError::InvalidProfile("missing 'positive' field".to_string()))?;

        // Unrecognized labels fall back to `other` at compose time
        let category = raw.category.as_deref().and_then(Category::from_label);

        Ok(ReviewProfile::new(positive, category))
    }
}

impl From<ReviewProfile> for RawProfile {
    fn from(profile: ReviewProfile) -> Self {
        Self {
            positive: Some(profile.positive),
            category: profile.category.map(|c| c.as_str().to_string()),
        }
    }
}

/// Compose from a loosely-typed profile. Fails only when `positive` is absent.
pub fn compose_raw(raw: &RawProfile) -> Result<String> {
    let profile = ReviewProfile::try_from(raw.clone())?;
    Ok(compose(&profile))
}
