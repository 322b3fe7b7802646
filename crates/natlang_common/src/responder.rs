//! Responder - the review/response pipeline in one place
//!
//! review -> prompt -> (external model) -> reply -> profile -> response text.
//! The model call happens outside this crate; the responder only needs the
//! reply string back.

use crate::classifier::{classify, ReviewProfile};
use crate::composer::compose;
use crate::config::NatlangConfig;
use crate::error::Result;
use crate::prompt::Review;
use crate::template::PromptTemplate;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Classified profile plus the composed customer-facing text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub profile: ReviewProfile,
    pub text: String,
}

impl Response {
    /// Classify a reply and compose the response. Needs no template.
    pub fn from_reply(reply: &str) -> Self {
        let profile = classify(reply);
        debug!(
            positive = profile.positive,
            category = profile.category.map(|c| c.as_str()).unwrap_or("none"),
            "Classified model reply"
        );
        let text = compose(&profile);
        Self { profile, text }
    }
}

#[derive(Debug, Clone)]
pub struct Responder {
    template: PromptTemplate,
}

impl Responder {
    pub fn new(template: PromptTemplate) -> Self {
        Self { template }
    }

    /// Load the template named by the configuration
    pub fn from_config(config: &NatlangConfig) -> Result<Self> {
        Ok(Self::new(PromptTemplate::load(&config.template.path)?))
    }

    /// Prompt to hand to the external model
    pub fn prompt(&self, review: &Review) -> String {
        self.template.prompt_for(review)
    }

    /// Turn the model's reply into the final response
    pub fn respond(&self, reply: &str) -> Response {
        Response::from_reply(reply)
    }
}
