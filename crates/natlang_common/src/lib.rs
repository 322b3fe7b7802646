//! Natlang Common - review response pipeline
//!
//! Builds the prompt sent to an external language model for a customer
//! review, then turns the model's free-text reply into a templated
//! customer-facing response. Everything here is synchronous and pure except
//! loading the template and config files.

pub mod classifier;
pub mod composer;
pub mod config;
pub mod error;
pub mod prompt;
pub mod responder;
pub mod template;

pub use classifier::{classify, Category, ReviewProfile, CATEGORY_KEYWORDS, NEGATIVE_MARKER};
pub use composer::{
    compose, compose_raw, RawProfile, ResponseTemplateSet, SentimentTemplates, RESPONSE_TEMPLATES,
};
pub use config::NatlangConfig;
pub use error::{NatlangError, Result};
pub use prompt::{build_prompt, Review};
pub use responder::{Responder, Response};
pub use template::PromptTemplate;
