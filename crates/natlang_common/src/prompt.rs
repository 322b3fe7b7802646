//! Prompt construction for the external model

use crate::error::{NatlangError, Result};
use std::fmt;

/// Separator between the template and the review text
pub const PROMPT_SEPARATOR: &str = "\n\n";

/// A customer review, guaranteed non-empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review(String);

impl Review {
    pub fn new(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        if text.is_empty() {
            return Err(NatlangError::EmptyReview);
        }
        Ok(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Review {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Compose the template and a review into one prompt.
///
/// Pure concatenation: no trimming or validation happens here.
pub fn build_prompt(template: &str, review: &str) -> String {
    let mut prompt = String::with_capacity(template.len() + PROMPT_SEPARATOR.len() + review.len());
    prompt.push_str(template);
    prompt.push_str(PROMPT_SEPARATOR);
    prompt.push_str(review);
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_prompt_layout() {
        assert_eq!(
            build_prompt("Template text.", "The soup was cold"),
            "Template text.\n\nThe soup was cold"
        );
    }

    #[test]
    fn test_build_prompt_ends_with_review() {
        let reviews = ["x", "Loved it!", "multi\nline review", "  padded  "];
        for review in reviews {
            let prompt = build_prompt("Classify:", review);
            assert!(prompt.ends_with(review), "prompt should end with {:?}", review);
            assert!(!prompt.is_empty());
        }
    }

    #[test]
    fn test_build_prompt_empty_template() {
        assert_eq!(build_prompt("", "ok"), "\n\nok");
    }

    #[test]
    fn test_review_rejects_empty() {
        assert!(matches!(Review::new(""), Err(NatlangError::EmptyReview)));
    }

    #[test]
    fn test_review_keeps_whitespace() {
        let review = Review::new(" ").unwrap();
        assert_eq!(review.as_str(), " ");
    }
}
