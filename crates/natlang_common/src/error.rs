//! Error types for Natlang.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NatlangError {
    #[error("Review text is empty")]
    EmptyReview,

    #[error("Invalid review profile: {0}")]
    InvalidProfile(String),

    #[error("Prompt template not found: {}", path.display())]
    TemplateNotFound { path: PathBuf },

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, NatlangError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_from_toml() {
        let err: NatlangError = toml::from_str::<toml::Value>("[broken").unwrap_err().into();
        assert!(err.to_string().starts_with("Config error: "));
    }

    #[test]
    fn test_invalid_profile_display() {
        let err = NatlangError::InvalidProfile("missing 'positive' field".into());
        assert_eq!(err.to_string(), "Invalid review profile: missing 'positive' field");
    }

    #[test]
    fn test_template_not_found_display() {
        let err = NatlangError::TemplateNotFound {
            path: PathBuf::from("/tmp/missing.txt"),
        };
        assert_eq!(err.to_string(), "Prompt template not found: /tmp/missing.txt");
    }
}
