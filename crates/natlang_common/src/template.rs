//! Prompt template store
//!
//! Holds the single prompt template used for every review. The template is
//! read once at startup and never changes afterwards, so a loaded
//! `PromptTemplate` can be shared freely between threads.

use crate::error::{NatlangError, Result};
use crate::prompt::{build_prompt, Review};
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::info;

/// Default template file, resolved relative to the working directory
pub const DEFAULT_TEMPLATE_FILE: &str = "prompt_template.txt";

/// Whitespace-normalized prompt template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    text: String,
}

impl PromptTemplate {
    /// Normalize raw template text: every line is trimmed and the lines are
    /// joined with a single space. Blank lines keep their (empty) slot.
    ///
    /// `\n`, `\r\n` and a lone `\r` all end a line; a final line ending does
    /// not open another line.
    pub fn from_text(raw: &str) -> Self {
        let unified = raw.replace("\r\n", "\n").replace('\r', "\n");
        let text = unified
            .split_terminator('\n')
            .map(str::trim)
            .collect::<Vec<_>>()
            .join(" ");
        Self { text }
    }

    /// Read and normalize a template file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => NatlangError::TemplateNotFound {
                path: path.to_path_buf(),
            },
            _ => NatlangError::Io(e),
        })?;

        let template = Self::from_text(&raw);
        info!(
            path = %path.display(),
            chars = template.text.len(),
            "Loaded prompt template"
        );
        Ok(template)
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Build the model prompt for one review
    pub fn prompt_for(&self, review: &Review) -> String {
        build_prompt(&self.text, review.as_str())
    }
}

impl fmt::Display for PromptTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
