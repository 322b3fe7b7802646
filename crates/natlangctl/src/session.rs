//! Session - interactive review loop
//!
//! Reads a customer review, shows the prompt to paste into the language
//! model, reads the model's reply back, and prints the composed response.
//! There is no live model call: the operator relays prompt and reply by hand.
//!
//! Generic over the input and output streams so the loop can run against
//! in-memory buffers in tests.

use anyhow::{Context, Result};
use natlang_common::{Responder, Review};
use std::io::{BufRead, Write};
use tracing::{debug, info};

pub const BANNER: &str =
    "-- Enter customer reviews which need response, or enter a blank line to escape. --";
pub const REVIEW_PROMPT: &str = "Customer Review: ";
pub const REPLY_PROMPT: &str = "LLM Response: ";
pub const BEGIN_PLACEHOLDER: &str = "<Begin placeholder for LLM API Call>";
pub const PASTE_INSTRUCTION: &str = "#SYSTEM#: Enter the following prompt into Chat GPT:";
pub const END_PLACEHOLDER: &str = "<End placeholder for LLM API Call>";
pub const RESPONSE_LABEL: &str = "Natlang: ";

/// Outcome of a finished session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Reviews that received a composed response
    pub answered: usize,
}

pub struct Session<'a, R, W> {
    responder: &'a Responder,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(responder: &'a Responder, input: R, output: W) -> Self {
        Self {
            responder,
            input,
            output,
        }
    }

    /// Run until a blank review line or end of input
    pub fn run(&mut self) -> Result<SessionSummary> {
        let mut summary = SessionSummary::default();
        info!("Session started");

        writeln!(self.output, "{}", BANNER)?;
        loop {
            let review = match self.ask(REVIEW_PROMPT)? {
                Some(line) if !line.is_empty() => Review::new(line)?,
                _ => break,
            };

            let prompt = self.responder.prompt(&review);
            writeln!(self.output)?;
            writeln!(self.output, "{}", BEGIN_PLACEHOLDER)?;
            writeln!(self.output, "{}", PASTE_INSTRUCTION)?;
            writeln!(self.output, "{}", prompt)?;
            writeln!(self.output)?;

            let reply = match self.ask(REPLY_PROMPT)? {
                Some(line) => line,
                None => {
                    debug!("Input closed while waiting for model reply");
                    break;
                }
            };
            writeln!(self.output, "{}", END_PLACEHOLDER)?;
            writeln!(self.output)?;

            let response = self.responder.respond(&reply);
            writeln!(self.output, "{}{}", RESPONSE_LABEL, response.text)?;
            writeln!(self.output)?;
            summary.answered += 1;
        }

        self.output.flush()?;
        info!(answered = summary.answered, "Session ended");
        Ok(summary)
    }

    /// Print a prompt and read one line without its line ending.
    /// Returns `None` at end of input.
    fn ask(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read from input")?;
        if read == 0 {
            return Ok(None);
        }

        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}
