//! Command handlers

use crate::cli::Commands;
use crate::session::Session;
use anyhow::{Context, Result};
use natlang_common::{compose_raw, NatlangConfig, RawProfile, Responder, Response, Review};
use std::io::{self, Write};
use std::path::PathBuf;

/// Settings resolved from config file and global flags
#[derive(Debug, Clone)]
pub struct Settings {
    pub config: NatlangConfig,
}

impl Settings {
    pub fn new(mut config: NatlangConfig, template_override: Option<PathBuf>) -> Self {
        if let Some(path) = template_override {
            config.template.path = path;
        }
        Self { config }
    }

    fn responder(&self) -> Result<Responder> {
        Responder::from_config(&self.config).with_context(|| {
            format!(
                "Cannot load prompt template from {}",
                self.config.template.path.display()
            )
        })
    }
}

/// Dispatch a command, writing user-facing output to `out`
pub fn execute(command: Option<Commands>, settings: &Settings, out: &mut impl Write) -> Result<()> {
    match command.unwrap_or(Commands::Session) {
        Commands::Session => session(settings, out),
        Commands::Prompt { review } => prompt(settings, &review, out),
        Commands::Respond { reply, json } => respond(&reply, json, out),
        Commands::Compose { profile } => compose(&profile, out),
    }
}

fn session(settings: &Settings, out: &mut impl Write) -> Result<()> {
    let responder = settings.responder()?;
    let stdin = io::stdin();
    Session::new(&responder, stdin.lock(), out).run()?;
    Ok(())
}

fn prompt(settings: &Settings, review: &str, out: &mut impl Write) -> Result<()> {
    let review = Review::new(review)?;
    let responder = settings.responder()?;
    writeln!(out, "{}", responder.prompt(&review))?;
    Ok(())
}

fn respond(reply: &str, json: bool, out: &mut impl Write) -> Result<()> {
    let response = Response::from_reply(reply);
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&response)?)?;
    } else {
        writeln!(out, "{}", response.text)?;
    }
    Ok(())
}

fn compose(profile_json: &str, out: &mut impl Write) -> Result<()> {
    let raw: RawProfile = serde_json::from_str(profile_json)
        .map_err(natlang_common::NatlangError::from)
        .context("Profile is not valid JSON")?;
    writeln!(out, "{}", compose_raw(&raw)?)?;
    Ok(())
}
