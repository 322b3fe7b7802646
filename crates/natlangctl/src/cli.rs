//! CLI - Command-line argument parsing
//!
//! Keeps argument parsing separate from execution logic.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Natlang review responder
#[derive(Parser, Debug)]
#[command(name = "natlangctl")]
#[command(about = "Natlang - templated responses to customer reviews", long_about = None)]
#[command(version = env!("NATLANG_VERSION"))]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// Config file (overrides $NATLANG_CONFIG and ./natlang.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Prompt template file (overrides the config file)
    #[arg(long, global = true)]
    pub template: Option<PathBuf>,

    /// Log filter when RUST_LOG is unset (e.g. "debug", "natlang_common=trace")
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Subcommand (if not provided, starts an interactive session)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Interactive review session (default)
    Session,

    /// Print the model prompt for a review
    Prompt {
        /// Customer review text
        review: String,
    },

    /// Classify a model reply and print the customer response
    Respond {
        /// Reply text from the language model
        reply: String,

        /// Output the profile and response as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compose a response from a JSON profile, e.g. '{"positive":false,"category":"food"}'
    Compose {
        #[arg(long)]
        profile: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_session() {
        let cli = Cli::try_parse_from(["natlangctl"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_respond_with_json() {
        let cli =
            Cli::try_parse_from(["natlangctl", "respond", "Sentiment: Happy", "--json"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Respond {
                reply: "Sentiment: Happy".to_string(),
                json: true,
            })
        );
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "natlangctl",
            "prompt",
            "Great food",
            "--template",
            "/tmp/t.txt",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(cli.template, Some(PathBuf::from("/tmp/t.txt")));
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_compose_requires_profile() {
        assert!(Cli::try_parse_from(["natlangctl", "compose"]).is_err());
    }
}
