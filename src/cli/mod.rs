//! CLI module for tnav.

pub mod commands;
mod output;

pub use output::Output;

use crate::method::Method;
use clap::{Parser, Subcommand};

/// tnav - Transcript Navigator
///
/// Load a transcript, ask a question, and get back the single most relevant
/// excerpt with its timestamp from an answering service.
#[derive(Parser, Debug)]
#[command(name = "tnav")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Base URL of the answering service (overrides the config file)
    #[arg(long, global = true, env = "TNAV_SERVICE_URL")]
    pub service_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Ask one question about a transcript file
    Ask {
        /// The question to ask
        question: String,

        /// Transcript file (.txt or .srt)
        #[arg(short, long)]
        file: String,

        /// Answering method (llm2, tfidf)
        #[arg(short, long)]
        method: Option<Method>,
    },

    /// Start an interactive session
    Session {
        /// Transcript file to load at start
        #[arg(short, long)]
        file: Option<String>,

        /// Answering method (llm2, tfidf)
        #[arg(short, long)]
        method: Option<Method>,
    },

    /// Check configuration and answering service connectivity
    Doctor,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Open configuration file in editor
    Edit,

    /// Show configuration file path
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ask() {
        let cli = Cli::try_parse_from([
            "tnav", "ask", "What was decided?", "--file", "meeting.srt", "-m", "TFIDF",
        ])
        .unwrap();

        match cli.command {
            Commands::Ask {
                question,
                file,
                method,
            } => {
                assert_eq!(question, "What was decided?");
                assert_eq!(file, "meeting.srt");
                assert_eq!(method, Some(Method::Tfidf));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_rejects_unknown_method() {
        let result = Cli::try_parse_from(["tnav", "ask", "q", "-f", "a.txt", "-m", "bm25"]);
        assert!(result.is_err());
    }
}
