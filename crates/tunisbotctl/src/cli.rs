//! CLI - Command-line argument parsing
//!
//! Keeps argument parsing separate from execution logic.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// TunisBot command-line client
#[derive(Parser, Debug)]
#[command(name = "tunisbotctl")]
#[command(about = "TunisBot - virtual tourist guide for Tunis", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (overrides $TUNISBOT_CONFIG and the default search paths)
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand (if not provided, starts the interactive chat)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactive conversation
    Chat,

    /// Ask a single question and exit
    Ask {
        /// Question text
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,

        /// Output JSON only
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_chat() {
        let cli = Cli::try_parse_from(["tunisbotctl"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_ask_joins_words() {
        let cli =
            Cli::try_parse_from(["tunisbotctl", "ask", "Où", "manger", "--json"]).unwrap();
        match cli.command {
            Some(Commands::Ask { question, json }) => {
                assert_eq!(question.join(" "), "Où manger");
                assert!(json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_config_after_subcommand() {
        let cli = Cli::try_parse_from(["tunisbotctl", "chat", "--config", "/tmp/t.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/t.toml")));
    }
}
