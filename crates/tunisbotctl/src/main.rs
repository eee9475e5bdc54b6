//! TunisBot Control - command-line client
//!
//! Runs the resolution pipeline in-process: interactive chat or one-shot questions.

mod cli;
mod repl;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use tunisbot_shared::{Config, TunisBot};

fn main() -> Result<()> {
    // stderr at warn unless RUST_LOG says otherwise
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    let bot = TunisBot::from_config(&config).context("Failed to initialize TunisBot")?;

    match cli.command.unwrap_or(Commands::Chat) {
        Commands::Chat => repl::start_repl(&bot),
        Commands::Ask { question, json } => ask(&bot, &question.join(" "), json),
    }
}

fn ask(bot: &TunisBot, question: &str, json: bool) -> Result<()> {
    let question = question.trim();
    if question.is_empty() {
        anyhow::bail!(tunisbot_shared::BotError::EmptyInput);
    }

    let resolution = bot.resolve(question);
    if json {
        let value = serde_json::json!({
            "response": resolution.answer,
            "method": resolution.label(),
            "score": resolution.score,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("{}", resolution.answer);
        println!("[Méthode: {}]", resolution.label());
    }
    Ok(())
}
