//! REPL - interactive conversation with TunisBot

use anyhow::Result;
use owo_colors::OwoColorize;
use std::io::{self, BufRead, Write};
use tunisbot_shared::TunisBot;

const SEPARATOR: &str = "============================================================";
const THIN_SEPARATOR: &str = "------------------------------------------------------------";

/// Words that end the session (case-insensitive)
const QUIT_WORDS: &[&str] = &["quit", "exit", "quitter", "bye"];

fn is_quit(input: &str) -> bool {
    let lowered = input.to_lowercase();
    QUIT_WORDS.contains(&lowered.as_str())
}

fn print_banner(out: &mut impl Write, semantic: bool) -> io::Result<()> {
    writeln!(out, "{}", SEPARATOR)?;
    writeln!(out, "{}", "CHATBOT TOURISTIQUE - TUNIS".bold())?;
    writeln!(out, "{}", SEPARATOR)?;
    writeln!(out)?;
    writeln!(out, "Techniques utilisées:")?;
    writeln!(out, "  {} Règles (pattern matching)", "✓".green())?;
    writeln!(out, "  {} TF-IDF (similarité vectorielle)", "✓".green())?;
    if semantic {
        writeln!(out, "  {} Embeddings (similarité sémantique)", "✓".green())?;
    }
    writeln!(out, "  {} Approche hybride", "✓".green())?;
    writeln!(out)?;
    writeln!(out, "Tapez 'quit' ou 'exit' pour quitter")?;
    writeln!(out)?;
    writeln!(out, "{}", THIN_SEPARATOR)
}

fn print_reply(out: &mut impl Write, answer: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{} {}", "Bot:".cyan().bold(), answer)
}

/// Read utterances until a quit word or EOF
pub fn run_loop(bot: &TunisBot, input: impl BufRead, out: &mut impl Write) -> io::Result<()> {
    print_banner(out, bot.semantic_available())?;

    let welcome = bot.chat("bonjour");
    print_reply(out, &welcome.answer)?;
    writeln!(out)?;

    let mut lines = input.lines();
    loop {
        write!(out, "{} ", "Vous:".bold())?;
        out.flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break, // EOF
        };
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        if is_quit(input) {
            let farewell = bot.chat("au revoir");
            print_reply(out, &farewell.answer)?;
            writeln!(out)?;
            break;
        }

        let resolution = bot.chat(input);
        print_reply(out, &resolution.answer)?;
        writeln!(out, "   {}", format!("[Méthode: {}]", resolution.label()).dimmed())?;
        writeln!(out)?;
    }
    Ok(())
}

/// Start the conversational REPL on the terminal
pub fn start_repl(bot: &TunisBot) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_loop(bot, stdin.lock(), &mut stdout)?;
    Ok(())
}
