//! Simple interactive CLI mode
//!
//! Line-based game without TUI

use crate::core::normalize;
use crate::dictionary::SpellChecker;
use crate::game::{RoundEngine, Verdict};
use crate::output::formatters::length_badge;
use crate::wordlists::WordListSource;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// A line of player input, parsed
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Quit,
    Restart,
    Words,
    Help,
    Submit(String),
}

impl Command {
    fn parse(line: &str) -> Self {
        match line.trim() {
            "/quit" | "/q" | "/exit" => Self::Quit,
            "/new" | "/n" | "/restart" => Self::Restart,
            "/words" | "/w" => Self::Words,
            "/help" | "/h" | "/?" => Self::Help,
            _ => Self::Submit(line.to_string()),
        }
    }
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if a round
/// cannot be started.
pub fn run_simple<W: WordListSource, S: SpellChecker>(engine: &mut RoundEngine<W, S>) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    play(engine, stdin.lock(), stdout.lock())
}

/// Play rounds reading commands from `input` until `/quit` or end of input
///
/// # Errors
///
/// Returns an error on I/O failure or if a round cannot be started.
pub fn play<W, S, R, O>(engine: &mut RoundEngine<W, S>, input: R, mut out: O) -> Result<()>
where
    W: WordListSource,
    S: SpellChecker,
    R: BufRead,
    O: Write,
{
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                Word Scramble - Simple Mode                   ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    print_help(&mut out)?;

    let root = engine.start_round()?.root_word().to_uppercase();
    print_root(&mut out, &root)?;
    prompt(&mut out)?;

    for line in input.lines() {
        match Command::parse(&line?) {
            Command::Quit => break,
            Command::Restart => {
                let root = engine.start_round()?.root_word().to_uppercase();
                writeln!(out, "\n🔄 New round started!")?;
                print_root(&mut out, &root)?;
            }
            Command::Words => print_words(&mut out, engine)?,
            Command::Help => print_help(&mut out)?,
            Command::Submit(word) => {
                let verdict = engine.submit(&word)?;
                print_verdict(&mut out, engine, &word, verdict)?;
            }
        }
        prompt(&mut out)?;
    }

    writeln!(out, "\n👋 Final score: {}. Thanks for playing!\n", engine.score())?;
    Ok(())
}

fn print_help(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Make words from the letters of the root word.")?;
    writeln!(
        out,
        "Words need at least 3 letters and can't be the root word itself.\n"
    )?;
    writeln!(
        out,
        "Commands: '/new' for a new word, '/words' to list your words, '/quit' to exit\n"
    )
}

fn print_root(out: &mut impl Write, root: &str) -> io::Result<()> {
    writeln!(out, "────────────────────────────────────────────────────────────")?;
    writeln!(out, "Root word: {}", root.bright_yellow().bold())?;
    writeln!(out, "────────────────────────────────────────────────────────────")
}

fn prompt(out: &mut impl Write) -> io::Result<()> {
    write!(out, "Your word: ")?;
    out.flush()
}

fn print_words<W, S>(out: &mut impl Write, engine: &RoundEngine<W, S>) -> io::Result<()> {
    let words = engine.session().map(|s| s.accepted_words()).unwrap_or_default();
    if words.is_empty() {
        return writeln!(out, "No words yet!\n");
    }
    for word in words {
        writeln!(out, "  {} {word}", length_badge(word.chars().count()))?;
    }
    writeln!(out)
}

fn print_verdict<W, S>(
    out: &mut impl Write,
    engine: &RoundEngine<W, S>,
    word: &str,
    verdict: Verdict,
) -> io::Result<()> {
    match verdict {
        Verdict::Accepted => writeln!(
            out,
            "{} {}  (score: {})\n",
            "✓".green().bold(),
            normalize(word).unwrap_or_default().bright_white().bold(),
            engine.score()
        ),
        Verdict::Rejected(reason) => {
            let root = engine.session().map_or("", |s| s.root_word());
            writeln!(
                out,
                "{} {}: {}\n",
                "✗".red().bold(),
                reason.title().red().bold(),
                reason.message(root)
            )
        }
        Verdict::Ignored => Ok(()),
    }
}
