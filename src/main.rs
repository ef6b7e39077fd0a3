//! Word Scramble - CLI
//!
//! Word game with TUI and CLI modes: spell words from a random root word.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use word_scramble::{
    commands::{analyze_root, check_words, run_simple},
    config::{GameConfig, ListSource},
    logging::{self, LogTarget},
    output::{print_analysis_result, print_check_result},
};

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Make as many words as you can from the letters of a random root word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Root word list: 'embedded' (default) or path to a newline-delimited file
    #[arg(
        short = 'w',
        long,
        global = true,
        default_value = "embedded",
        env = "WORD_SCRAMBLE_WORDLIST"
    )]
    wordlist: ListSource,

    /// Dictionary: 'embedded' (default, English) or path to a newline-delimited file
    #[arg(
        short = 'd',
        long,
        global = true,
        default_value = "embedded",
        env = "WORD_SCRAMBLE_DICTIONARY"
    )]
    dictionary: ListSource,

    /// Seed for root word selection (reproducible rounds)
    #[arg(long, global = true, env = "WORD_SCRAMBLE_SEED")]
    seed: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Check candidate words against a given root word
    Check {
        /// The root word to spell from
        root: String,

        /// Candidate words, submitted in order
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// List every word that can be made from a root word
    Analyze {
        /// The root word to analyze
        root: String,
    },
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        GameConfig {
            wordlist: self.wordlist.clone(),
            dictionary: self.dictionary.clone(),
            seed: self.seed,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.game_config();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    let tui = matches!(command, Commands::Play);
    logging::init(cli.verbose, &LogTarget::for_mode(tui));

    match command {
        Commands::Play => run_play_command(&config),
        Commands::Simple => run_simple_command(&config),
        Commands::Check { root, words } => run_check_command(&config, &root, &words),
        Commands::Analyze { root } => run_analyze_command(&config, &root),
    }
}

fn run_play_command(config: &GameConfig) -> Result<()> {
    use word_scramble::interactive::{App, run_tui};

    let engine = config.build_engine()?;
    let app = App::new(engine).context("could not start a round")?;
    run_tui(app)
}

fn run_simple_command(config: &GameConfig) -> Result<()> {
    let mut engine = config.build_engine()?;
    run_simple(&mut engine)
}

fn run_check_command(config: &GameConfig, root: &str, words: &[String]) -> Result<()> {
    let dictionary = config.spell_checker()?;
    let result = check_words(root, words, &dictionary)?;
    print_check_result(&result);
    Ok(())
}

fn run_analyze_command(config: &GameConfig, root: &str) -> Result<()> {
    let dictionary = config.spell_checker()?;
    let result = analyze_root(root, &dictionary)?;
    print_analysis_result(&result);
    Ok(())
}
