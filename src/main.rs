//! Wordle Game - CLI
//!
//! Terminal Wordle with TUI and plain CLI modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use wordle_game::{
    commands::run_simple,
    core::Board,
    interactive::{App, run_tui},
    wordlists::{WordLists, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle-game",
    about = "Guess the hidden five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seed for target-word selection (reproducible games)
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Path to a custom allowed-guesses file (one word per line)
    #[arg(long, global = true)]
    allowed: Option<String>,

    /// Path to a custom solutions file (one word per line)
    #[arg(long, global = true)]
    solutions: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Plain line-oriented CLI mode (no TUI)
    Simple,
}

/// Load word lists from the given files, falling back to the embedded lists
fn load_wordlists(allowed: Option<&str>, solutions: Option<&str>) -> Result<WordLists> {
    use wordle_game::wordlists::loader::words_from_slice;
    use wordle_game::wordlists::{ALLOWED, SOLUTIONS};

    let allowed_words = match allowed {
        Some(path) => {
            load_from_file(path).with_context(|| format!("reading allowed list {path}"))?
        }
        None => words_from_slice(ALLOWED),
    };
    let solution_words = match solutions {
        Some(path) => {
            load_from_file(path).with_context(|| format!("reading solutions list {path}"))?
        }
        None => words_from_slice(SOLUTIONS),
    };

    WordLists::new(allowed_words, solution_words).map_err(Into::into)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let lists = load_wordlists(cli.allowed.as_deref(), cli.solutions.as_deref())?;

    let board = match cli.seed {
        Some(seed) => Board::with_seed(&lists, seed),
        None => Board::new(&lists),
    };

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_tui(App::new(board)),
        Commands::Simple => {
            let mut board = board;
            run_simple(&mut board).map_err(|e| anyhow::anyhow!(e))
        }
    }
}
