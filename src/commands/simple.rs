//! Simple interactive CLI mode
//!
//! Line-oriented play without the TUI: type a whole guess, press enter, and
//! the grid is reprinted with colored feedback.

use crate::core::{Board, GameStatus, MAX_ATTEMPTS, TileState, WORD_LENGTH};
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(board: &mut Board) -> Result<(), String> {
    println!("\n╔═══════════════════════════════════════════╗");
    println!("║                  WORDLE                   ║");
    println!("╚═══════════════════════════════════════════╝\n");

    println!("Guess the hidden {WORD_LENGTH}-letter word in {MAX_ATTEMPTS} tries.");
    println!("Feedback after each guess:\n");
    println!("  {} letter in the correct spot", " G ".black().on_green());
    println!("  {} letter in the word, wrong spot", " Y ".black().on_yellow());
    println!("  {} letter not in the word\n", " - ".white().on_bright_black());
    println!("Commands: 'quit' to exit, 'new' for a new word, 'retry' to replay the same word\n");

    loop {
        print_grid(board);

        match board.status() {
            GameStatus::Won => {
                let attempts = board.row_index() + 1;
                println!("\n{}", format!("You got it in {attempts}/{MAX_ATTEMPTS}!").green().bold());
            }
            GameStatus::Lost => {
                println!(
                    "\n{}",
                    format!("Out of guesses! The word was {}", board.target().text().to_uppercase())
                        .red()
                        .bold()
                );
            }
            GameStatus::InProgress => {}
        }

        let prompt = if board.is_over() {
            "new / retry / quit".to_string()
        } else {
            format!("Guess {}/{MAX_ATTEMPTS}", board.row_index() + 1)
        };

        let input = get_user_input(&prompt)?;

        match input.as_str() {
            "quit" | "exit" | "q" => break,
            "new" => {
                board.new_game();
                println!("\n{}", "New word picked - good luck!".cyan());
                continue;
            }
            "retry" => {
                board.retry();
                println!("\n{}", "Same word, fresh grid.".cyan());
                continue;
            }
            _ => {}
        }

        if board.is_over() {
            // Grid input is disabled; only the commands above apply
            continue;
        }

        if input.len() != WORD_LENGTH || !input.chars().all(|c| c.is_ascii_alphabetic()) {
            println!("\n{}", format!("Please enter a {WORD_LENGTH}-letter word.").red());
            continue;
        }

        for ch in input.chars() {
            board.input_letter(ch);
        }

        if board.submit_row().is_err() {
            println!("\n{}", "Not in word list!".red().bold());
            // Line-oriented mode: wipe the rejected row for the next guess
            for _ in 0..WORD_LENGTH {
                board.input_backspace();
            }
        }
    }

    Ok(())
}

fn print_grid(board: &Board) {
    println!();
    for row in board.rows() {
        print!("   ");
        for tile in row.tiles() {
            let letter = tile.letter().map_or(' ', |c| c.to_ascii_uppercase());
            let cell = format!(" {letter} ");

            let painted = match tile.state() {
                TileState::Correct => cell.black().on_green(),
                TileState::WrongSpot => cell.black().on_yellow(),
                TileState::Incorrect => cell.white().on_bright_black(),
                TileState::Occupied => cell.bold(),
                TileState::Empty => " · ".dimmed(),
            };
            print!("{painted} ");
        }
        println!("\n");
    }
}

fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout()
        .flush()
        .map_err(|e| format!("Failed to flush stdout: {e}"))?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| format!("Failed to read input: {e}"))?;

    Ok(input.trim().to_lowercase())
}
