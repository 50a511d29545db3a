//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: type a word and press Enter.

use super::share::share_link;
use crate::core::WORD_LEN;
use crate::output::display::{format_board, format_keyboard};
use crate::output::formatters::{letter_list, round_message, round_score, round_summary};
use crate::output::print_share_link;
use crate::session::{KeyValueStore, Session};
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Shown when `:new` is typed before anything was guessed
pub const NEW_GAME_LOCKED: &str = "Guess a word before moving on to the next one.";

/// One line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineCommand {
    Guess(String),
    NewGame,
    Share,
    Help,
    Quit,
}

/// Parse a line of input
///
/// # Errors
///
/// Returns a message for the user when the line is neither a command nor a
/// five-letter word.
///
/// # Examples
/// ```
/// use adoble::commands::simple::{LineCommand, parse_line};
///
/// assert_eq!(parse_line(" adobe "), Ok(LineCommand::Guess("ADOBE".to_string())));
/// assert_eq!(parse_line(":new"), Ok(LineCommand::NewGame));
/// assert!(parse_line("adobes").is_err());
/// ```
pub fn parse_line(line: &str) -> Result<LineCommand, String> {
    let line = line.trim();

    match line.to_ascii_lowercase().as_str() {
        ":quit" | ":q" | ":exit" => return Ok(LineCommand::Quit),
        ":new" | ":n" => return Ok(LineCommand::NewGame),
        ":share" | ":s" => return Ok(LineCommand::Share),
        ":help" | ":h" | "?" => return Ok(LineCommand::Help),
        _ => {}
    }

    if line.starts_with(':') {
        return Err(format!("Unknown command '{line}'. Type :help for commands."));
    }
    if line.len() != WORD_LEN || !line.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(format!("Guesses are {WORD_LEN} letters, A to Z."));
    }

    Ok(LineCommand::Guess(line.to_ascii_uppercase()))
}

/// Replace the in-progress guess with `word` and submit it
///
/// Returns whether the guess was accepted.
pub fn play_guess<S: KeyValueStore, R: Rng>(session: &mut Session<'_, S, R>, word: &str) -> bool {
    while session.backspace() {}
    for letter in word.chars() {
        session.input_letter(letter);
    }
    session.submit_guess()
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<S: KeyValueStore, R: Rng>(
    session: &mut Session<'_, S, R>,
    base_url: &str,
) -> Result<()> {
    println!("\n╔══════════════════════════════════════════╗");
    println!("║        Adoble - Guess the Adobe word     ║");
    println!("╚══════════════════════════════════════════╝\n");
    print_help();
    print_state(session);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("{} ", ">".bright_cyan().bold());
        io::stdout().flush()?;

        let Some(line) = lines.next().transpose()? else {
            println!();
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        match parse_line(&line) {
            Ok(LineCommand::Quit) => break,
            Ok(LineCommand::Help) => print_help(),
            Ok(LineCommand::Share) => match share_link(session, base_url) {
                Ok(url) => print_share_link(&url),
                Err(e) => println!("{} {e}", "Cannot share:".red()),
            },
            Ok(LineCommand::NewGame) if !session.state().can_start_new_game() => {
                println!("{}", NEW_GAME_LOCKED.yellow());
            }
            Ok(LineCommand::NewGame) => {
                session.start_new_game()?;
                println!("\n🔄 New word picked!");
                print_state(session);
            }
            Ok(LineCommand::Guess(word)) => {
                if session.state().is_round_over() {
                    println!("Round is over. Type :new for the next word.");
                } else if !session.state().can_guess() {
                    println!("No guesses left this round. Type :new for the next word.");
                } else if play_guess(session, &word) {
                    print_state(session);
                }
            }
            Err(message) => println!("{}", message.yellow()),
        }
    }

    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

fn print_help() {
    println!("Type a {WORD_LEN}-letter word and press Enter to guess.");
    println!("Commands: :new next word, :share share link, :quit exit\n");
}

fn print_state<S: KeyValueStore, R: Rng>(session: &Session<'_, S, R>) {
    let state = session.state();

    println!();
    for row in format_board(state) {
        println!("   {row}");
    }
    println!();
    for row in format_keyboard(state) {
        println!("   {row}");
    }
    println!(
        "\n   In the word: {}   Not in word: {}",
        letter_list(&state.matched_letters()).green(),
        letter_list(&state.absent_letters()).bright_black()
    );

    match round_message(state.status) {
        Some(message) => {
            println!("\n{}", message.bright_yellow().bold());
            if state.lost_words.last() == Some(&state.current_word) {
                println!("The word was {}", state.current_word.text().bold());
            }
            println!("Adoble {}\n{}", round_score(state), round_summary(state));
            println!(
                "Won {} · Lost {} · Type :new to continue",
                state.won_words.len().to_string().green(),
                state.lost_words.len().to_string().red()
            );
        }
        None if state.can_guess() => {
            println!("   {} guesses left\n", state.remaining_guesses());
        }
        None => println!("\nNo guesses left this round. Type :new to continue"),
    }
}
