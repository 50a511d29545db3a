//! Colored terminal rendering of a session

use super::formatters::{create_progress_bar, letter_list, round_message, word_list};
use crate::core::{Pattern, Tile, WORD_LEN, Word};
use crate::game::{GameState, GameStatus, LetterStatus, MAX_GUESSES};
use colored::{ColoredString, Colorize};

fn tile(letter: char, kind: Tile) -> ColoredString {
    let cell = format!(" {letter} ");
    match kind {
        Tile::Correct => cell.black().on_green().bold(),
        Tile::Present => cell.black().on_yellow().bold(),
        Tile::Absent => cell.white().on_bright_black(),
    }
}

/// A submitted guess as a row of coloured tiles
#[must_use]
pub fn format_guess_row(guess: &Word, answer: &Word) -> String {
    let pattern = Pattern::score(guess, answer);
    guess
        .letters()
        .zip(pattern.tiles())
        .map(|(letter, &t)| tile(letter, t).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// The in-progress guess padded with empty cells
#[must_use]
pub fn format_input_row(current_guess: &str) -> String {
    let mut cells: Vec<String> = current_guess
        .chars()
        .map(|c| format!("[{c}]").bright_white().bold().to_string())
        .collect();
    cells.resize(WORD_LEN, "[ ]".bright_black().to_string());
    cells.join(" ")
}

/// Every row of the board: guesses, then the input row while playing, then blanks
#[must_use]
pub fn format_board(state: &GameState) -> Vec<String> {
    let mut rows: Vec<String> = state
        .guesses
        .iter()
        .map(|guess| format_guess_row(guess, &state.current_word))
        .collect();

    if state.status == GameStatus::Playing && rows.len() < MAX_GUESSES {
        rows.push(format_input_row(&state.current_guess));
    }
    while rows.len() < MAX_GUESSES {
        rows.push(format_input_row(""));
    }
    rows
}

/// The alphabet coloured by what is known about each letter
#[must_use]
pub fn format_keyboard(state: &GameState) -> Vec<String> {
    ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"]
        .iter()
        .map(|row| {
            row.chars()
                .map(|c| {
                    let key = c.to_string();
                    match state.letter_status(c) {
                        LetterStatus::Correct => key.green().bold(),
                        LetterStatus::WrongPosition => key.yellow().bold(),
                        LetterStatus::NotInWord => key.bright_black().strikethrough(),
                        LetterStatus::Unused => key.normal(),
                    }
                    .to_string()
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Print the full session: board, keyboard, letters and tallies
pub fn print_session(state: &GameState, catalog_size: usize) {
    println!("\n{}", "═".repeat(40).cyan());
    println!(" {} ", "ADOBLE".bright_cyan().bold());
    println!("{}", "═".repeat(40).cyan());

    println!();
    for row in format_board(state) {
        println!("   {row}");
    }

    println!();
    for (indent, row) in ["", " ", "   "].iter().zip(format_keyboard(state)) {
        println!("   {indent}{row}");
    }

    print_letters(state);
    print_tallies(state, catalog_size);

    if let Some(message) = round_message(state.status) {
        let styled = match state.status {
            GameStatus::Won => message.green().bold(),
            GameStatus::Lost => message.red().bold(),
            _ => message.bright_yellow().bold(),
        };
        println!("\n{styled}");
        if state.lost_words.last() == Some(&state.current_word) {
            println!("The word was {}", state.current_word.text().bright_yellow().bold());
        }
    } else {
        println!(
            "\n{} guesses left",
            state.remaining_guesses().to_string().bright_cyan()
        );
    }
}

/// Print the matched and excluded letters
pub fn print_letters(state: &GameState) {
    println!("\n📊 {}", "Letters:".bright_cyan().bold());
    println!("   In the word:  {}", letter_list(&state.matched_letters()).green());
    println!(
        "   Not in word:  {}",
        letter_list(&state.absent_letters()).bright_black()
    );
}

/// Print won/lost words and catalog progress
pub fn print_tallies(state: &GameState, catalog_size: usize) {
    let used = state.used_words.len();

    println!("\n📈 {}", "Session:".bright_cyan().bold());
    println!(
        "   Won ({}):  {}",
        state.won_words.len(),
        word_list(&state.won_words).green()
    );
    println!(
        "   Lost ({}): {}",
        state.lost_words.len(),
        word_list(&state.lost_words).red()
    );
    println!(
        "   Words:     {} {used}/{catalog_size}",
        create_progress_bar(used, catalog_size, 20).cyan()
    );
}

/// Print a share link
pub fn print_share_link(url: &str) {
    println!("🔗 {} {}", "Share link:".bright_cyan().bold(), url.underline());
}
