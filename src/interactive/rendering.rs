//! TUI rendering with ratatui
//!
//! Board, keyboard and session panels for the game screen.

use super::app::{App, MessageStyle};
use crate::core::{Pattern, Tile, WORD_LEN};
use crate::game::{GameState, GameStatus, LetterStatus, MAX_GUESSES};
use crate::output::formatters::{letter_list, round_message, word_list};
use crate::session::KeyValueStore;
use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Main UI rendering function
pub fn ui<S: KeyValueStore, R: Rng>(f: &mut Frame, app: &App<'_, S, R>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(18),    // Board and panels
            Constraint::Length(3),  // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    let state = app.session.state();
    render_play_panel(f, state, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("ADOBLE - Guess the Adobe-related word!")
        .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Red)),
        );
    f.render_widget(header, area);
}

fn render_play_panel(f: &mut Frame, state: &GameState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(14), Constraint::Min(5)])
        .split(area);

    let board = Paragraph::new(board_lines(state))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Board ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(board, chunks[0]);

    let keyboard = Paragraph::new(keyboard_lines(state))
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(keyboard, chunks[1]);
}

/// Style of a scored tile
#[must_use]
pub fn tile_style(tile: Tile) -> Style {
    let bg = match tile {
        Tile::Correct => Color::Green,
        Tile::Present => Color::Yellow,
        Tile::Absent => Color::DarkGray,
    };
    Style::default()
        .fg(Color::White)
        .bg(bg)
        .add_modifier(Modifier::BOLD)
}

/// Style of an on-screen key, correct taking precedence
#[must_use]
pub fn key_style(status: LetterStatus) -> Style {
    match status {
        LetterStatus::Correct => Style::default().fg(Color::Black).bg(Color::Green),
        LetterStatus::WrongPosition => Style::default().fg(Color::Black).bg(Color::Yellow),
        LetterStatus::NotInWord => Style::default().fg(Color::White).bg(Color::DarkGray),
        LetterStatus::Unused => Style::default().fg(Color::Black).bg(Color::Gray),
    }
}

/// Board rows, one blank line between rows
#[must_use]
pub fn board_lines(state: &GameState) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(MAX_GUESSES * 2);

    for row in 0..MAX_GUESSES {
        let spans = if let Some(guess) = state.guesses.get(row) {
            let pattern = Pattern::score(guess, &state.current_word);
            guess
                .letters()
                .zip(pattern.tiles())
                .flat_map(|(letter, &tile)| {
                    [
                        Span::styled(format!(" {letter} "), tile_style(tile)),
                        Span::raw(" "),
                    ]
                })
                .collect()
        } else if row == state.guesses.len() && state.status == GameStatus::Playing {
            input_row(&state.current_guess)
        } else {
            input_row("")
        };

        lines.push(Line::from(spans));
        lines.push(Line::default());
    }

    lines
}

fn input_row(current_guess: &str) -> Vec<Span<'static>> {
    let letters: Vec<char> = current_guess.chars().collect();

    (0..WORD_LEN)
        .flat_map(|i| {
            let cell = match letters.get(i) {
                Some(c) => Span::styled(
                    format!("[{c}]"),
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                ),
                None if i == letters.len() => Span::styled(
                    "[_]",
                    Style::default()
                        .fg(Color::Blue)
                        .add_modifier(Modifier::SLOW_BLINK),
                ),
                None => Span::styled("[ ]", Style::default().fg(Color::DarkGray)),
            };
            [cell, Span::raw(" ")]
        })
        .collect()
}

fn keyboard_lines(state: &GameState) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            Line::from(
                row.chars()
                    .flat_map(|c| {
                        [
                            Span::styled(format!(" {c} "), key_style(state.letter_status(c))),
                            Span::raw(" "),
                        ]
                    })
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    let enter_style = if state.guess_is_full() && state.status == GameStatus::Playing {
        Style::default().fg(Color::Black).bg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::styled(" ⌫ Backspace ", Style::default().fg(Color::White).bg(Color::Red)),
        Span::raw("  "),
        Span::styled(" Enter ", enter_style),
    ]));
    lines
}

fn render_info_panel<S: KeyValueStore, R: Rng>(f: &mut Frame, app: &App<'_, S, R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Letters
            Constraint::Min(4),    // Words
            Constraint::Length(7), // Messages
        ])
        .split(area);

    let state = app.session.state();
    render_letters(f, state, chunks[0]);
    render_words(f, state, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_letters(f: &mut Frame, state: &GameState, area: Rect) {
    let content = vec![
        Line::from(vec![
            Span::raw("Matched:     "),
            Span::styled(
                letter_list(&state.matched_letters()),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::raw("Not in word: "),
            Span::styled(
                letter_list(&state.absent_letters()),
                Style::default().fg(Color::Red),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Letters ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_words(f: &mut Frame, state: &GameState, area: Rect) {
    let content = vec![
        Line::from(Span::styled(
            format!("Succeeded ({})", state.won_words.len()),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        )),
        Line::from(word_list(&state.won_words)),
        Line::default(),
        Line::from(Span::styled(
            format!("Failed ({})", state.lost_words.len()),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(word_list(&state.lost_words)),
    ];

    let paragraph = Paragraph::new(content)
        .wrap(ratatui::widgets::Wrap { trim: true })
        .block(Block::default().title(" Words ").borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn render_messages<S: KeyValueStore, R: Rng>(f: &mut Frame, app: &App<'_, S, R>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status<S: KeyValueStore, R: Rng>(f: &mut Frame, app: &App<'_, S, R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(40),
        ])
        .split(area);

    let state = app.session.state();
    let status_text = round_message(state.status).map_or_else(
        || format!("{} guesses left", state.remaining_guesses()),
        str::to_string,
    );
    let status = Paragraph::new(status_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, chunks[0]);

    let used = state.used_words.len();
    let total = app.session.catalog().len().max(1);
    let percent = u16::try_from((used.min(total) * 100) / total).unwrap_or(100);
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{used}/{} words", app.session.catalog().len()));
    f.render_widget(gauge, chunks[1]);

    let help = Paragraph::new("Esc: Quit | ^N: New | ^S: Share | ^Z: Undo")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[2]);
}
