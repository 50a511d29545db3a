//! TUI application state and logic

use crate::commands::share_link;
use crate::commands::simple::NEW_GAME_LOCKED;
use crate::game::GameStatus;
use crate::output::formatters::round_message;
use crate::session::{KeyValueStore, RestoreSource, Session};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Messages kept on screen
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<'a, S: KeyValueStore, R: Rng = StdRng> {
    pub session: Session<'a, S, R>,
    pub base_url: String,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a, S: KeyValueStore, R: Rng> App<'a, S, R> {
    #[must_use]
    pub fn new(session: Session<'a, S, R>, base_url: impl Into<String>) -> Self {
        let greeting = match session.restored_from() {
            RestoreSource::ShareToken => "Loaded a shared game.",
            RestoreSource::Storage => "Welcome back! Your game was restored.",
            RestoreSource::Fresh => "Welcome! Guess the Adobe-related word.",
        };

        let mut app = Self {
            session,
            base_url: base_url.into(),
            messages: Vec::new(),
            should_quit: false,
        };
        app.add_message(greeting, MessageStyle::Info);
        let state = app.session.state();
        let note = round_message(state.status).or_else(|| {
            (!state.can_guess())
                .then_some("No guesses left this round. Press Ctrl+N for the next word.")
        });
        if let Some(text) = note {
            app.add_message(text, MessageStyle::Info);
        }
        app
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('z') if ctrl => {
                self.session.backspace();
            }
            KeyCode::Char('n') if ctrl => self.new_game(),
            KeyCode::Char('s') if ctrl => self.share(),
            KeyCode::Char(c) if !ctrl => {
                self.session.input_letter(c);
            }
            KeyCode::Backspace => {
                self.session.backspace();
            }
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }

    fn submit(&mut self) {
        if !self.session.state().guess_is_full() || !self.session.submit_guess() {
            return;
        }

        let state = self.session.state();
        let status = state.status;
        let Some(text) = round_message(status) else {
            return;
        };
        let reveal = (state.lost_words.last() == Some(&state.current_word))
            .then(|| format!("The word was {}.", state.current_word));

        let style = match status {
            GameStatus::Lost => MessageStyle::Error,
            _ => MessageStyle::Success,
        };
        self.add_message(text, style);
        if let Some(reveal) = reveal {
            self.add_message(&reveal, MessageStyle::Info);
        }
        self.add_message("Press Ctrl+N for the next word.", MessageStyle::Info);
    }

    fn new_game(&mut self) {
        if !self.session.state().can_start_new_game() {
            self.add_message(NEW_GAME_LOCKED, MessageStyle::Error);
            return;
        }

        let restarting =
            self.session.state().used_words.len() >= self.session.catalog().len();

        match self.session.start_new_game() {
            Ok(()) if restarting => {
                self.add_message("Every word played. Starting over!", MessageStyle::Info);
            }
            Ok(()) => self.add_message("New word picked!", MessageStyle::Info),
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    fn share(&mut self) {
        match share_link(&self.session, &self.base_url) {
            Ok(url) => self.add_message(&format!("Share: {url}"), MessageStyle::Success),
            Err(e) => self.add_message(&format!("Cannot share: {e}"), MessageStyle::Error),
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: KeyValueStore, R: Rng>(app: App<'_, S, R>) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, S: KeyValueStore, R: Rng>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, S, R>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
