//! TUI application state and logic

use crate::core::normalize;
use crate::dictionary::SpellChecker;
use crate::game::{RoundEngine, RoundError, Session, Verdict};
use crate::wordlists::WordListSource;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Longest candidate the input box will hold
pub const MAX_INPUT_LEN: usize = 32;

/// Application state
///
/// The app never touches round state directly; it only reads the engine's
/// session and forwards submissions and restarts.
pub struct App<W, S> {
    pub engine: RoundEngine<W, S>,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub alert: Option<Alert>,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Typing,
    Alert,
}

/// Modal shown when a word is rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<W, S> App<W, S> {
    /// Current round (always present once the app is built)
    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.engine.session()
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.engine.score()
    }
}

impl<W: WordListSource, S: SpellChecker> App<W, S> {
    /// Create the app and start its first round
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::NoWordList`] if no root word can be drawn.
    pub fn new(mut engine: RoundEngine<W, S>) -> Result<Self, RoundError> {
        engine.start_round()?;

        let mut app = Self {
            engine,
            input_mode: InputMode::Typing,
            input_buffer: String::new(),
            alert: None,
            messages: Vec::new(),
            should_quit: false,
        };
        app.add_message(
            "Welcome! Make as many words as you can from the root word.",
            MessageStyle::Info,
        );
        app.add_message("Ctrl+R for a new word, Esc to quit.", MessageStyle::Info);
        Ok(app)
    }

    /// Submit whatever is in the input box
    ///
    /// # Errors
    ///
    /// Only fails if the engine has no round, which `new` rules out.
    pub fn submit_input(&mut self) -> Result<(), RoundError> {
        let verdict = self.engine.submit(&self.input_buffer)?;
        let word = normalize(&self.input_buffer).unwrap_or_default();

        match verdict {
            Verdict::Accepted => {
                self.add_message(&format!("+1 for '{word}'"), MessageStyle::Success);
                self.input_buffer.clear();
            }
            Verdict::Rejected(reason) => {
                self.add_message(&format!("'{word}': {}", reason.title()), MessageStyle::Error);
                let root = self.session().map_or("", Session::root_word);
                self.alert = Some(Alert {
                    title: reason.title().to_string(),
                    message: reason.message(root),
                });
                self.input_mode = InputMode::Alert;
            }
            Verdict::Ignored => self.input_buffer.clear(),
        }

        Ok(())
    }

    /// Draw a new root word and reset the round
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::NoWordList`] if the word source runs dry.
    pub fn restart(&mut self) -> Result<(), RoundError> {
        let root = self.engine.start_round()?.root_word().to_uppercase();
        self.input_buffer.clear();
        self.dismiss_alert();
        self.add_message(&format!("New word: {root}"), MessageStyle::Info);
        Ok(())
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
        self.input_mode = InputMode::Typing;
    }

    /// Apply one key press
    ///
    /// # Errors
    ///
    /// Propagates round lifecycle failures from submitting or restarting.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<(), RoundError> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match (self.input_mode, key.code) {
            (_, KeyCode::Char('c')) if ctrl => self.should_quit = true,
            // Any key closes the alert
            (InputMode::Alert, _) => self.dismiss_alert(),
            (InputMode::Typing, KeyCode::Esc) => self.should_quit = true,
            (InputMode::Typing, KeyCode::Char('r')) if ctrl => self.restart()?,
            (InputMode::Typing, KeyCode::Enter) => self.submit_input()?,
            (InputMode::Typing, KeyCode::Backspace) => {
                self.input_buffer.pop();
            }
            (InputMode::Typing, KeyCode::Char(c)) if !ctrl => {
                if self.input_buffer.chars().count() < MAX_INPUT_LEN {
                    self.input_buffer.push(c);
                }
            }
            _ => {}
        }

        Ok(())
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<W: WordListSource, S: SpellChecker>(app: App<W, S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B, W, S>(terminal: &mut Terminal<B>, mut app: App<W, S>) -> Result<()>
where
    B: ratatui::backend::Backend,
    W: WordListSource,
    S: SpellChecker,
{
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key)?;
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
