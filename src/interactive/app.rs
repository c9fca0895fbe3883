//! TUI application state and logic

use crate::commands::Session;
use crate::core::Word;
use crate::output::{rejection_message, rejection_title};
use crate::round::{RoundOrigin, SubmitError};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

const MAX_MESSAGES: usize = 5;
const MAX_INPUT_CHARS: usize = 32;

/// Application state
pub struct App {
    pub session: Session,
    pub input_buffer: String,
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

impl App {
    /// Wrap `session`, resuming its saved round or starting one
    ///
    /// # Errors
    ///
    /// Returns an error if no round can be started.
    pub fn new(mut session: Session) -> Result<Self> {
        let origin = session.ensure_round()?;

        let mut app = Self {
            session,
            input_buffer: String::new(),
            messages: Vec::new(),
            should_quit: false,
        };

        let greeting = match origin {
            RoundOrigin::Resumed => "Welcome back! Your round was restored.",
            RoundOrigin::Started => "Welcome! Make words from the letters above.",
        };
        app.add_message(greeting, MessageStyle::Info);

        Ok(app)
    }

    /// Current root word, empty if there is no round
    #[must_use]
    pub fn root_text(&self) -> &str {
        self.session.root().map_or("", Word::text)
    }

    /// Accepted words, most recent first
    #[must_use]
    pub fn used_words(&self) -> &[Word] {
        self.session.state().used_words()
    }

    /// Submit the input buffer and report the outcome
    pub fn submit_input(&mut self) {
        let candidate = self.input_buffer.trim().to_string();
        if candidate.is_empty() {
            return;
        }
        self.input_buffer.clear();

        match self.session.submit(&candidate) {
            Ok(word) => {
                let total = self.used_words().len();
                self.add_message(
                    &format!("✓ {} ({total} found)", word.text()),
                    MessageStyle::Success,
                );
            }
            Err(SubmitError::Rejected(reason)) => {
                let text = format!(
                    "{}: {}",
                    rejection_title(reason),
                    rejection_message(reason, self.root_text(), self.session.rules())
                );
                self.add_message(&text, MessageStyle::Error);
            }
            Err(SubmitError::NoRound) => {
                self.add_message(
                    "No active round. Press Ctrl-R for a new word.",
                    MessageStyle::Error,
                );
            }
        }
    }

    /// Replace the round with a fresh root
    pub fn new_round(&mut self) {
        self.input_buffer.clear();
        self.messages.clear();

        match self.session.new_round() {
            Ok(root) => {
                let text = format!("New word: {}", root.text().to_uppercase());
                self.add_message(&text, MessageStyle::Info);
            }
            Err(err) => {
                let text = format!("Could not start a round: {err}");
                self.add_message(&text, MessageStyle::Error);
            }
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only the most recent messages
        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('r') if ctrl => self.new_round(),
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter => self.submit_input(),
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Char(c) if !ctrl && !c.is_whitespace() => {
                if self.input_buffer.chars().count() < MAX_INPUT_CHARS {
                    self.input_buffer.push(c);
                }
            }
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::round::{MemoryStore, Snapshot};

    fn terminal_app() -> App {
        let snapshot = Snapshot {
            root: "terminal".to_string(),
            ..Snapshot::default()
        };
        let session = Session::with_gateway(
            &GameConfig::default(),
            Box::new(MemoryStore::with_snapshot(snapshot)),
        );
        App::new(session).unwrap()
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
        app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
    }

    #[test]
    fn resumed_round_is_announced() {
        let app = terminal_app();
        assert_eq!(app.root_text(), "terminal");
        assert!(app.messages[0].text.contains("restored"));
    }

    #[test]
    fn typed_word_is_accepted() {
        let mut app = terminal_app();
        type_word(&mut app, "lane");

        assert_eq!(app.used_words().len(), 1);
        assert!(app.input_buffer.is_empty());
        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Success);
    }

    #[test]
    fn rejection_shows_title_and_message() {
        let mut app = terminal_app();
        type_word(&mut app, "terminal");

        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
        assert_eq!(last.text, "Same word: Too easy, don't use the same word!");
        assert!(app.used_words().is_empty());
    }

    #[test]
    fn backspace_and_whitespace() {
        let mut app = terminal_app();
        for code in [
            KeyCode::Char('l'),
            KeyCode::Char(' '),
            KeyCode::Char('x'),
            KeyCode::Backspace,
        ] {
            app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
        }
        assert_eq!(app.input_buffer, "l");
    }

    #[test]
    fn empty_enter_does_nothing() {
        let mut app = terminal_app();
        let before = app.messages.len();
        app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert_eq!(app.messages.len(), before);
    }

    #[test]
    fn messages_are_capped() {
        let mut app = terminal_app();
        for _ in 0..10 {
            type_word(&mut app, "it");
        }
        assert_eq!(app.messages.len(), MAX_MESSAGES);
    }

    #[test]
    fn ctrl_r_starts_new_round() {
        let mut app = terminal_app();
        type_word(&mut app, "lane");
        app.handle_key(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL));

        assert!(app.used_words().is_empty());
        assert!(app.input_buffer.is_empty());
        assert!(app.messages[0].text.starts_with("New word:"));
    }

    #[test]
    fn quit_keys() {
        let mut app = terminal_app();
        app.handle_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        assert!(app.should_quit);

        let mut app = terminal_app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }
}
