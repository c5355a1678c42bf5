//! TUI application state and logic

use crate::commands::{Command, ReplConfig};
use crate::core::HelperError;
use crate::helper::{Mode, Session};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

const MAX_MESSAGES: usize = 8;

/// Application state
pub struct App {
    pub session: Session,
    pub config: ReplConfig,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    /// Panel highlighted by the last `suggest`
    pub focus: Mode,
    pub candidates: usize,
    pub solve_suggestions: Vec<(String, f64)>,
    pub info_suggestions: Vec<(String, f64)>,
    pub should_quit: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Command,
    /// `add` without arguments: waiting for the word
    AddWord,
    /// Waiting for the feedback of this word
    AddFeedback(String),
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
    #[must_use]
    pub fn new(session: Session, config: ReplConfig) -> Self {
        let mut app = Self {
            session,
            config,
            input_mode: InputMode::Command,
            input_buffer: String::new(),
            messages: Vec::new(),
            focus: Mode::Solve,
            candidates: 0,
            solve_suggestions: Vec::new(),
            info_suggestions: Vec::new(),
            should_quit: false,
        };
        app.add_message(
            "Welcome! Record guesses with 'add WORD FEEDBACK', e.g. 'add slate ggbby'.",
            MessageStyle::Info,
        );
        app.add_message("Type 'help' for all commands.", MessageStyle::Info);
        app.refresh();
        app
    }

    /// Recompute candidates and both suggestion lists
    pub fn refresh(&mut self) {
        self.candidates = self.session.candidates().len();
        let limit = self.config.limit;

        let top = |mode: Mode| -> Result<Vec<(String, f64)>, HelperError> {
            Ok(self
                .session
                .suggest(mode)?
                .into_iter()
                .take(limit)
                .map(|s| (s.word.text().to_string(), s.score))
                .collect())
        };

        match (top(Mode::Solve), top(Mode::Info)) {
            (Ok(solve), Ok(info)) => {
                self.solve_suggestions = solve;
                self.info_suggestions = info;
            }
            (Err(e), _) | (_, Err(e)) => {
                self.solve_suggestions.clear();
                self.info_suggestions.clear();
                self.add_message(&e.to_string(), MessageStyle::Error);
            }
        }
    }

    /// Handle Enter: interpret the input buffer according to the input mode
    pub fn submit(&mut self) {
        let line = self.input_buffer.trim().to_string();
        self.input_buffer.clear();

        match std::mem::replace(&mut self.input_mode, InputMode::Command) {
            InputMode::Command => {
                if line.is_empty() {
                    return;
                }
                match Command::parse(&line) {
                    Ok(command) => self.run_command(command),
                    Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
                }
            }
            InputMode::AddWord => {
                self.input_mode = InputMode::AddFeedback(line);
            }
            InputMode::AddFeedback(word) => self.record(&word, &line),
        }
    }

    /// Abandon a pending `add`
    pub fn cancel(&mut self) {
        if self.input_mode != InputMode::Command {
            self.input_mode = InputMode::Command;
            self.add_message("Add cancelled", MessageStyle::Info);
        }
        self.input_buffer.clear();
    }

    fn run_command(&mut self, command: Command) {
        match command {
            Command::Quit => self.should_quit = true,
            Command::Help => self.add_message(
                "add [WORD [FEEDBACK]] | suggest solve|info | history | reset | reload | quit",
                MessageStyle::Info,
            ),
            Command::Reload => match self.config.source.load() {
                Ok(words) => {
                    let count = words.len();
                    self.session.set_dictionary(words);
                    self.add_message(
                        &format!("Word list reloaded ({count} words)"),
                        MessageStyle::Success,
                    );
                    self.refresh();
                }
                Err(e) => self.add_message(
                    &format!("Failed to reload {}: {e}", self.config.source),
                    MessageStyle::Error,
                ),
            },
            Command::History => {
                let count = self.session.history().len();
                self.add_message(
                    &format!("{count} guesses recorded; constraints shown on the left"),
                    MessageStyle::Info,
                );
            }
            Command::Reset => {
                self.session.reset();
                self.add_message("Guess history cleared", MessageStyle::Success);
                self.refresh();
            }
            Command::Add { word, feedback } => match (word, feedback) {
                (Some(word), Some(feedback)) => self.record(&word, &feedback),
                (Some(word), None) => self.input_mode = InputMode::AddFeedback(word),
                (None, _) => self.input_mode = InputMode::AddWord,
            },
            Command::Suggest(mode) => {
                self.focus = mode;
                self.add_message(&format!("Showing {mode} suggestions"), MessageStyle::Info);
            }
        }
    }

    fn record(&mut self, word: &str, feedback: &str) {
        match self.session.add(word, feedback) {
            Ok(()) => {
                self.refresh();
                let tiles = self
                    .session
                    .history()
                    .all()
                    .last()
                    .map(|guess| guess.feedback().to_emoji())
                    .unwrap_or_default();
                self.add_message(
                    &format!(
                        "Recorded {} {tiles}: {} candidates remain",
                        word.to_uppercase(),
                        self.candidates
                    ),
                    MessageStyle::Success,
                );
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
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
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
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

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Esc => app.cancel(),
                KeyCode::Enter => app.submit(),
                KeyCode::Backspace => {
                    app.input_buffer.pop();
                }
                KeyCode::Char(c) => app.input_buffer.push(c),
                _ => {}
            }
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
    use crate::core::Word;
    use crate::interactive::rendering::ui;
    use ratatui::backend::TestBackend;
    use std::cell::Cell;

    thread_local! {
        static WARNINGS: Cell<usize> = const { Cell::new(0) };
    }

    /// Counts warnings raised on the current thread
    struct WarningCounter;

    impl log::Log for WarningCounter {
        fn enabled(&self, metadata: &log::Metadata) -> bool {
            metadata.level() <= log::Level::Warn
        }

        fn log(&self, record: &log::Record) {
            if self.enabled(record.metadata()) {
                WARNINGS.with(|count| count.set(count.get() + 1));
            }
        }

        fn flush(&self) {}
    }

    static COUNTER: WarningCounter = WarningCounter;

    fn warnings_so_far() -> usize {
        let _ = log::set_logger(&COUNTER);
        log::set_max_level(log::LevelFilter::Warn);
        WARNINGS.with(Cell::get)
    }

    fn app() -> App {
        let words = ["plane", "sleek", "sleep", "slept", "crane"];
        let session = Session::new(words.iter().map(|w| Word::new(*w).unwrap()).collect());
        App::new(session, ReplConfig::default())
    }

    fn enter(app: &mut App, line: &str) {
        app.input_buffer = line.to_string();
        app.submit();
    }

    #[test]
    fn starts_with_full_candidate_set() {
        let app = app();
        assert_eq!(app.candidates, 5);
        assert_eq!(app.solve_suggestions.len(), 5);
        assert!(!app.info_suggestions.is_empty());
    }

    #[test]
    fn add_command_records_guess() {
        let mut app = app();
        enter(&mut app, "add slate ggbby");

        assert_eq!(app.session.history().len(), 1);
        assert_eq!(app.candidates, 2);
        assert!(app.solve_suggestions.iter().all(|(w, _)| w.starts_with("sle")));
    }

    #[test]
    fn bare_add_prompts_for_word_then_feedback() {
        let mut app = app();
        enter(&mut app, "add");
        assert_eq!(app.input_mode, InputMode::AddWord);

        enter(&mut app, "slate");
        assert_eq!(app.input_mode, InputMode::AddFeedback("slate".to_string()));

        enter(&mut app, "ggbby");
        assert_eq!(app.input_mode, InputMode::Command);
        assert_eq!(app.session.history().len(), 1);
    }

    #[test]
    fn cancel_abandons_add() {
        let mut app = app();
        enter(&mut app, "add slate");
        app.cancel();
        assert_eq!(app.input_mode, InputMode::Command);
        assert!(app.session.history().is_empty());
    }

    #[test]
    fn invalid_feedback_is_reported() {
        let mut app = app();
        enter(&mut app, "add slate ggbbx");

        assert!(app.session.history().is_empty());
        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
        assert!(last.text.contains("invalid feedback"));
    }

    #[test]
    fn unknown_command_is_reported() {
        let mut app = app();
        enter(&mut app, "dance");
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn contradiction_clears_suggestions() {
        let mut app = app();
        enter(&mut app, "add crane ggggg");
        enter(&mut app, "add plane ggggg");

        assert_eq!(app.candidates, 0);
        assert!(app.solve_suggestions.is_empty());
        assert!(app.info_suggestions.is_empty());
    }

    #[test]
    fn contradiction_does_not_write_warnings_over_the_screen() {
        let before = warnings_so_far();
        let mut app = app();
        enter(&mut app, "add crane ggggg");
        enter(&mut app, "add plane ggggg");

        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();

        assert_eq!(app.candidates, 0);
        assert_eq!(warnings_so_far(), before);
    }

    #[test]
    fn suggest_switches_focus_and_reset_restores() {
        let mut app = app();
        enter(&mut app, "suggest info");
        assert_eq!(app.focus, Mode::Info);

        enter(&mut app, "add slate ggbby");
        enter(&mut app, "reset");
        assert_eq!(app.candidates, 5);
    }

    #[test]
    fn quit_sets_flag() {
        let mut app = app();
        enter(&mut app, "q");
        assert!(app.should_quit);
    }

    #[test]
    fn message_log_is_bounded() {
        let mut app = app();
        for _ in 0..20 {
            enter(&mut app, "help");
        }
        assert_eq!(app.messages.len(), MAX_MESSAGES);
    }
}
