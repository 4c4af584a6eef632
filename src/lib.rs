//! # sd-academy
//!
//! A terminal learning companion for system design: topic overview, video
//! lessons, a design pattern catalogue, a refactoring primer, a short quiz
//! and a scripted chat.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use sd_academy::{Academy, AcademyError, Config};
//!
//! fn main() -> Result<(), AcademyError> {
//!     let academy = Academy::new(Config::default())?;
//!     academy.run()
//! }
//! ```

mod app;
pub mod chat;
pub mod clock;
mod config;
pub mod content;
mod data;
mod error;
pub mod logging;
mod models;
pub mod quiz;
pub mod scheduler;
pub mod terminal;
mod ui;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::info;

pub use app::{App, Followup};
pub use config::{Config, DEFAULT_TICK};
pub use data::{builtin_questions, load_questions_from_json};
pub use error::{AcademyError, LoadError};
pub use models::{ChatMessage, Question, Role, View, NUM_OPTIONS};

/// The academy, ready to take over the terminal.
pub struct Academy {
    app: App,
    config: Config,
}

impl Academy {
    /// Build the academy from a configuration, loading the question bank
    /// override if one is configured.
    pub fn new(config: Config) -> Result<Self, AcademyError> {
        let questions = match &config.questions_path {
            Some(path) => load_questions_from_json(path)?,
            None => builtin_questions(),
        };
        info!("starting with {} questions", questions.len());

        Ok(Self {
            app: App::new(questions, &config),
            config,
        })
    }

    /// Run until the user quits.
    pub fn run(mut self) -> Result<(), AcademyError> {
        let mut tui = terminal::enter()?;
        let result = run_event_loop(&mut tui, &mut self.app, &self.config);
        terminal::leave()?;
        info!("exiting");
        result
    }
}

fn run_event_loop(tui: &mut terminal::Tui, app: &mut App, config: &Config) -> Result<(), AcademyError> {
    loop {
        app.tick();
        tui.draw(|frame| ui::render(frame, app))?;

        if event::poll(config.tick)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                if handle_input(app, key) {
                    break;
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Apply one key press. Returns true if the app should exit.
pub fn handle_input(app: &mut App, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return true;
    }

    match key.code {
        KeyCode::Tab => {
            app.next_view();
            return false;
        }
        KeyCode::BackTab => {
            app.previous_view();
            return false;
        }
        _ => {}
    }

    // The chat input swallows plain characters, including digits and 'q'.
    if app.view == View::Chat {
        return handle_chat_input(app, key);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.should_quit = true;
            return true;
        }
        KeyCode::Char(c) => {
            if let Some(view) = View::from_shortcut(c) {
                app.navigate(view);
                return false;
            }
        }
        _ => {}
    }

    match app.view {
        View::Learn => handle_learn_input(app, key.code),
        View::Patterns => handle_patterns_input(app, key.code),
        View::Refactoring => handle_refactoring_input(app, key.code),
        View::Quiz => handle_quiz_input(app, key.code),
        View::Home | View::Chat => {}
    }

    false
}

fn handle_learn_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Down | KeyCode::Char('j') => app.select_next_lesson(),
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_lesson(),
        _ => {}
    }
}

fn handle_patterns_input(app: &mut App, key: KeyCode) {
    if app.open_pattern().is_some() {
        if matches!(key, KeyCode::Esc | KeyCode::Backspace | KeyCode::Left | KeyCode::Char('h')) {
            app.close_pattern();
        }
        return;
    }

    match key {
        KeyCode::Down | KeyCode::Char('j') => app.select_next_pattern(),
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_pattern(),
        KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => app.open_selected_pattern(),
        _ => {}
    }
}

fn handle_refactoring_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Down | KeyCode::Char('j') => app.scroll_refactoring_down(),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_refactoring_up(),
        _ => {}
    }
}

fn handle_quiz_input(app: &mut App, key: KeyCode) {
    if app.session().is_completed() {
        match key {
            KeyCode::Down | KeyCode::Char('j') => app.scroll_results_down(),
            KeyCode::Up | KeyCode::Char('k') => app.scroll_results_up(),
            KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter => app.restart_quiz(),
            _ => {}
        }
        return;
    }

    match key {
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_option(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_option(),
        KeyCode::Enter | KeyCode::Char(' ') => app.submit_answer(),
        KeyCode::Char(c @ 'a'..='d') => app.answer(c as usize - 'a' as usize),
        KeyCode::Char('r') | KeyCode::Char('R') => app.restart_quiz(),
        _ => {}
    }
}

fn handle_chat_input(app: &mut App, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if key.code == KeyCode::Char('l') {
            app.clear_chat();
        }
        return false;
    }

    match key.code {
        KeyCode::Char(c) => app.chat_input_push(c),
        KeyCode::Backspace => app.chat_input_pop(),
        KeyCode::Enter => app.send_chat(),
        KeyCode::Esc => app.clear_chat_input(),
        _ => {}
    }

    false
}
