//! Application module
//!
//! Contains the main application logic, state management, and event handling.
//!
//! # Module Structure
//! - `state` - Application state types (AppState, AppMode)
//! - Main module - App struct and event loop
//!
//! Each key press is handled as one atomic state transition; nothing here
//! blocks or runs concurrently.

mod state;

// Re-export state types for external use
pub use state::{AppMode, AppState};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::logic::resolver;
use crate::rules::RuleTable;
use crate::types::Answer;
use crate::ui;

/// Main application struct
pub struct App {
    state: AppState,
    should_quit: bool,
}

impl App {
    /// Create a new application instance with the given rule table.
    pub fn new(rules: RuleTable) -> Self {
        info!("creating app instance");
        Self {
            state: AppState::with_rules(rules),
            should_quit: false,
        }
    }

    /// Read-only view of the application state (used by rendering and tests).
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Run the event loop until the user quits.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|f| ui::render(f, &self.state))?;

            if event::poll(Duration::from_millis(250))? {
                if let Event::Key(key) = event::read()? {
                    // Ignore key release events on platforms that report them
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key);
                    }
                }
            }
        }
        info!("app exiting");
        Ok(())
    }

    /// Handle a single key press as one atomic state transition.
    ///
    /// Public so the full questionnaire flow can be driven in tests without
    /// a terminal.
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Help overlay swallows everything except its own toggle and quit
        if self.state.help_visible {
            match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                _ => self.state.help_visible = false,
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('?') => self.state.help_visible = true,
            KeyCode::Char('r') => self.restart(),
            _ => match self.state.mode {
                AppMode::Question => self.handle_question_key(key),
                AppMode::Result => {
                    if key.code == KeyCode::Enter {
                        self.restart();
                    }
                }
            },
        }
    }

    fn handle_question_key(&mut self, key: KeyEvent) {
        let Some(question) = self.state.collector.phase().question() else {
            // Question mode with a complete collector should not happen;
            // recover by showing the result.
            warn!("question mode with complete session, switching to result");
            self.finish_session();
            return;
        };

        let option_count = question.options().len();

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                if self.state.option_selection > 0 {
                    self.state.option_selection -= 1;
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.state.option_selection + 1 < option_count {
                    self.state.option_selection += 1;
                }
            }
            KeyCode::Enter => {
                let options = question.options();
                let raw = &options[self.state.option_selection];
                match Answer::parse(question, raw) {
                    Ok(answer) => self.record(answer),
                    Err(e) => {
                        // Options come from the enum itself, so this is
                        // unreachable via the UI
                        self.state.status_message = e.to_string();
                    }
                }
            }
            _ => {}
        }
    }

    fn record(&mut self, answer: Answer) {
        match self.state.collector.record(answer) {
            Ok(()) => {
                self.state.option_selection = 0;
                if self.state.collector.is_complete() {
                    self.finish_session();
                } else {
                    self.state.status_message =
                        format!("Step {} of 3", self.state.collector.step());
                }
            }
            Err(e) => {
                warn!(error = %e, "failed to record answer");
                self.state.status_message = e.to_string();
            }
        }
    }

    fn finish_session(&mut self) {
        match resolver::resolve(self.state.collector.choices(), &self.state.rules) {
            Ok(text) => {
                debug!("session resolved");
                self.state.recommendation = Some(text);
                self.state.mode = AppMode::Result;
                self.state.status_message = "Press Enter or r to start over".to_string();
            }
            Err(e) => {
                // Defensive: the collector flagged completion, so the
                // resolver should always succeed here
                warn!(error = %e, "resolution failed for complete session");
                self.state.status_message = e.to_string();
            }
        }
    }

    fn restart(&mut self) {
        self.state.collector.reset();
        self.state.recommendation = None;
        self.state.mode = AppMode::Question;
        self.state.option_selection = 0;
        self.state.status_message = "Answer three questions to find your destination".to_string();
    }
}
