//! User interface rendering module
//!
//! Rendering is a pure function of `AppState` - no state transitions happen
//! here. This module handles layout, the navigation bar, and the help
//! overlay; the individual screens live in `screens`.

pub mod screens;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::{AppMode, AppState};
use crate::theme::Styles;

/// Render the complete UI based on application state.
pub fn render(f: &mut Frame, state: &AppState) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // Main content area
            Constraint::Length(1), // Navigation bar
        ])
        .split(f.area());

    let content_area = main_chunks[0];
    let nav_bar_area = main_chunks[1];

    match state.mode {
        AppMode::Question => screens::render_question_screen(f, content_area, state),
        AppMode::Result => screens::render_result_screen(f, content_area, state),
    }

    render_nav_bar(f, state, nav_bar_area);

    if state.help_visible {
        render_help_overlay(f);
    }
}

/// Render the bottom navigation bar with mode-appropriate key hints.
fn render_nav_bar(f: &mut Frame, state: &AppState, area: Rect) {
    let hints: &[(&str, &str)] = match state.mode {
        AppMode::Question => &[
            ("j/k", "Move"),
            ("Enter", "Select"),
            ("r", "Restart"),
            ("?", "Help"),
            ("q", "Quit"),
        ],
        AppMode::Result => &[("Enter/r", "Start over"), ("?", "Help"), ("q", "Quit")],
    };

    let mut spans = Vec::new();
    for (key, action) in hints {
        spans.push(Span::styled(format!(" [{}] ", key), Styles::key_hint()));
        spans.push(Span::raw(format!("{}  ", action)));
    }

    let bar = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    f.render_widget(bar, area);
}

/// Render the help overlay centered over the current screen.
fn render_help_overlay(f: &mut Frame) {
    let area = centered_rect(50, 40, f.area());

    let lines = vec![
        Line::from(""),
        Line::from("  Answer three quick questions and get a"),
        Line::from("  travel destination picked for you."),
        Line::from(""),
        Line::from(vec![
            Span::styled("  j/k or arrows ", Styles::key_hint()),
            Span::raw("move between options"),
        ]),
        Line::from(vec![
            Span::styled("  Enter         ", Styles::key_hint()),
            Span::raw("select the highlighted option"),
        ]),
        Line::from(vec![
            Span::styled("  r             ", Styles::key_hint()),
            Span::raw("restart the questionnaire"),
        ]),
        Line::from(vec![
            Span::styled("  q or Esc      ", Styles::key_hint()),
            Span::raw("quit"),
        ]),
        Line::from(""),
        Line::from(Span::styled("  Press any key to close", Styles::hint())),
    ];

    let help = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Help ")
            .title_style(Styles::title()),
    );

    f.render_widget(Clear, area);
    f.render_widget(help, area);
}

/// Compute a centered rect taking the given percentages of the area.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
