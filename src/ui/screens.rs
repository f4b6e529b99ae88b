//! Questionnaire screens
//!
//! One screen per mode: the active question with its option list and
//! progress dots, and the result screen with the recommendation.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::app::AppState;
use crate::theme::{Colors, Styles};
use crate::types::QuestionKey;

const TITLE: &str = "Travel Destination Finder";

/// Render the active question with its options and progress dots.
pub fn render_question_screen(f: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(2), // Question prompt
            Constraint::Min(5),    // Option list
            Constraint::Length(2), // Status
            Constraint::Length(1), // Progress dots
        ])
        .split(area);

    render_title(f, chunks[0]);

    let Some(question) = state.collector.phase().question() else {
        // Complete sessions are rendered by the result screen; leave the
        // body empty rather than guessing a question.
        return;
    };

    let prompt = Paragraph::new(format!("  {}", question.prompt())).style(Styles::prompt());
    f.render_widget(prompt, chunks[1]);

    render_options(f, chunks[2], question, state.option_selection);

    let status = Paragraph::new(format!("  {}", state.status_message)).style(Styles::hint());
    f.render_widget(status, chunks[3]);

    let dots = Paragraph::new(progress_line(state.collector.step())).alignment(Alignment::Center);
    f.render_widget(dots, chunks[4]);
}

/// Render the recommendation for a completed session.
pub fn render_result_screen(f: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(6),    // Recommendation
            Constraint::Length(2), // Hint
        ])
        .split(area);

    render_title(f, chunks[0]);

    let text = state
        .recommendation
        .as_deref()
        .unwrap_or("No recommendation available");

    let recommendation = Paragraph::new(text)
        .style(Styles::recommendation())
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Your Perfect Destination ")
                .title_style(Styles::title())
                .border_style(Styles::recommendation()),
        );
    f.render_widget(recommendation, chunks[1]);

    let hint =
        Paragraph::new(format!("  {}", state.status_message)).style(Styles::hint());
    f.render_widget(hint, chunks[2]);
}

fn render_title(f: &mut Frame, area: Rect) {
    let title = Paragraph::new(TITLE)
        .style(Styles::title())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(title, area);
}

fn render_options(f: &mut Frame, area: Rect, question: QuestionKey, selection: usize) {
    let items: Vec<ListItem> = question
        .options()
        .into_iter()
        .enumerate()
        .map(|(i, option)| {
            let style = if i == selection {
                Styles::selected()
            } else {
                Styles::option()
            };
            ListItem::new(format!("  {}", option)).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Question {} of 3 ", question.step_number()))
            .title_style(Styles::title())
            .border_style(ratatui::style::Style::default().fg(Colors::BORDER_ACTIVE)),
    );

    let mut list_state = ListState::default();
    list_state.select(Some(selection));
    f.render_stateful_widget(list, area, &mut list_state);
}

/// Build the three-dot progress indicator line for the given step (1..=3).
fn progress_line(step: usize) -> Line<'static> {
    let mut spans = Vec::new();
    for i in 1..=3 {
        let (dot, color) = if i == step {
            ("●", Colors::PROGRESS_ACTIVE)
        } else {
            ("○", Colors::PROGRESS_INACTIVE)
        };
        spans.push(Span::styled(
            format!("{} ", dot),
            ratatui::style::Style::default().fg(color),
        ));
    }
    Line::from(spans)
}
