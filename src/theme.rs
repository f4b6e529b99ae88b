//! Centralized theme and styling for the TUI
//!
//! Single source of truth for all colors and styles used throughout the
//! application. Components should pull from here rather than hardcoding
//! colors.

use ratatui::style::{Color, Modifier, Style};

/// Core color palette for the application
pub struct Colors;

impl Colors {
    /// Primary dark background - used for panels and the selected row
    pub const BG_PRIMARY: Color = Color::Rgb(20, 20, 30);

    /// Default foreground text color
    pub const FG_PRIMARY: Color = Color::White;

    /// Secondary/muted text color
    pub const FG_SECONDARY: Color = Color::Gray;

    /// Primary accent color - borders, titles, highlights
    pub const PRIMARY: Color = Color::Cyan;

    /// Secondary accent color - selected items, emphasis
    pub const SECONDARY: Color = Color::Yellow;

    /// Success/positive feedback
    pub const SUCCESS: Color = Color::Green;

    /// Error feedback
    pub const ERROR: Color = Color::Red;

    /// Active border color
    pub const BORDER_ACTIVE: Color = Color::Cyan;

    /// Inactive/unfocused border color
    pub const BORDER_INACTIVE: Color = Color::DarkGray;

    /// Filled progress dot
    pub const PROGRESS_ACTIVE: Color = Color::Cyan;

    /// Unfilled progress dot
    pub const PROGRESS_INACTIVE: Color = Color::DarkGray;
}

/// Pre-built styles for common elements
pub struct Styles;

impl Styles {
    /// Screen title style
    pub fn title() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Question prompt style
    pub fn prompt() -> Style {
        Style::default()
            .fg(Colors::FG_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Highlighted option row
    pub fn selected() -> Style {
        Style::default()
            .fg(Colors::BG_PRIMARY)
            .bg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Unselected option row
    pub fn option() -> Style {
        Style::default().fg(Colors::FG_PRIMARY)
    }

    /// Key hint style for the navigation bar
    pub fn key_hint() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Muted hint/status text
    pub fn hint() -> Style {
        Style::default().fg(Colors::FG_SECONDARY)
    }

    /// Recommendation body text
    pub fn recommendation() -> Style {
        Style::default().fg(Colors::SUCCESS)
    }
}
