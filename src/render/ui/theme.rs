//! Color theme and styling definitions using ratatui colors
//!
//! This module provides color themes for terminal rendering using ratatui's
//! color system directly to avoid unnecessary abstractions.

use crate::error::{Result, RowFilterError};
use ratatui::style::{Color, Modifier, Style};

/// Color theme for terminal UI elements
#[derive(Debug, Clone)]
pub struct ColorTheme {
    /// Column header labels
    pub header: Style,

    /// Text typed into a filter input
    pub input_text: Style,

    /// Hint shown in an empty filter input
    pub input_hint: Style,

    /// Border of the input that has keyboard focus
    pub focused_border: Color,

    /// Border of every other block
    pub border: Color,

    /// "No results" placeholder row
    pub no_results: Style,

    /// Status line background
    pub status_bg: Color,

    /// Status line text
    pub status_fg: Color,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            header: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            input_text: Style::default().fg(Color::White),
            input_hint: Style::default().fg(Color::DarkGray),
            focused_border: Color::Yellow,
            border: Color::Gray,
            no_results: Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::ITALIC),
            status_bg: Color::Blue,
            status_fg: Color::White,
        }
    }
}

impl ColorTheme {
    /// Create a monochrome theme for terminals without color support
    pub fn monochrome() -> Self {
        Self {
            header: Style::default().add_modifier(Modifier::BOLD),
            input_text: Style::default(),
            input_hint: Style::default().add_modifier(Modifier::DIM),
            focused_border: Color::White,
            border: Color::Reset,
            no_results: Style::default().add_modifier(Modifier::ITALIC),
            status_bg: Color::Black,
            status_fg: Color::White,
        }
    }

    /// Create a high-contrast theme for accessibility
    pub fn high_contrast() -> Self {
        Self {
            header: Style::default()
                .fg(Color::LightYellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            input_text: Style::default().fg(Color::White),
            input_hint: Style::default().fg(Color::Gray),
            focused_border: Color::LightGreen,
            border: Color::White,
            no_results: Style::default().fg(Color::LightRed),
            status_bg: Color::White,
            status_fg: Color::Black,
        }
    }

    /// Look a theme up by its configuration name.
    pub fn from_name(name: &str) -> Result<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "" | "default" => Ok(Self::default()),
            "monochrome" | "mono" => Ok(Self::monochrome()),
            "high-contrast" | "high_contrast" => Ok(Self::high_contrast()),
            other => Err(RowFilterError::config(format!("unknown theme `{other}`"))),
        }
    }
}
