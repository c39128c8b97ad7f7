//! Terminal UI implementation using ratatui
//!
//! This module provides the concrete implementation of UIRenderer using ratatui
//! for a cross-platform terminal interface. It only draws what `ViewState` holds;
//! filtering happens in the view controller before a frame is requested.

use crate::error::{Result, RowFilterError};
use crate::filter::FilterField;
use crate::render::ui::state::{DisplayRow, ViewState};
use crate::render::ui::{ColorTheme, UIRenderer};
use ratatui::crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table},
    Frame, Terminal,
};
use std::io::{self, Stdout};

type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Column widths shared by the header, the filter row and the body.
const COLUMN_WIDTHS: [Constraint; 3] = [
    Constraint::Percentage(35),
    Constraint::Percentage(15),
    Constraint::Percentage(50),
];

/// Terminal UI implementation with ratatui backend
pub struct TerminalUI {
    terminal: Option<CrosstermTerminal>,
    theme: ColorTheme,
}

impl TerminalUI {
    pub fn new() -> Result<Self> {
        Self::with_theme(ColorTheme::default())
    }

    pub fn with_theme(theme: ColorTheme) -> Result<Self> {
        Ok(Self {
            terminal: None,
            theme,
        })
    }
}

/// Draw a complete frame: global search box, table, status line.
pub fn draw_view(frame: &mut Frame, view_state: &ViewState, theme: &ColorTheme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.size());

    let search_cursor = render_search_box(frame, chunks[0], view_state, theme);
    let table_cursor = render_table(frame, chunks[1], view_state, theme);
    render_status(frame, chunks[2], view_state, theme);

    if let Some((x, y)) = search_cursor.or(table_cursor) {
        frame.set_cursor(x, y);
    }
}

/// Text of an input, or its hint when empty.
fn input_line<'a>(text: &'a str, hint: &'a str, style: Style, theme: &ColorTheme) -> Line<'a> {
    if text.is_empty() {
        Line::from(Span::styled(hint, theme.input_hint.patch(style)))
    } else {
        Line::from(Span::styled(text, theme.input_text.patch(style)))
    }
}

/// Cursor position after `text` inside `area`, clamped to the area.
fn cursor_after(text: &str, area: Rect) -> (u16, u16) {
    let width = u16::try_from(Span::raw(text).width()).unwrap_or(u16::MAX);
    let max_x = area.x + area.width.saturating_sub(1);
    (area.x.saturating_add(width).min(max_x), area.y)
}

fn render_search_box(
    frame: &mut Frame,
    area: Rect,
    view_state: &ViewState,
    theme: &ColorTheme,
) -> Option<(u16, u16)> {
    let focused = view_state.focus == FilterField::Global;
    let border = if focused {
        theme.focused_border
    } else {
        theme.border
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Search")
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);
    let text = view_state.inputs.get(FilterField::Global);

    let hint = view_state.hints.get(FilterField::Global);
    let line = input_line(text, hint, Style::default(), theme);
    frame.render_widget(Paragraph::new(line).block(block), area);

    (focused && inner.height > 0).then(|| cursor_after(text, inner))
}

fn render_table(
    frame: &mut Frame,
    area: Rect,
    view_state: &ViewState,
    theme: &ColorTheme,
) -> Option<(u16, u16)> {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    let header_cells = Layout::horizontal(COLUMN_WIDTHS)
        .spacing(1)
        .split(sections[0]);
    for (label, cell) in view_state.labels.as_array().iter().zip(header_cells.iter()) {
        frame.render_widget(Paragraph::new(Span::styled(*label, theme.header)), *cell);
    }

    let mut cursor = None;
    let filter_cells = Layout::horizontal(COLUMN_WIDTHS)
        .spacing(1)
        .split(sections[1]);
    for (field, cell) in FilterField::COLUMNS.iter().zip(filter_cells.iter()) {
        let text = view_state.inputs.get(*field);
        let focused = view_state.focus == *field;
        let style = if focused {
            Style::default()
                .fg(theme.focused_border)
                .add_modifier(Modifier::UNDERLINED)
        } else {
            Style::default()
        };
        if focused && cell.height > 0 && cell.width > 0 {
            cursor = Some(cursor_after(text, *cell));
        }
        let line = input_line(text, view_state.hints.get(*field), style, theme);
        frame.render_widget(Paragraph::new(line), *cell);
    }

    render_body(frame, sections[2], view_state, theme);
    cursor
}

fn render_body(frame: &mut Frame, area: Rect, view_state: &ViewState, theme: &ColorTheme) {
    if let [DisplayRow::Placeholder { message, .. }] = view_state.rows.as_slice() {
        // One line across the whole body width, i.e. spanning every column.
        let line_area = Rect {
            height: area.height.min(1),
            ..area
        };
        let placeholder = Paragraph::new(Span::styled(message.as_str(), theme.no_results))
            .alignment(Alignment::Center);
        frame.render_widget(placeholder, line_area);
        return;
    }

    let rows: Vec<Row> = view_state
        .visible_rows()
        .iter()
        .map(|row| Row::new(row.cells()))
        .collect();
    let table = Table::new(rows, COLUMN_WIDTHS).column_spacing(1);
    frame.render_widget(table, area);
}

fn render_status(frame: &mut Frame, area: Rect, view_state: &ViewState, theme: &ColorTheme) {
    let status_style = Style::default().bg(theme.status_bg).fg(theme.status_fg);
    let status = Paragraph::new(view_state.format_status_line()).style(status_style);
    frame.render_widget(status, area);
}

impl UIRenderer for TerminalUI {
    fn render(&mut self, view_state: &ViewState) -> Result<()> {
        if let Some(ref mut terminal) = self.terminal {
            let theme = &self.theme;
            terminal.draw(|frame| draw_view(frame, view_state, theme))?;
        }
        Ok(())
    }

    fn initialize(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        self.terminal = Some(terminal);

        Ok(())
    }

    fn cleanup(&mut self) -> Result<()> {
        if self.terminal.is_some() {
            disable_raw_mode()?;
            execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
            self.terminal = None;
        }
        Ok(())
    }

    fn get_terminal_size(&self) -> Result<(u16, u16)> {
        ratatui::crossterm::terminal::size()
            .map_err(|e| RowFilterError::ui(format!("cannot query terminal size: {e}")))
    }
}

impl Drop for TerminalUI {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
