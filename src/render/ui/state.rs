//! UI state management structures
//!
//! `ViewState` is the snapshot the renderer draws from: the display rows produced by
//! the last recompute, the text in each filter input, focus, and scroll position.

use crate::config::{ColumnLabels, InputHints};
use crate::filter::{FilterField, FilterState};
use crate::records::Record;
use crate::view::RowSink;

/// Number of table columns.
pub const COLUMN_COUNT: usize = 3;

/// Screen lines used by everything except the table body: the global search box (3),
/// the table border (2), header and filter rows (2), and the status line (1).
const CHROME_LINES: u16 = 8;

/// One line of the table body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayRow {
    Record {
        name: String,
        age: String,
        email: String,
    },
    /// Single centred cell spanning `span` columns.
    Placeholder { message: String, span: usize },
}

impl DisplayRow {
    pub fn cells(&self) -> Vec<&str> {
        match self {
            DisplayRow::Record { name, age, email } => {
                vec![name.as_str(), age.as_str(), email.as_str()]
            }
            DisplayRow::Placeholder { message, .. } => vec![message.as_str()],
        }
    }
}

/// Turn the visible records into body rows. An empty sequence becomes exactly one
/// placeholder row spanning every column.
pub fn build_rows(records: &[&Record], placeholder: &str) -> Vec<DisplayRow> {
    if records.is_empty() {
        return vec![DisplayRow::Placeholder {
            message: placeholder.to_string(),
            span: COLUMN_COUNT,
        }];
    }

    records
        .iter()
        .map(|r| DisplayRow::Record {
            name: r.name.clone(),
            age: r.age.to_string(),
            email: r.email.clone(),
        })
        .collect()
}

/// Viewport state for rendering
#[derive(Debug)]
pub struct ViewState {
    /// Body rows from the last recompute
    pub rows: Vec<DisplayRow>,

    /// Number of records behind `rows` (zero when the placeholder is shown)
    pub shown: usize,

    /// Size of the full record set
    pub total: usize,

    /// Raw text of each filter input, as typed
    pub inputs: FilterState,

    /// Input that currently has keyboard focus
    pub focus: FilterField,

    /// Index of the first body row in view
    pub scroll_offset: usize,

    pub labels: ColumnLabels,
    /// Hint drawn inside each empty input
    pub hints: InputHints,
    pub placeholder: String,

    pub status_line: StatusLine,

    /// Viewport dimensions
    pub viewport_width: u16,
    pub viewport_height: u16,
}

impl ViewState {
    pub fn new(
        total: usize,
        labels: ColumnLabels,
        placeholder: impl Into<String>,
        viewport_width: u16,
        viewport_height: u16,
    ) -> Self {
        Self {
            rows: Vec::new(),
            shown: 0,
            total,
            inputs: FilterState::new(),
            focus: FilterField::Global,
            scroll_offset: 0,
            labels,
            hints: InputHints::default(),
            placeholder: placeholder.into(),
            status_line: StatusLine::new(),
            viewport_width,
            viewport_height,
        }
    }

    /// Body rows that fit on one screen.
    pub fn lines_per_page(&self) -> usize {
        usize::from(self.viewport_height.saturating_sub(CHROME_LINES)).max(1)
    }

    /// Largest useful scroll offset for the current rows.
    pub fn max_scroll(&self) -> usize {
        self.rows.len().saturating_sub(self.lines_per_page())
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll_offset = self
            .scroll_offset
            .saturating_add(lines)
            .min(self.max_scroll());
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
    }

    pub fn scroll_to_start(&mut self) {
        self.scroll_offset = 0;
    }

    pub fn scroll_to_end(&mut self) {
        self.scroll_offset = self.max_scroll();
    }

    /// Rows currently inside the viewport.
    pub fn visible_rows(&self) -> &[DisplayRow] {
        let start = self.scroll_offset.min(self.rows.len());
        let end = (start + self.lines_per_page()).min(self.rows.len());
        &self.rows[start..end]
    }

    /// Record the raw text of an input and move focus to it.
    pub fn set_input(&mut self, field: FilterField, text: &str) {
        self.inputs.set(field, text);
        self.focus = field;
    }

    /// Update terminal dimensions. Returns true if they actually changed.
    pub fn update_terminal_size(&mut self, width: u16, height: u16) -> bool {
        let changed = self.viewport_width != width || self.viewport_height != height;

        if changed {
            self.viewport_width = width;
            self.viewport_height = height;
            self.scroll_offset = self.scroll_offset.min(self.max_scroll());
        }

        changed
    }

    pub fn format_status_line(&self) -> String {
        let active: Vec<&str> = FilterField::ALL
            .iter()
            .filter(|f| !self.inputs.get(**f).trim().is_empty())
            .map(|f| f.key())
            .collect();
        self.status_line
            .format_status_line(self.shown, self.total, &active)
    }
}

impl RowSink for ViewState {
    fn show_rows(&mut self, rows: &[&Record]) {
        self.rows = build_rows(rows, &self.placeholder);
        self.shown = rows.len();
        self.scroll_offset = self.scroll_offset.min(self.max_scroll());
    }
}

/// Status line information
#[derive(Debug, Clone, Default)]
pub struct StatusLine {
    pub message: Option<String>,
}

impl StatusLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_message(&mut self, message: String) {
        self.message = Some(message);
    }

    /// `"<shown>/<total> rows"`, then the active filter keys and any message.
    pub fn format_status_line(&self, shown: usize, total: usize, active: &[&str]) -> String {
        let mut parts = vec![format!("{}/{} rows", shown, total)];
        if !active.is_empty() {
            parts.push(format!("filters: {}", active.join(", ")));
        }
        if let Some(ref message) = self.message {
            parts.push(message.clone());
        }
        parts.join(" | ")
    }
}
