//! View controller.
//!
//! [`TableView`] owns the record set and the filter state. Every input change
//! overwrites one filter entry, recomputes the visible subsequence from scratch
//! and pushes it to a [`RowSink`].

use crate::filter::{matching_indices, FilterField, FilterState};
use crate::records::Record;

/// Receives the visible records after every recompute.
pub trait RowSink {
    /// Replace all previously shown rows with `rows`, in order.
    fn show_rows(&mut self, rows: &[&Record]);
}

/// Whether any filter entry is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Unfiltered,
    Filtered,
}

/// Owns records and filter state; keeps the visible set in sync.
#[derive(Debug)]
pub struct TableView {
    records: Vec<Record>,
    filters: FilterState,
    /// Indices into `records` of the rows currently visible.
    visible: Vec<usize>,
}

impl TableView {
    /// Create a view with every record visible.
    pub fn new(records: Vec<Record>) -> Self {
        let visible = (0..records.len()).collect();
        Self {
            records,
            filters: FilterState::new(),
            visible,
        }
    }

    /// Handle an edit of one of the column inputs, or the global one.
    pub fn on_field_input(&mut self, field: FilterField, raw_text: &str, sink: &mut dyn RowSink) {
        self.filters.set(field, raw_text.trim());
        log::debug!("filter {} set to {:?}", field, self.filters.get(field));
        self.recompute(sink);
    }

    /// Handle an edit of the global search input.
    pub fn on_global_input(&mut self, raw_text: &str, sink: &mut dyn RowSink) {
        self.on_field_input(FilterField::Global, raw_text, sink);
    }

    /// Re-run the filter over the full record set and push the result.
    pub fn recompute(&mut self, sink: &mut dyn RowSink) {
        self.visible = matching_indices(&self.records, &self.filters);
        log::debug!(
            "recomputed view: {} of {} records visible",
            self.visible.len(),
            self.records.len()
        );
        sink.show_rows(&self.visible());
    }

    /// Records currently visible, in original order.
    pub fn visible(&self) -> Vec<&Record> {
        self.visible.iter().map(|&i| &self.records[i]).collect()
    }

    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    pub fn total_count(&self) -> usize {
        self.records.len()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn filter_state(&self) -> &FilterState {
        &self.filters
    }

    pub fn mode(&self) -> ViewMode {
        if self.filters.is_empty() {
            ViewMode::Unfiltered
        } else {
            ViewMode::Filtered
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::sample_records;

    /// Remembers the last batch of rows and how many times it was redrawn.
    #[derive(Debug, Default)]
    struct CollectingSink {
        rows: Vec<Record>,
        redraws: usize,
    }

    impl RowSink for CollectingSink {
        fn show_rows(&mut self, rows: &[&Record]) {
            self.rows = rows.iter().map(|r| (*r).clone()).collect();
            self.redraws += 1;
        }
    }

    #[test]
    fn starts_unfiltered_with_all_rows() {
        let view = TableView::new(sample_records());
        assert_eq!(view.mode(), ViewMode::Unfiltered);
        assert_eq!(view.visible_count(), 20);
        assert_eq!(view.visible(), view.records().iter().collect::<Vec<_>>());
    }

    #[test]
    fn field_input_is_trimmed_and_redraws() {
        let mut view = TableView::new(sample_records());
        let mut sink = CollectingSink::default();

        view.on_field_input(FilterField::Name, "  martin  ", &mut sink);
        assert_eq!(view.filter_state().name, "martin");
        assert_eq!(view.mode(), ViewMode::Filtered);
        assert_eq!(sink.redraws, 1);
        assert_eq!(sink.rows, vec![sample_records()[0].clone()]);
        assert_eq!(view.visible_count(), 1);
    }

    #[test]
    fn clearing_returns_to_unfiltered() {
        let mut view = TableView::new(sample_records());
        let mut sink = CollectingSink::default();

        view.on_global_input("roux", &mut sink);
        assert_eq!(view.visible_count(), 1);

        view.on_global_input("   ", &mut sink);
        assert_eq!(view.mode(), ViewMode::Unfiltered);
        assert_eq!(sink.rows.len(), 20);
        assert_eq!(sink.redraws, 2);
    }

    #[test]
    fn visible_indices_track_filtered_rows() {
        let mut view = TableView::new(sample_records());
        let mut sink = CollectingSink::default();

        view.on_field_input(FilterField::Age, "40-45", &mut sink);
        let names: Vec<&str> = view.visible().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["David Bernard", "Isabelle Roux", "Olivier Marchand"]
        );
        assert_eq!(
            sink.rows.iter().map(|r| r.name.as_str()).collect::<Vec<_>>(),
            names
        );
    }

    #[test]
    fn recompute_is_idempotent() {
        let mut view = TableView::new(sample_records());
        let mut sink = CollectingSink::default();

        view.on_field_input(FilterField::Email, "ar", &mut sink);
        let first = sink.rows.clone();
        view.recompute(&mut sink);
        assert_eq!(sink.rows, first);
        assert_eq!(sink.redraws, 2);
    }

    #[test]
    fn empty_record_set_is_supported() {
        let mut view = TableView::new(Vec::new());
        let mut sink = CollectingSink::default();
        view.on_global_input("x", &mut sink);
        assert!(sink.rows.is_empty());
        assert_eq!(view.total_count(), 0);
    }
}
