//! Filter engine.
//!
//! Pure predicates deciding whether a [`Record`] satisfies a [`FilterState`].
//! Column filters are conjunctive; the global filter is one more conjunct that
//! is itself a disjunction over the raw field values.

pub mod criterion;
pub mod state;

pub use criterion::AgeCriterion;
pub use state::{FilterField, FilterState};

use crate::records::Record;

/// Case-insensitive substring match. An empty criterion always matches.
pub fn text_matches(value: &str, criterion: &str) -> bool {
    if criterion.is_empty() {
        return true;
    }
    value.to_lowercase().contains(&criterion.to_lowercase())
}

/// Age match: exact integer, inclusive range, or substring fallback.
pub fn age_matches(age: u32, criterion: &str) -> bool {
    AgeCriterion::parse(criterion).matches(age)
}

/// Global match against name, age and email, any of which may contain the
/// criterion.
pub fn global_matches(record: &Record, criterion: &str) -> bool {
    if criterion.is_empty() {
        return true;
    }
    let term = criterion.to_lowercase();
    record.name.to_lowercase().contains(&term)
        || record.age.to_string().contains(&term)
        || record.email.to_lowercase().contains(&term)
}

/// True when `record` satisfies every active criterion in `state`.
pub fn matches(record: &Record, state: &FilterState) -> bool {
    text_matches(&record.name, state.name.trim())
        && age_matches(record.age, &state.age)
        && text_matches(&record.email, state.email.trim())
        && global_matches(record, state.global.trim())
}

/// Indices of the matching records, in original order.
pub fn matching_indices(records: &[Record], state: &FilterState) -> Vec<usize> {
    // Classify the age criterion once per pass rather than once per record.
    let age = AgeCriterion::parse(&state.age);
    let name = state.name.trim();
    let email = state.email.trim();
    let global = state.global.trim();

    records
        .iter()
        .enumerate()
        .filter(|(_, r)| {
            text_matches(&r.name, name)
                && age.matches(r.age)
                && text_matches(&r.email, email)
                && global_matches(r, global)
        })
        .map(|(idx, _)| idx)
        .collect()
}

/// Stable filter: matching records in their original order.
pub fn filter_records<'a>(records: &'a [Record], state: &FilterState) -> Vec<&'a Record> {
    matching_indices(records, state)
        .into_iter()
        .map(|idx| &records[idx])
        .collect()
}
