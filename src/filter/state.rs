//! Filter keys and the per-session filter state.

use std::fmt;

/// One of the four filter inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    Name,
    Age,
    Email,
    Global,
}

impl FilterField {
    /// Focus order used when cycling through inputs.
    pub const ALL: [FilterField; 4] = [
        FilterField::Global,
        FilterField::Name,
        FilterField::Age,
        FilterField::Email,
    ];

    /// The column filters, in table column order.
    pub const COLUMNS: [FilterField; 3] = [FilterField::Name, FilterField::Age, FilterField::Email];

    /// Stable key used in configuration and logs.
    pub fn key(self) -> &'static str {
        match self {
            FilterField::Name => "name",
            FilterField::Age => "age",
            FilterField::Email => "email",
            FilterField::Global => "global",
        }
    }

    /// Next field in focus order, wrapping around.
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous field in focus order, wrapping around.
    pub fn previous(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for FilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Current criterion for every filter key. Empty means "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub name: String,
    pub age: String,
    pub email: String,
    pub global: String,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: FilterField) -> &str {
        match field {
            FilterField::Name => &self.name,
            FilterField::Age => &self.age,
            FilterField::Email => &self.email,
            FilterField::Global => &self.global,
        }
    }

    /// Overwrite the criterion for `field`.
    pub fn set(&mut self, field: FilterField, criterion: impl Into<String>) {
        let slot = match field {
            FilterField::Name => &mut self.name,
            FilterField::Age => &mut self.age,
            FilterField::Email => &mut self.email,
            FilterField::Global => &mut self.global,
        };
        *slot = criterion.into();
    }

    /// True when no entry constrains the record set.
    pub fn is_empty(&self) -> bool {
        FilterField::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_cycles_both_ways() {
        let mut field = FilterField::Global;
        for expected in [
            FilterField::Name,
            FilterField::Age,
            FilterField::Email,
            FilterField::Global,
        ] {
            field = field.next();
            assert_eq!(field, expected);
        }
        assert_eq!(FilterField::Global.previous(), FilterField::Email);
        assert_eq!(FilterField::Name.previous(), FilterField::Global);
    }

    #[test]
    fn set_overwrites_single_entry() {
        let mut state = FilterState::new();
        assert!(state.is_empty());

        state.set(FilterField::Age, "30");
        state.set(FilterField::Age, "25-35");
        assert_eq!(state.get(FilterField::Age), "25-35");
        assert_eq!(state.get(FilterField::Name), "");
        assert!(!state.is_empty());

        state.set(FilterField::Age, "");
        assert!(state.is_empty());
    }

    #[test]
    fn keys_are_stable() {
        assert_eq!(FilterField::Global.to_string(), "global");
        assert_eq!(FilterField::Email.key(), "email");
    }
}
