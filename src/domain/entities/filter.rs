use std::collections::{BTreeMap, BTreeSet};

/// Dropdown value meaning "no constraint".
pub const ALL_OPTION_VALUE: &str = "__all__";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    Single(String),
    Multi(BTreeSet<String>),
}

/// Filter choices of one view, keyed by query parameter name.
///
/// A missing key never excludes anything. Setters remove the key instead of
/// storing an empty or "all" value, so the map only holds real constraints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    values: BTreeMap<String, FilterValue>,
}

impl FilterSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_single(&mut self, name: &str, value: &str) {
        let value = value.trim();
        if value.is_empty() || value == ALL_OPTION_VALUE {
            self.values.remove(name);
            return;
        }
        self.values
            .insert(name.to_string(), FilterValue::Single(value.to_string()));
    }

    /// Flips one checkbox of a multi-select filter.
    pub fn toggle(&mut self, name: &str, value: &str) {
        let mut set = match self.values.remove(name) {
            Some(FilterValue::Multi(set)) => set,
            _ => BTreeSet::new(),
        };
        if !set.remove(value) {
            set.insert(value.to_string());
        }
        if !set.is_empty() {
            self.values.insert(name.to_string(), FilterValue::Multi(set));
        }
    }

    pub fn clear(&mut self, name: &str) {
        self.values.remove(name);
    }

    pub fn get(&self, name: &str) -> Option<&FilterValue> {
        self.values.get(name)
    }

    pub fn single(&self, name: &str) -> Option<&str> {
        match self.values.get(name) {
            Some(FilterValue::Single(value)) => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn contains(&self, name: &str, value: &str) -> bool {
        match self.values.get(name) {
            Some(FilterValue::Single(selected)) => selected == value,
            Some(FilterValue::Multi(set)) => set.contains(value),
            None => false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Query parameters in key order. Multi-select values are comma-joined.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        self.values
            .iter()
            .map(|(name, value)| {
                let rendered = match value {
                    FilterValue::Single(value) => value.clone(),
                    FilterValue::Multi(set) => set.iter().cloned().collect::<Vec<_>>().join(","),
                };
                (name.clone(), rendered)
            })
            .collect()
    }

    /// Local predicate for rows that never went through the backend.
    ///
    /// `field` returns the record's value for a filter name, or `None` when
    /// the record has no such field (e.g. `top_n`), which does not constrain.
    pub fn admits<F>(&self, field: F) -> bool
    where
        F: Fn(&str) -> Option<String>,
    {
        self.values.iter().all(|(name, wanted)| {
            let Some(actual) = field(name) else {
                return true;
            };
            match wanted {
                FilterValue::Single(value) => actual.eq_ignore_ascii_case(value),
                FilterValue::Multi(set) => set.iter().any(|value| actual.eq_ignore_ascii_case(value)),
            }
        })
    }
}
