/// Case-insensitive substring search over a view's designated fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    raw: String,
    needle: String,
}

impl SearchQuery {
    pub fn new(term: &str) -> Self {
        let needle = if term.trim().is_empty() {
            String::new()
        } else {
            term.to_lowercase()
        };
        Self {
            raw: term.to_string(),
            needle,
        }
    }

    /// Text as typed, used to keep the input box in sync.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Empty or whitespace-only terms match everything. Any other term is
    /// matched as typed, surrounding spaces included.
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    pub fn matches_field(&self, value: &str) -> bool {
        self.is_empty() || value.to_lowercase().contains(&self.needle)
    }

    /// True when ANY of the fields contains the term.
    pub fn matches_any<I, S>(&self, fields: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if self.is_empty() {
            return true;
        }
        fields
            .into_iter()
            .any(|field| self.matches_field(field.as_ref()))
    }
}
