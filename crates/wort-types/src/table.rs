use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Row keys every declension table must carry.
pub const CASE_ROWS: [&str; 4] = ["Nominative", "Accusative", "Dative", "Genitive"];

/// Row keys every conjugation table must carry.
pub const PERSON_ROWS: [&str; 6] = ["ich", "du", "er", "wir", "ihr", "sie"];

/// One declension or conjugation table, keyed by case name or pronoun.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InflectionTable {
    /// The heading the table was found under, e.g. "Singular" or "Present"
    pub title: String,
    /// Rows in page order
    pub rows: IndexMap<String, String>,
}

impl InflectionTable {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            rows: IndexMap::new(),
        }
    }

    pub fn get(&self, row: &str) -> Option<&str> {
        self.rows.get(row).map(String::as_str)
    }

    /// First key from `required` that the table lacks
    pub fn missing_row<'a>(&self, required: &[&'a str]) -> Option<&'a str> {
        required.iter().copied().find(|row| !self.rows.contains_key(*row))
    }
}
