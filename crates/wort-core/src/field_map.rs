use indexmap::IndexMap;

use crate::error::ExtractError;

/// Fields captured by one template match, in template order.
///
/// A field the template defines but whose optional clause did not match is
/// stored as `None`. A clause that matched a literal `"-"` keeps the hyphen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMap {
    fields: IndexMap<String, Option<String>>,
}

impl FieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: Option<String>) {
        self.fields.insert(name.into(), value);
    }

    /// Value of a matched field; `None` when absent or not defined
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(|value| value.as_deref())
    }

    /// Whether the template defines `name` at all
    pub fn defines(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn is_present(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Value of a field the template guarantees on every match.
    pub fn require(&self, name: &str) -> Result<&str, ExtractError> {
        self.get(name)
            .ok_or_else(|| ExtractError::MissingField(name.to_string()))
    }

    pub fn optional(&self, name: &str) -> Option<String> {
        self.get(name).map(str::to_string)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_deref()))
    }
}
