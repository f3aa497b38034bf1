//! The record model: one tracked entity (a vehicle or a person) as an
//! ordered field-name → value mapping.
//!
//! Identity is positional (row index in the table); there is no required
//! unique key. Rows carry a handful of fields, so lookup is a linear scan
//! over an insertion-ordered list rather than a map.

use serde::{Deserialize, Serialize};

/// A single named field on a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldEntry {
    pub name: String,
    pub value: String,
}

/// One tracked entity: an ordered mapping from field name to string value.
///
/// A field that is absent from the list simply has no data; empty-string
/// values are kept verbatim (whether they parse as anything is the
/// consumer's concern).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    fields: Vec<FieldEntry>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record from `(name, value)` pairs, preserving order.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(name, value)| FieldEntry {
                    name: name.into(),
                    value: value.into(),
                })
                .collect(),
        }
    }

    /// Set a field, replacing an existing value or appending a new entry.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|f| f.name == name) {
            Some(entry) => entry.value = value,
            None => self.fields.push(FieldEntry { name, value }),
        }
    }

    /// Look up a field value by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f.name == name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|f| (f.name.as_str(), f.value.as_str()))
    }
}
