//! Context fields attached to log calls
//!
//! This module provides:
//! - `Field`: one immutable key/value pair
//! - `Fields`: the ordered set a logger carries and hands to its printer
//!
//! Insertion order is rendering order. Duplicate keys are kept; the text
//! printer renders each occurrence and the JSON printer emits each one in
//! order, so consumers that collapse keys see the last value.

use super::error::{LoggerError, Result};
use std::fmt;

/// A single named context value.
///
/// Values are stringified at construction, so a field never changes after
/// it has been attached to a logger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    key: String,
    value: String,
}

impl Field {
    /// Create a field, rejecting an empty key.
    ///
    /// # Example
    ///
    /// ```
    /// use agent_logger::Field;
    ///
    /// let field = Field::new("job", 42).unwrap();
    /// assert_eq!(field.key(), "job");
    /// assert_eq!(field.value(), "42");
    /// assert!(Field::new("", "x").is_err());
    /// ```
    pub fn new<K, V>(key: K, value: V) -> Result<Self>
    where
        K: Into<String>,
        V: fmt::Display,
    {
        let key = key.into();
        if key.is_empty() {
            return Err(LoggerError::EmptyFieldKey);
        }
        Ok(Self {
            key,
            value: value.to_string(),
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

/// Ordered collection of fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fields {
    fields: Vec<Field>,
}

impl Fields {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Append fields at the end, in call order. No deduplication.
    pub fn add<I>(&mut self, fields: I)
    where
        I: IntoIterator<Item = Field>,
    {
        self.fields.extend(fields);
    }

    /// Builder form of [`Fields::add`] for a single field
    pub fn with(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Field> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Value of the last field with `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .rev()
            .find(|f| f.key == key)
            .map(|f| f.value.as_str())
    }

    /// One field per key: first position, last value.
    pub fn collapsed(&self) -> Fields {
        let mut out: Vec<Field> = Vec::with_capacity(self.fields.len());
        for field in &self.fields {
            match out.iter_mut().find(|f| f.key == field.key) {
                Some(existing) => existing.value.clone_from(&field.value),
                None => out.push(field.clone()),
            }
        }
        Fields { fields: out }
    }

    /// Format fields as space-separated key=value pairs
    pub fn format_fields(&self) -> String {
        self.fields
            .iter()
            .map(Field::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl FromIterator<Field> for Fields {
    fn from_iter<T: IntoIterator<Item = Field>>(iter: T) -> Self {
        Fields {
            fields: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Fields {
    type Item = &'a Field;
    type IntoIter = std::slice::Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

impl fmt::Display for Fields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_fields())
    }
}
