//! Field-to-message mapping shown next to the form inputs.

#[cfg(test)]
#[path = "errors_test.rs"]
mod errors_test;

use std::collections::BTreeMap;

use crate::form::schema::{Field, Violation};

/// Per-field error messages for one failed validation attempt.
///
/// Rebuilt wholesale on every attempt; there is no partial update path, so a
/// later valid attempt can never leave stale messages behind.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    by_field: BTreeMap<Field, String>,
}

impl FieldErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a mapping from accumulated violations. A later violation for the
    /// same field overwrites an earlier one.
    #[must_use]
    pub fn from_violations(violations: &[Violation]) -> Self {
        let mut by_field = BTreeMap::new();
        for violation in violations {
            by_field.insert(violation.field, violation.message.to_owned());
        }
        Self { by_field }
    }

    #[must_use]
    pub fn message_for(&self, field: Field) -> Option<&str> {
        self.by_field.get(&field).map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_field.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_field.len()
    }

    /// Drop every message. Safe to call repeatedly.
    pub fn clear(&mut self) {
        self.by_field.clear();
    }
}
