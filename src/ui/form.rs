//! Form validation helpers
//!
//! Validation runs before any request is sent. Errors are keyed by the
//! form's field name so a renderer can show them inline.

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

use crate::domain::TimeWindow;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    fields: BTreeMap<&'static str, String>,
}

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error. The first error per field wins.
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.fields.entry(field).or_insert_with(|| message.into());
    }

    /// Flag a blank text field as required.
    pub fn require(&mut self, field: &'static str, label: &str, value: &str) {
        if value.trim().is_empty() {
            self.add(field, format!("{} is required", label));
        }
    }

    /// Flag a missing optional value as required.
    pub fn require_some<T>(&mut self, field: &'static str, label: &str, value: &Option<T>) {
        if value.is_none() {
            self.add(field, format!("{} is required", label));
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn has(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn clear(&mut self) {
        self.fields.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.fields.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

/// Check a proposed slot against the organization's preferred window.
///
/// Valid iff `start >= window.start`, `end <= window.end` and `start < end`.
/// Errors land on `start_field` / `end_field`.
pub fn validate_slot(
    errors: &mut FormErrors,
    window: &TimeWindow,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    start_field: &'static str,
    end_field: &'static str,
) {
    if start >= end {
        errors.add(end_field, "End must be after start");
    }
    if start < window.start || start > window.end {
        errors.add(
            start_field,
            format!(
                "Start must be within the preferred window ({})",
                format_window(window)
            ),
        );
    }
    if end > window.end || end < window.start {
        errors.add(
            end_field,
            format!(
                "End must be within the preferred window ({})",
                format_window(window)
            ),
        );
    }
}

pub fn format_window(window: &TimeWindow) -> String {
    format!(
        "{} to {}",
        window.start.format("%d %b %Y %H:%M"),
        window.end.format("%d %b %Y %H:%M")
    )
}
