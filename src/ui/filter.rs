//! Client-side list filtering
//!
//! A list screen keeps a `ListFilter` next to its fetched records. The visible
//! list is every record that satisfies all active predicates:
//! - search text: case-insensitive substring of any searchable field
//! - one exact-match selection per facet (status, city, ...)
//!
//! An empty search, an empty selection and the `ALL` sentinel are inactive.

use std::collections::{BTreeMap, BTreeSet};

/// Dropdown value meaning "no filter"
pub const ALL: &str = "ALL";

/// Dropdown dimensions a record can be filtered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Facet {
    Status,
    Category,
    City,
    Role,
    Verification,
}

/// Records that can be shown in a filtered list
pub trait Filterable {
    /// Fields the search box looks at.
    fn search_fields(&self) -> Vec<&str>;

    /// Value for a dropdown facet, `None` when the record has none.
    fn facet(&self, facet: Facet) -> Option<&str>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilter {
    search: String,
    selections: BTreeMap<Facet, String>,
}

impl ListFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    /// Select a dropdown value. `ALL` or blank clears the facet.
    pub fn select(&mut self, facet: Facet, value: impl Into<String>) {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(ALL) {
            self.selections.remove(&facet);
        } else {
            self.selections.insert(facet, trimmed.to_string());
        }
    }

    /// Current selection for a facet, `ALL` when inactive.
    pub fn selection(&self, facet: Facet) -> &str {
        self.selections.get(&facet).map(String::as_str).unwrap_or(ALL)
    }

    pub fn clear(&mut self, facet: Facet) {
        self.selections.remove(&facet);
    }

    pub fn reset(&mut self) {
        self.search.clear();
        self.selections.clear();
    }

    pub fn is_active(&self) -> bool {
        !self.search.trim().is_empty() || !self.selections.is_empty()
    }

    pub fn matches<T: Filterable>(&self, item: &T) -> bool {
        let needle = self.search.trim().to_lowercase();
        if !needle.is_empty()
            && !item
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        {
            return false;
        }

        self.selections.iter().all(|(facet, wanted)| {
            item.facet(*facet)
                .map_or(false, |value| value.trim().eq_ignore_ascii_case(wanted))
        })
    }

    /// Records passing every active predicate, in their original order.
    pub fn apply<'a, T: Filterable>(&self, items: &'a [T]) -> Vec<&'a T> {
        items.iter().filter(|item| self.matches(*item)).collect()
    }
}

/// Distinct values of a facet, sorted, for populating a dropdown.
pub fn facet_options<T: Filterable>(items: &[T], facet: Facet) -> Vec<String> {
    items
        .iter()
        .filter_map(|item| item.facet(facet))
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
