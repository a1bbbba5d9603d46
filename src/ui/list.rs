//! Fetched-list state shared by every list screen

use std::future::Future;

use super::filter::{facet_options, Facet, Filterable, ListFilter};
use super::toast::Toaster;
use crate::error::ClientResult;

#[derive(Debug, Clone)]
pub struct ListState<T> {
    pub items: Vec<T>,
    pub filter: ListFilter,
    pub is_loading: bool,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            filter: ListFilter::default(),
            is_loading: false,
        }
    }
}

impl<T> ListState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `fetch` and store its rows. On failure the previous rows are kept
    /// and an error toast is shown. `is_loading` is always cleared.
    pub async fn load<F>(&mut self, fetch: F, toaster: &Toaster, what: &str) -> bool
    where
        F: Future<Output = ClientResult<Vec<T>>>,
    {
        self.is_loading = true;

        let loaded = match fetch.await {
            Ok(items) => {
                tracing::debug!(what = what, count = items.len(), "List loaded");
                self.items = items;
                true
            }
            Err(e) => {
                tracing::warn!(what = what, error = %e, "Failed to load list");
                toaster.client_error(&e);
                false
            }
        };

        self.is_loading = false;
        loaded
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: Filterable> ListState<T> {
    /// Rows passing the current filter.
    pub fn visible(&self) -> Vec<&T> {
        self.filter.apply(&self.items)
    }

    /// Dropdown options for a facet.
    pub fn options(&self, facet: Facet) -> Vec<String> {
        facet_options(&self.items, facet)
    }
}
