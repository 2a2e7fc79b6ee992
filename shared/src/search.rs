//! Search box state.
//!
//! The control never talks to the API; it only rewrites the navigation
//! query, which the list view observes.

use crate::query::{QueryParams, PAGE_PARAM, SEARCH_PARAM};

/// Text currently typed into the search box.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchControl {
    input: String,
}

impl SearchControl {
    /// Start from the `search` term already in the query, if any.
    pub fn from_params(params: &QueryParams) -> Self {
        Self {
            input: params.get(SEARCH_PARAM).unwrap_or_default().to_string(),
        }
    }

    /// Current input text.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Replace the input text.
    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    /// Whether a clear affordance should be offered.
    pub fn can_clear(&self) -> bool {
        !self.input.is_empty()
    }

    /// Query to navigate to on submit.
    ///
    /// Sets `search` to the trimmed input, or removes it when blank, and
    /// always drops `page` so results restart at the first page.
    pub fn submit(&self, current: &QueryParams) -> QueryParams {
        let mut next = current.clone();
        let term = self.input.trim();
        if term.is_empty() {
            next.remove(SEARCH_PARAM);
        } else {
            next.set(SEARCH_PARAM, term);
        }
        next.remove(PAGE_PARAM);
        next
    }

    /// Empty the input and return the query without `search` and `page`.
    pub fn clear(&mut self, current: &QueryParams) -> QueryParams {
        self.input.clear();
        let mut next = current.clone();
        next.remove(SEARCH_PARAM);
        next.remove(PAGE_PARAM);
        next
    }
}
