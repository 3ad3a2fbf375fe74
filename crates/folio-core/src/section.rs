//! Local state of one portfolio section.
//!
//! A section starts in the loading state, settles exactly once with either
//! the live collection or a fallback plus an error message, and from then
//! on only its selection changes.

use serde::Serialize;
use tracing::debug;

use crate::selection::Selection;

/// Result of a section's single load attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome<T> {
    /// The endpoint answered with a valid collection.
    Live(Vec<T>),
    /// The load failed; bundled data stands in.
    Fallback {
        /// Bundled replacement collection.
        items: Vec<T>,
        /// Display message describing the failure.
        error: String,
    },
}

impl<T> LoadOutcome<T> {
    /// Whether the live collection was used.
    pub fn is_live(&self) -> bool {
        matches!(self, Self::Live(_))
    }

    /// The failure message, if the fallback was used.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Live(_) => None,
            Self::Fallback { error, .. } => Some(error),
        }
    }

    /// The collection, whichever way it was obtained.
    pub fn items(&self) -> &[T] {
        match self {
            Self::Live(items) | Self::Fallback { items, .. } => items,
        }
    }
}

/// Observable state of a section: loading flag, error, items, selection.
#[derive(Debug, Clone, Serialize)]
pub struct SectionState<T> {
    loading: bool,
    error: Option<String>,
    items: Vec<T>,
    selection: Selection,
}

impl<T> Default for SectionState<T> {
    fn default() -> Self {
        Self::loading()
    }
}

impl<T> SectionState<T> {
    /// A section whose load has not settled yet.
    pub fn loading() -> Self {
        Self {
            loading: true,
            error: None,
            items: Vec::new(),
            selection: Selection::default(),
        }
    }

    /// A section backed directly by static data, with nothing to load.
    pub fn ready(items: Vec<T>) -> Self {
        Self {
            loading: false,
            error: None,
            items,
            selection: Selection::default(),
        }
    }

    /// Apply the load outcome. Only the first call has an effect.
    ///
    /// Returns whether the state changed.
    pub fn settle(&mut self, outcome: LoadOutcome<T>) -> bool {
        if !self.loading {
            debug!("section already settled, ignoring outcome");
            return false;
        }
        match outcome {
            LoadOutcome::Live(items) => {
                self.items = items;
                self.error = None;
            }
            LoadOutcome::Fallback { items, error } => {
                self.items = items;
                self.error = Some(error);
            }
        }
        self.loading = false;
        true
    }

    /// Select the item at `index`; out-of-range clears the selection.
    pub fn select(&mut self, index: usize) -> bool {
        self.selection.select(index, self.items.len())
    }

    /// Advance the selection to the next item, wrapping around.
    pub fn select_next(&mut self) {
        self.selection.select_next(self.items.len());
    }

    /// Whether the load is still in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Failure message recorded by the load, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Loaded collection (live or fallback).
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Selected index, if it addresses an element.
    pub fn selected_index(&self) -> Option<usize> {
        self.selection.resolve(self.items.len())
    }

    /// Selected element, if any.
    pub fn selected_item(&self) -> Option<&T> {
        self.selected_index().and_then(|i| self.items.get(i))
    }
}
