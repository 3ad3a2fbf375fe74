//! Selection index into a loaded collection.
//!
//! The index is checked against the collection length whenever it is
//! changed, so a selection always resolves to an element or to nothing.

use serde::Serialize;
use tracing::debug;

/// Currently selected position within a section's collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Selection {
    index: Option<usize>,
}

impl Default for Selection {
    fn default() -> Self {
        Self { index: Some(0) }
    }
}

impl Selection {
    /// Select `index` in a collection of `len` items.
    ///
    /// An out-of-range index clears the selection. Returns whether the
    /// index was accepted.
    pub fn select(&mut self, index: usize, len: usize) -> bool {
        if index < len {
            self.index = Some(index);
            true
        } else {
            debug!(index, len, "selection out of range, cleared");
            self.index = None;
            false
        }
    }

    /// Advance to the next item, wrapping around. No-op when `len == 0`.
    pub fn select_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.index = Some(match self.resolve(len) {
            Some(i) => (i + 1) % len,
            None => 0,
        });
    }

    /// The selected index, if it addresses an element of a `len`-item collection.
    pub fn resolve(&self, len: usize) -> Option<usize> {
        self.index.filter(|i| *i < len)
    }

    /// The raw stored index.
    pub fn index(&self) -> Option<usize> {
        self.index
    }
}
