//! Mapping from section state to exactly one visual state.

use crate::section::SectionState;

/// What a section shows for a given state.
///
/// The variants are mutually exclusive and checked in declaration order.
#[derive(Debug, PartialEq, Eq)]
pub enum SectionView<'a, T> {
    /// Load in flight: skeleton placeholder, no interaction.
    Loading,
    /// Load failed and nothing to show: error panel with a reload action.
    Failed {
        /// Failure message.
        message: &'a str,
    },
    /// Load settled with an empty collection and no error.
    Empty,
    /// Grid of cards plus, when the selection resolves, a detail panel.
    Populated {
        /// Every item, in order.
        items: &'a [T],
        /// Index of the highlighted card.
        selected: Option<usize>,
        /// Item shown in the detail panel.
        detail: Option<&'a T>,
        /// Non-blocking banner text when fallback data is shown.
        warning: Option<&'a str>,
    },
}

impl<'a, T> SectionView<'a, T> {
    /// Evaluate the view for `state`.
    pub fn of(state: &'a SectionState<T>) -> Self {
        if state.is_loading() {
            return Self::Loading;
        }
        match (state.error(), state.items().is_empty()) {
            (Some(message), true) => Self::Failed { message },
            (None, true) => Self::Empty,
            (warning, false) => Self::Populated {
                items: state.items(),
                selected: state.selected_index(),
                detail: state.selected_item(),
                warning,
            },
        }
    }
}
