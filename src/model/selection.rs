//! Selected item and quiz visibility

use super::types::CatalogItem;

/// Selection state machine of a browsing screen.
///
/// Nothing leads back to `NoSelection`; once an item has been picked, only
/// another pick changes it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SelectionState {
    #[default]
    NoSelection,
    Selected {
        item: CatalogItem,
        quiz_visible: bool,
    },
}

impl SelectionState {
    /// Pick an item. Re-picking the current item still counts as a fresh pick.
    pub fn pick(&mut self, item: CatalogItem) {
        *self = SelectionState::Selected {
            item,
            quiz_visible: false,
        };
    }

    /// Reveal the quiz panel. Returns false when nothing is selected.
    pub fn show_quiz(&mut self) -> bool {
        match self {
            SelectionState::NoSelection => false,
            SelectionState::Selected { quiz_visible, .. } => {
                *quiz_visible = true;
                true
            }
        }
    }

    pub fn selected(&self) -> Option<&CatalogItem> {
        match self {
            SelectionState::NoSelection => None,
            SelectionState::Selected { item, .. } => Some(item),
        }
    }

    pub fn quiz_visible(&self) -> bool {
        matches!(self, SelectionState::Selected { quiz_visible: true, .. })
    }
}
