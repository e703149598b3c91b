//! Per-route browsing screen: search lifecycle, list cursor and selection

use super::search::SearchState;
use super::selection::SelectionState;
use super::study::Quiz;
use super::types::CatalogItem;

#[derive(Clone, Debug, Default)]
pub struct BrowseScreen {
    pub search: SearchState,
    pub selection: SelectionState,
    pub cursor: usize,
    /// Quiz handed back by the generator for the current selection
    pub quiz: Option<Quiz>,
}

impl BrowseScreen {
    pub fn move_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    pub fn move_down(&mut self) {
        if self.cursor < self.search.results().len().saturating_sub(1) {
            self.cursor += 1;
        }
    }

    pub fn item_under_cursor(&self) -> Option<&CatalogItem> {
        self.search.results().get(self.cursor)
    }

    /// Pick the item under the cursor, resetting any quiz.
    pub fn pick_under_cursor(&mut self) -> Option<CatalogItem> {
        let item = self.item_under_cursor()?.clone();
        self.selection.pick(item.clone());
        self.quiz = None;
        Some(item)
    }

    pub fn show_quiz(&mut self, quiz: Quiz) -> bool {
        if self.selection.show_quiz() {
            self.quiz = Some(quiz);
            true
        } else {
            false
        }
    }

    /// Quiz to render, only while the selection has it visible
    pub fn visible_quiz(&self) -> Option<&Quiz> {
        if self.selection.quiz_visible() {
            self.quiz.as_ref()
        } else {
            None
        }
    }
}
