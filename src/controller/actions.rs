//! Selection, study triggers, external links and dropped files

use crate::model::{CatalogItem, ScreenId};
use super::AppController;

/// Outbound links of a selected item
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkKind {
    Preview,
    Buy,
    Info,
    Viewer,
}

impl LinkKind {
    pub fn label(self) -> &'static str {
        match self {
            LinkKind::Preview => "Preview Book",
            LinkKind::Buy => "Buy Book",
            LinkKind::Info => "More Info",
            LinkKind::Viewer => "Embedded preview",
        }
    }

    pub fn url_for(self, item: &CatalogItem) -> Option<String> {
        match self {
            LinkKind::Preview => item.preview_link.clone(),
            LinkKind::Buy => item.buy_link.clone(),
            LinkKind::Info => item.info_link.clone(),
            LinkKind::Viewer => Some(item.embed_url()),
        }
    }
}

impl AppController {
    pub async fn pick_item(&self, screen: ScreenId) {
        let model = self.model.lock().await;
        if let Some(item) = model.pick_under_cursor(screen).await {
            tracing::info!(?screen, id = %item.id, "Book selected");
        }
    }

    pub async fn show_quiz(&self, screen: ScreenId) {
        let model = self.model.lock().await;
        let Some(item) = model.selected_item(screen).await else {
            return;
        };
        tracing::info!(?screen, title = %item.title, "Quiz creation triggered");
        let quiz = self.quiz_generator.generate(&item);
        model.show_quiz(screen, quiz).await;
    }

    pub async fn create_flashcards(&self, screen: ScreenId) {
        let model = self.model.lock().await;
        let Some(item) = model.selected_item(screen).await else {
            return;
        };
        tracing::info!(?screen, title = %item.title, "Flashcard creation triggered");

        match self.flashcard_generator.generate(&item) {
            Ok(cards) => {
                model
                    .set_notice(format!("Created {} flashcards for {}", cards.len(), item.display_title()))
                    .await;
            }
            Err(e) => {
                tracing::debug!(error = %e, "Flashcard generator unavailable");
                model
                    .set_notice(format!("Flashcard creation triggered for {} ({})", item.display_title(), e))
                    .await;
            }
        }
    }

    /// Resolve a link of the selected item, without opening it.
    pub async fn selected_link(&self, screen: ScreenId, kind: LinkKind) -> Option<String> {
        let model = self.model.lock().await;
        let item = model.selected_item(screen).await?;
        kind.url_for(&item)
    }

    pub async fn open_link(&self, screen: ScreenId, kind: LinkKind) {
        let model = self.model.lock().await;
        if model.selected_item(screen).await.is_none() {
            return;
        }
        drop(model);

        let Some(url) = self.selected_link(screen, kind).await else {
            let model = self.model.lock().await;
            model.set_notice(format!("No {} link for this book", kind.label())).await;
            return;
        };

        tracing::debug!(url = %url, link = ?kind, "Opening link in browser");
        if let Err(e) = open::that_detached(&url) {
            tracing::error!(url = %url, error = %e, "Failed to open browser");
            let model = self.model.lock().await;
            model.set_error(format!("Could not open {}: {}", kind.label(), e)).await;
        }
    }

    pub async fn drop_files(&self, pasted: &str) {
        let model = self.model.lock().await;
        let count = model.capture_dropped_files(pasted).await;
        tracing::info!(count, "Files dropped");
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use tokio::sync::Mutex;

    use super::*;
    use crate::config::Settings;
    use crate::model::{
        sample_item, AppModel, Flashcard, FlashcardGenerator, PlaceholderQuiz, StudyError,
    };

    struct FixedCards;

    impl FlashcardGenerator for FixedCards {
        fn generate(&self, _item: &CatalogItem) -> Result<Vec<Flashcard>, StudyError> {
            Ok(vec![Flashcard {
                front: "Q".to_string(),
                back: "A".to_string(),
            }])
        }
    }

    async fn controller_with_results(items: Vec<CatalogItem>) -> AppController {
        let model = AppModel::new();
        let ticket = model.begin_search(ScreenId::Categories, "subject:education").await;
        model.apply_search(ScreenId::Categories, &ticket, Ok(items)).await;
        AppController::new(Arc::new(Mutex::new(model)), Arc::new(Settings::default()))
    }

    #[tokio::test]
    async fn quiz_shows_only_after_pick() {
        let controller = controller_with_results(vec![sample_item("a", "Algebra")]).await;

        controller.show_quiz(ScreenId::Categories).await;
        let screen = controller.model.lock().await.get_screen(ScreenId::Categories).await;
        assert!(!screen.selection.quiz_visible());

        controller.pick_item(ScreenId::Categories).await;
        controller.show_quiz(ScreenId::Categories).await;
        let screen = controller.model.lock().await.get_screen(ScreenId::Categories).await;
        assert!(screen.selection.quiz_visible());
        assert_eq!(screen.visible_quiz().unwrap().title, "Quiz for Algebra");
    }

    #[tokio::test]
    async fn buy_link_absent_resolves_to_none() {
        let controller = controller_with_results(vec![sample_item("a", "Algebra")]).await;
        assert_eq!(controller.selected_link(ScreenId::Categories, LinkKind::Buy).await, None);

        controller.pick_item(ScreenId::Categories).await;
        assert_eq!(controller.selected_link(ScreenId::Categories, LinkKind::Buy).await, None);
        assert_eq!(
            controller.selected_link(ScreenId::Categories, LinkKind::Viewer).await.as_deref(),
            Some("https://books.google.com/books?id=a&lpg=PP1&pg=PP1&output=embed")
        );
    }

    #[tokio::test]
    async fn flashcard_trigger_leaves_a_notice() {
        let controller = controller_with_results(vec![sample_item("b", "Biology")]).await;
        controller.pick_item(ScreenId::Categories).await;
        controller.create_flashcards(ScreenId::Categories).await;

        let notice = controller.model.lock().await.get_ui_state().await.notice;
        assert!(notice.unwrap().contains("Flashcard creation triggered for Biology"));

        let controller = controller.with_generators(Arc::new(PlaceholderQuiz), Arc::new(FixedCards));
        controller.create_flashcards(ScreenId::Categories).await;
        let notice = controller.model.lock().await.get_ui_state().await.notice;
        assert_eq!(notice.as_deref(), Some("Created 1 flashcards for Biology"));
    }

    #[tokio::test]
    async fn dropped_paths_are_captured() {
        let controller = controller_with_results(vec![]).await;
        controller.drop_files("'/tmp/week 1.pdf' /tmp/week2.pdf").await;
        let zone = controller.model.lock().await.get_drop_zone().await;
        assert_eq!(zone.files.len(), 2);
    }
}
