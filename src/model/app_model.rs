//! Main application model with state management

use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Mutex;

use super::catalog_client::CatalogSource;
use super::drop_zone::DropZone;
use super::error::FetchError;
use super::screen::BrowseScreen;
use super::search::RequestTicket;
use super::study::Quiz;
use super::types::{ActiveSection, CatalogItem, Route, ScreenId, UiState};

const MESSAGE_TTL_SECS: u64 = 5;

/// Main application model containing all state
pub struct AppModel {
    pub catalog: Option<Arc<dyn CatalogSource>>,
    pub ui_state: Arc<Mutex<UiState>>,
    home: Arc<Mutex<BrowseScreen>>,
    categories: Arc<Mutex<BrowseScreen>>,
    drop_zone: Arc<Mutex<DropZone>>,
    pub should_quit: Arc<Mutex<bool>>,
}

impl AppModel {
    pub fn new() -> Self {
        Self {
            catalog: None,
            ui_state: Arc::new(Mutex::new(UiState::default())),
            home: Arc::new(Mutex::new(BrowseScreen::default())),
            categories: Arc::new(Mutex::new(BrowseScreen::default())),
            drop_zone: Arc::new(Mutex::new(DropZone::default())),
            should_quit: Arc::new(Mutex::new(false)),
        }
    }

    pub fn set_catalog_client(&mut self, client: Arc<dyn CatalogSource>) {
        self.catalog = Some(client);
    }

    pub async fn get_catalog_client(&self) -> Option<Arc<dyn CatalogSource>> {
        self.catalog.clone()
    }

    fn screen(&self, id: ScreenId) -> &Arc<Mutex<BrowseScreen>> {
        match id {
            ScreenId::Home => &self.home,
            ScreenId::Categories => &self.categories,
        }
    }

    pub async fn should_quit(&self) -> bool {
        *self.should_quit.lock().await
    }

    pub async fn set_should_quit(&self, quit: bool) {
        *self.should_quit.lock().await = quit;
    }

    // ========================================================================
    // Routing & focus
    // ========================================================================

    pub async fn get_ui_state(&self) -> UiState {
        self.ui_state.lock().await.clone()
    }

    /// Switch route. Returns the route that was left.
    pub async fn set_route(&self, route: Route) -> Route {
        let mut state = self.ui_state.lock().await;
        let previous = state.route;
        state.route = route;
        state.active_section = match route {
            Route::Home => ActiveSection::Search,
            _ => ActiveSection::Results,
        };
        drop(state);

        self.sync_drop_zone_focus().await;
        previous
    }

    pub async fn cycle_section_forward(&self) {
        let mut state = self.ui_state.lock().await;
        state.active_section = state.active_section.next(state.route);
        drop(state);
        self.sync_drop_zone_focus().await;
    }

    pub async fn cycle_section_backward(&self) {
        let mut state = self.ui_state.lock().await;
        state.active_section = state.active_section.prev(state.route);
        drop(state);
        self.sync_drop_zone_focus().await;
    }

    pub async fn set_active_section(&self, section: ActiveSection) {
        let mut state = self.ui_state.lock().await;
        state.active_section = section;
        drop(state);
        self.sync_drop_zone_focus().await;
    }

    async fn sync_drop_zone_focus(&self) {
        let state = self.ui_state.lock().await;
        let armed = state.route == Route::Home && state.active_section == ActiveSection::DropZone;
        drop(state);
        self.drop_zone.lock().await.armed = armed;
    }

    // ========================================================================
    // Search input
    // ========================================================================

    pub async fn update_search_input(&self, input: String) -> String {
        let mut state = self.ui_state.lock().await;
        state.search_input = input;
        state.search_input.clone()
    }

    pub async fn append_to_search(&self, c: char) -> String {
        let mut state = self.ui_state.lock().await;
        state.search_input.push(c);
        state.search_input.clone()
    }

    pub async fn append_str_to_search(&self, text: &str) -> String {
        let mut state = self.ui_state.lock().await;
        state
            .search_input
            .extend(text.chars().filter(|c| !c.is_control()));
        state.search_input.clone()
    }

    pub async fn backspace_search(&self) -> String {
        let mut state = self.ui_state.lock().await;
        state.search_input.pop();
        state.search_input.clone()
    }

    // ========================================================================
    // Errors, notices & help
    // ========================================================================

    pub async fn set_error(&self, message: String) {
        let mut state = self.ui_state.lock().await;
        state.error_message = Some(message);
        state.error_timestamp = Some(Instant::now());
    }

    pub async fn clear_error(&self) {
        let mut state = self.ui_state.lock().await;
        state.error_message = None;
        state.error_timestamp = None;
    }

    pub async fn has_error(&self) -> bool {
        self.ui_state.lock().await.error_message.is_some()
    }

    pub async fn set_notice(&self, message: String) {
        let mut state = self.ui_state.lock().await;
        state.notice = Some(message);
        state.notice_timestamp = Some(Instant::now());
    }

    pub async fn auto_clear_old_errors(&self) {
        let mut state = self.ui_state.lock().await;
        if let Some(timestamp) = state.error_timestamp {
            if timestamp.elapsed().as_secs() > MESSAGE_TTL_SECS {
                state.error_message = None;
                state.error_timestamp = None;
            }
        }
        if let Some(timestamp) = state.notice_timestamp {
            if timestamp.elapsed().as_secs() > MESSAGE_TTL_SECS {
                state.notice = None;
                state.notice_timestamp = None;
            }
        }
    }

    pub async fn show_help_popup(&self) {
        let mut state = self.ui_state.lock().await;
        state.show_help_popup = true;
    }

    pub async fn hide_help_popup(&self) {
        let mut state = self.ui_state.lock().await;
        state.show_help_popup = false;
    }

    pub async fn is_help_popup_open(&self) -> bool {
        self.ui_state.lock().await.show_help_popup
    }

    // ========================================================================
    // Browsing screens
    // ========================================================================

    pub async fn get_screen(&self, id: ScreenId) -> BrowseScreen {
        self.screen(id).lock().await.clone()
    }

    pub async fn begin_search(&self, id: ScreenId, term: &str) -> RequestTicket {
        self.screen(id).lock().await.search.begin(term)
    }

    /// Apply a fetch outcome; false when the ticket was superseded.
    pub async fn apply_search(
        &self,
        id: ScreenId,
        ticket: &RequestTicket,
        outcome: Result<Vec<CatalogItem>, FetchError>,
    ) -> bool {
        let mut screen = self.screen(id).lock().await;
        let applied = screen.search.apply(ticket, outcome);
        if applied {
            screen.cursor = 0;
        }
        applied
    }

    pub async fn clear_search(&self, id: ScreenId) {
        let mut screen = self.screen(id).lock().await;
        screen.search.clear();
        screen.cursor = 0;
    }

    pub async fn screen_move_up(&self, id: ScreenId) {
        self.screen(id).lock().await.move_up();
    }

    pub async fn screen_move_down(&self, id: ScreenId) {
        self.screen(id).lock().await.move_down();
    }

    pub async fn pick_under_cursor(&self, id: ScreenId) -> Option<CatalogItem> {
        self.screen(id).lock().await.pick_under_cursor()
    }

    pub async fn selected_item(&self, id: ScreenId) -> Option<CatalogItem> {
        self.screen(id).lock().await.selection.selected().cloned()
    }

    pub async fn show_quiz(&self, id: ScreenId, quiz: Quiz) -> bool {
        self.screen(id).lock().await.show_quiz(quiz)
    }

    // ========================================================================
    // Drop zone
    // ========================================================================

    pub async fn get_drop_zone(&self) -> DropZone {
        self.drop_zone.lock().await.clone()
    }

    pub async fn capture_dropped_files(&self, pasted: &str) -> usize {
        self.drop_zone.lock().await.capture(pasted)
    }

    pub async fn clear_dropped_files(&self) {
        self.drop_zone.lock().await.clear();
    }
}

impl Default for AppModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::search::SearchStatus;
    use crate::model::types::sample_item;

    #[tokio::test]
    async fn failed_fetch_shows_reason_and_no_results() {
        let model = AppModel::new();
        let ticket = model.begin_search(ScreenId::Categories, "subject:education").await;
        assert!(
            model
                .apply_search(ScreenId::Categories, &ticket, Err(FetchError::Http { status: 500 }))
                .await
        );

        let screen = model.get_screen(ScreenId::Categories).await;
        assert!(screen.search.results().is_empty());
        match screen.search.status() {
            SearchStatus::Failed(reason) => assert!(reason.contains("500")),
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn screens_do_not_share_state() {
        let model = AppModel::new();
        let ticket = model.begin_search(ScreenId::Home, "rust").await;
        model
            .apply_search(ScreenId::Home, &ticket, Ok(vec![sample_item("r", "Rust")]))
            .await;
        model.pick_under_cursor(ScreenId::Home).await;

        let categories = model.get_screen(ScreenId::Categories).await;
        assert!(categories.search.results().is_empty());
        assert!(categories.selection.selected().is_none());
        assert!(model.selected_item(ScreenId::Home).await.is_some());
    }

    #[tokio::test]
    async fn drop_zone_arms_only_when_focused_on_home() {
        let model = AppModel::new();
        model.set_route(Route::Home).await;
        model.set_active_section(ActiveSection::DropZone).await;
        assert!(model.get_drop_zone().await.armed);

        model.set_route(Route::Categories).await;
        assert!(!model.get_drop_zone().await.armed);
        assert_eq!(model.get_ui_state().await.active_section, ActiveSection::Results);
    }

    #[tokio::test]
    async fn rate_limited_fetch_stores_the_friendly_reason() {
        let model = AppModel::new();
        let ticket = model.begin_search(ScreenId::Home, "optics").await;
        model
            .apply_search(ScreenId::Home, &ticket, Err(FetchError::Http { status: 429 }))
            .await;

        let screen = model.get_screen(ScreenId::Home).await;
        assert!(matches!(screen.search.status(), SearchStatus::Failed(reason) if reason.contains("rate limiting")));
    }
}
