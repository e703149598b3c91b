//! Search dispatch: debounced input, fetch lifecycle and route changes

use crate::model::{Route, ScreenId, SearchStatus};
use super::AppController;

impl AppController {
    /// React to an edit of the home search input.
    ///
    /// Blank input clears results at once; anything else is sent after the
    /// quiet period, replacing whatever was still waiting.
    pub async fn on_search_input_changed(&self, input: &str) {
        let term = input.trim();
        if term.is_empty() {
            self.debouncer.lock().await.cancel();
            let model = self.model.lock().await;
            model.clear_search(ScreenId::Home).await;
            tracing::debug!("Search input cleared");
            return;
        }

        let controller = self.clone();
        let term = term.to_string();
        let limit = self.settings.search_limit;
        self.debouncer.lock().await.schedule(move || {
            tokio::spawn(async move {
                controller.run_search(ScreenId::Home, term, limit).await;
            });
        });
    }

    /// Issue one logical request and apply its outcome unless superseded.
    /// Returns whether the outcome was applied.
    pub async fn run_search(&self, screen: ScreenId, term: String, limit: u32) -> bool {
        let model = self.model.lock().await;
        let Some(catalog) = model.get_catalog_client().await else {
            tracing::warn!(?screen, "No catalog client configured");
            return false;
        };
        let ticket = model.begin_search(screen, &term).await;
        drop(model);

        tracing::debug!(?screen, term = %term, generation = ticket.generation(), "Performing search");
        // Outcome is logged by the catalog client
        let outcome = catalog.search(&term, limit).await;

        let model = self.model.lock().await;
        let applied = model.apply_search(screen, &ticket, outcome).await;
        if !applied {
            tracing::debug!(?screen, term = %term, generation = ticket.generation(), "Discarding superseded response");
        }
        applied
    }

    /// Fetch the categories listing in the background.
    pub fn spawn_browse(&self) {
        let controller = self.clone();
        let term = self.settings.browse_query.clone();
        let limit = self.settings.browse_limit;
        tokio::spawn(async move {
            controller.run_search(ScreenId::Categories, term, limit).await;
        });
    }

    /// Re-issue the current screen's request right away.
    pub async fn reload(&self, screen: ScreenId) {
        match screen {
            ScreenId::Categories => self.spawn_browse(),
            ScreenId::Home => {
                let input = self.model.lock().await.get_ui_state().await.search_input;
                let term = input.trim().to_string();
                self.debouncer.lock().await.cancel();
                if term.is_empty() {
                    return;
                }
                let controller = self.clone();
                let limit = self.settings.search_limit;
                tokio::spawn(async move {
                    controller.run_search(ScreenId::Home, term, limit).await;
                });
            }
        }
    }

    pub async fn navigate_to(&self, route: Route) {
        let model = self.model.lock().await;
        let previous = model.set_route(route).await;
        let categories_idle = model.get_screen(ScreenId::Categories).await.search.status() == &SearchStatus::Idle;
        let home_pending = {
            let input = model.get_ui_state().await.search_input;
            let screen = model.get_screen(ScreenId::Home).await;
            (input.trim() != screen.search.query()).then_some(input)
        };
        drop(model);

        if previous == route {
            return;
        }
        tracing::info!(from = ?previous, to = ?route, "Route changed");

        if previous == Route::Home {
            self.teardown().await;
        }
        match route {
            Route::Categories if categories_idle => self.spawn_browse(),
            Route::Home => {
                if let Some(input) = home_pending {
                    self.on_search_input_changed(&input).await;
                }
            }
            _ => {}
        }
    }
}
