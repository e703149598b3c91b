//! Core type definitions for the application

use std::time::Instant;

/// Template for the embeddable book viewer of the catalog service.
const EMBED_URL_TEMPLATE: &str = "https://books.google.com/books?id={id}&lpg=PP1&pg=PP1&output=embed";

/// A normalized catalog entry, built once from an API response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogItem {
    pub id: String,
    pub title: String,
    pub authors: Vec<String>,
    pub description: Option<String>,
    pub info_link: Option<String>,
    pub preview_link: Option<String>,
    pub thumbnail_url: Option<String>,
    pub buy_link: Option<String>,
}

impl CatalogItem {
    /// "by A, B", or an empty string when the catalog lists no authors.
    pub fn byline(&self) -> String {
        if self.authors.is_empty() {
            String::new()
        } else {
            format!("by {}", self.authors.join(", "))
        }
    }

    pub fn display_title(&self) -> &str {
        if self.title.trim().is_empty() {
            "Untitled"
        } else {
            &self.title
        }
    }

    /// URL of the inline preview surface for this item.
    pub fn embed_url(&self) -> String {
        EMBED_URL_TEMPLATE.replace("{id}", &self.id)
    }
}

/// The three named views of the app
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Landing,
    Home,
    Categories,
}

impl Route {
    pub const ALL: [Route; 3] = [Route::Landing, Route::Home, Route::Categories];

    pub fn title(self) -> &'static str {
        match self {
            Route::Landing => "Start",
            Route::Home => "Home",
            Route::Categories => "Categories",
        }
    }

    /// The browsing screen backing this route, if it has one
    pub fn screen(self) -> Option<ScreenId> {
        match self {
            Route::Landing => None,
            Route::Home => Some(ScreenId::Home),
            Route::Categories => Some(ScreenId::Categories),
        }
    }
}

/// Identifies one of the per-route browsing screens
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScreenId {
    Home,
    Categories,
}

/// Which section of the current route is focused
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ActiveSection {
    #[default]
    Search,
    Results,
    DropZone,
}

impl ActiveSection {
    /// Next focusable section on the given route. Categories only has a result list.
    pub fn next(self, route: Route) -> Self {
        if route != Route::Home {
            return ActiveSection::Results;
        }
        match self {
            ActiveSection::Search => ActiveSection::Results,
            ActiveSection::Results => ActiveSection::DropZone,
            ActiveSection::DropZone => ActiveSection::Search,
        }
    }

    pub fn prev(self, route: Route) -> Self {
        if route != Route::Home {
            return ActiveSection::Results;
        }
        match self {
            ActiveSection::Search => ActiveSection::DropZone,
            ActiveSection::Results => ActiveSection::Search,
            ActiveSection::DropZone => ActiveSection::Results,
        }
    }
}

/// UI state for the application
#[derive(Clone, Default)]
pub struct UiState {
    pub route: Route,
    pub active_section: ActiveSection,
    pub search_input: String,
    pub error_message: Option<String>,
    pub error_timestamp: Option<Instant>,
    pub notice: Option<String>,
    pub notice_timestamp: Option<Instant>,
    pub show_help_popup: bool,
}

#[cfg(test)]
pub(crate) fn sample_item(id: &str, title: &str) -> CatalogItem {
    CatalogItem {
        id: id.to_string(),
        title: title.to_string(),
        authors: vec!["Ada Lovelace".to_string()],
        description: Some("Notes on the analytical engine".to_string()),
        info_link: Some(format!("https://books.example/{id}/info")),
        preview_link: Some(format!("https://books.example/{id}/preview")),
        thumbnail_url: Some(format!("https://books.example/{id}/cover.jpg")),
        buy_link: None,
    }
}
