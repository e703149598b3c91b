//! View module - UI rendering
//!
//! This module handles all UI rendering for the application using ratatui.
//! It is organized into submodules by component type:
//!
//! - `utils`: Shared helpers (scrollable lists, section blocks)
//! - `layout`: Navigation bar, search bar, drop zone, status line
//! - `landing`: Landing page
//! - `content`: Result lists and the detail pane
//! - `overlays`: Modal overlays (error, help)

mod utils;
mod layout;
mod landing;
mod content;
mod overlays;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::model::{ActiveSection, BrowseScreen, DropZone, Route, UiState};

pub struct AppView;

impl AppView {
    pub fn render(
        frame: &mut Frame,
        ui_state: &UiState,
        home: &BrowseScreen,
        categories: &BrowseScreen,
        drop_zone: &DropZone,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Navigation
                Constraint::Min(0),    // Route content
                Constraint::Length(1), // Status line
            ])
            .split(frame.area());

        layout::render_nav_bar(frame, chunks[0], ui_state.route);

        let results_focused = ui_state.active_section == ActiveSection::Results;
        match ui_state.route {
            Route::Landing => landing::render_landing(frame, chunks[1]),
            Route::Home => {
                let home_chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([
                        Constraint::Length(3), // Search bar
                        Constraint::Min(0),    // Results + detail
                        Constraint::Length(4), // Drop zone
                    ])
                    .split(chunks[1]);

                layout::render_search_bar(frame, home_chunks[0], ui_state);

                let main_chunks = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
                    .split(home_chunks[1]);

                let title = if home.search.query().is_empty() {
                    " Search Results ".to_string()
                } else {
                    format!(" Search Results: {} ", home.search.query())
                };
                content::render_results_list(
                    frame,
                    main_chunks[0],
                    home,
                    &title,
                    "Type in the search bar to find resources",
                    results_focused,
                );
                content::render_detail(frame, main_chunks[1], home);

                layout::render_drop_zone(frame, home_chunks[2], drop_zone);
            }
            Route::Categories => {
                let main_chunks = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
                    .split(chunks[1]);

                content::render_results_list(
                    frame,
                    main_chunks[0],
                    categories,
                    " Educational Resources ",
                    "Press r to load resources",
                    results_focused,
                );
                content::render_detail(frame, main_chunks[1], categories);
            }
        }

        layout::render_status_bar(frame, chunks[2], ui_state);

        // Error notification overlay (if there's an error)
        if ui_state.error_message.is_some() {
            overlays::render_error_notification(frame, ui_state);
        }

        // Help popup overlay (if open)
        if ui_state.show_help_popup {
            overlays::render_help_popup(frame);
        }
    }
}
