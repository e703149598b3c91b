//! Model module - Application state and data types
//!
//! This module contains all the data structures and state management for the application.
//! It is organized into submodules by responsibility:
//!
//! - `types`: Core type definitions (catalog items, routes, UI state)
//! - `error`: Fetch and study error types
//! - `volumes`: Catalog wire format and normalization
//! - `catalog_client`: Catalog API client and the `CatalogSource` seam
//! - `search`: Search lifecycle with request supersession
//! - `selection`: Selected item / quiz visibility state machine
//! - `screen`: Per-route browsing screen
//! - `study`: Quiz and flashcard generator hooks
//! - `drop_zone`: Dropped file capture
//! - `app_model`: Main application model with state management methods

mod types;
mod error;
mod volumes;
mod catalog_client;
mod search;
mod selection;
mod screen;
mod study;
mod drop_zone;
mod app_model;

// Re-export all public types for convenient access
pub use types::{ActiveSection, CatalogItem, Route, ScreenId, UiState};
#[cfg(test)]
pub(crate) use types::sample_item;

pub use error::{FetchError, StudyError};

pub use catalog_client::{CatalogClient, CatalogSource};

pub use search::SearchStatus;

pub use screen::BrowseScreen;

pub use study::{Flashcard, FlashcardGenerator, PendingFlashcards, PlaceholderQuiz, Quiz, QuizGenerator};

pub use drop_zone::DropZone;

pub use app_model::AppModel;
