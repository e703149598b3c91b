//! Controller module - Application logic and event handling
//!
//! This module contains the application controller that handles user input,
//! coordinates between the model and view, and drives catalog fetches.
//! It is organized into submodules by responsibility:
//!
//! - `input`: Key and paste event handling
//! - `debounce`: Quiet-period timer for typed searches
//! - `search`: Search dispatch, supersession and route changes
//! - `actions`: Selection, study triggers and external links

mod input;
mod debounce;
mod search;
mod actions;

use std::sync::Arc;
use tokio::sync::Mutex;

use crate::config::Settings;
use crate::model::{AppModel, FlashcardGenerator, PendingFlashcards, PlaceholderQuiz, QuizGenerator};

pub use actions::LinkKind;
pub use debounce::Debouncer;

#[derive(Clone)]
pub struct AppController {
    pub(crate) model: Arc<Mutex<AppModel>>,
    pub(crate) settings: Arc<Settings>,
    debouncer: Arc<Mutex<Debouncer>>,
    quiz_generator: Arc<dyn QuizGenerator>,
    flashcard_generator: Arc<dyn FlashcardGenerator>,
}

impl AppController {
    pub fn new(model: Arc<Mutex<AppModel>>, settings: Arc<Settings>) -> Self {
        let debouncer = Debouncer::new(settings.debounce_window());
        Self {
            model,
            settings,
            debouncer: Arc::new(Mutex::new(debouncer)),
            quiz_generator: Arc::new(PlaceholderQuiz),
            flashcard_generator: Arc::new(PendingFlashcards),
        }
    }

    /// Replace the study tool generators.
    pub fn with_generators(
        mut self,
        quiz_generator: Arc<dyn QuizGenerator>,
        flashcard_generator: Arc<dyn FlashcardGenerator>,
    ) -> Self {
        self.quiz_generator = quiz_generator;
        self.flashcard_generator = flashcard_generator;
        self
    }

    /// Cancel pending timers. Fetches already in flight are left to finish.
    pub async fn teardown(&self) {
        if self.debouncer.lock().await.cancel() {
            tracing::debug!("Cancelled pending search on teardown");
        }
    }
}
