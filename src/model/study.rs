//! Study tool hooks (quizzes, flashcards)
//!
//! Generation itself lives outside this crate; the app only exposes the
//! trigger points and renders whatever a generator hands back.

use super::error::StudyError;
use super::types::CatalogItem;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Quiz {
    pub title: String,
    pub questions: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Flashcard {
    pub front: String,
    pub back: String,
}

pub trait QuizGenerator: Send + Sync {
    fn generate(&self, item: &CatalogItem) -> Quiz;
}

pub trait FlashcardGenerator: Send + Sync {
    fn generate(&self, item: &CatalogItem) -> Result<Vec<Flashcard>, StudyError>;
}

/// Fixed example questions until a real generator is plugged in
#[derive(Clone, Copy, Debug, Default)]
pub struct PlaceholderQuiz;

impl QuizGenerator for PlaceholderQuiz {
    fn generate(&self, item: &CatalogItem) -> Quiz {
        Quiz {
            title: format!("Quiz for {}", item.display_title()),
            questions: vec![
                "Example Quiz Question 1: ...".to_string(),
                "Example Quiz Question 2: ...".to_string(),
            ],
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct PendingFlashcards;

impl FlashcardGenerator for PendingFlashcards {
    fn generate(&self, _item: &CatalogItem) -> Result<Vec<Flashcard>, StudyError> {
        Err(StudyError::Unavailable("Flashcard generation"))
    }
}
