//! Error types for Trivia Card

use thiserror::Error;

use crate::types::QuestionId;

/// Main error type for question bank operations
#[derive(Error, Debug)]
pub enum TriviaError {
    /// No question with this id exists in the bank
    #[error("Question not found: {0}")]
    QuestionNotFound(QuestionId),

    /// Category filter names a category no question belongs to
    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    /// A new question is missing required text
    #[error("Invalid question: {0}")]
    InvalidQuestion(String),

    /// Every eligible quiz question has already been asked
    #[error("No quiz questions left")]
    NoQuestionsLeft,

    /// The largest question id is taken, so no new id can follow it
    #[error("No question id after {0}")]
    IdSpaceExhausted(QuestionId),

    /// Reading a question file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Question file is not valid JSON or has the wrong shape
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias using TriviaError
pub type TriviaResult<T> = Result<T, TriviaError>;
