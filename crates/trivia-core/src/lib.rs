//! Trivia Card Core Library
//!
//! Plain-Rust logic behind the trivia question card.
//!
//! ## Overview
//!
//! A question card renders one [`Question`]: its text, a five-star rating row,
//! a category icon, a difficulty label, a delete icon and an answer that can be
//! revealed. The card never changes question data itself. It emits
//! [`QuestionAction`] commands and leaves it to its host to apply them, for
//! example through a [`QuestionBank`].
//!
//! ## Quick Start
//!
//! ```
//! use trivia_core::{star_row, Difficulty, PageQuery, Question, QuestionAction, QuestionBank, QuestionId};
//!
//! let mut bank = QuestionBank::new(vec![Question {
//!     id: QuestionId(1),
//!     question: "What is the largest planet?".to_string(),
//!     answer: "Jupiter".to_string(),
//!     category: "Science".to_string(),
//!     difficulty: Difficulty::Level(2),
//!     rating: 0,
//! }]);
//!
//! bank.apply(QuestionId(1), QuestionAction::Rate(4)).unwrap();
//!
//! let page = bank.page(&PageQuery::default()).unwrap();
//! let stars = star_row(page.questions[0].rating);
//! assert_eq!(stars.iter().filter(|s| s.checked).count(), 4);
//! ```

pub mod action;
pub mod bank;
pub mod error;
pub mod quiz;
pub mod rating;
pub mod reveal;
pub mod types;

// Re-exports
pub use action::QuestionAction;
pub use bank::{ActionOutcome, Page, PageQuery, QuestionBank, RESULTS_PER_PAGE};
pub use error::{TriviaError, TriviaResult};
pub use quiz::QuizRound;
pub use rating::{checked_count, control_id, group_name, star_row, Star, STAR_COUNT};
pub use reveal::AnswerVisibility;
pub use types::*;
