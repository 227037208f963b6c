//! Question view model types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque question identifier.
///
/// Only used by the card to build unique control names; the bank uses it as
/// its lookup key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(pub u64);

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Question difficulty, displayed verbatim.
///
/// Question files carry either a numeric level or a free-form label, so both
/// are accepted and neither is validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Difficulty {
    Level(i64),
    Label(String),
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Level(1)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Level(level) => write!(f, "{}", level),
            Difficulty::Label(label) => f.write_str(label),
        }
    }
}

impl From<i64> for Difficulty {
    fn from(level: i64) -> Self {
        Difficulty::Level(level)
    }
}

impl From<&str> for Difficulty {
    fn from(label: &str) -> Self {
        Difficulty::Label(label.to_string())
    }
}

/// A trivia question as handed to the card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub question: String,
    pub answer: String,
    pub category: String,
    #[serde(default)]
    pub difficulty: Difficulty,
    /// Expected in [0, 5] but never clamped
    #[serde(default)]
    pub rating: i32,
}

impl Question {
    /// Icon asset for the category: `<lowercase(category)>.svg`.
    ///
    /// The asset is assumed to exist; nothing checks it.
    pub fn category_icon(&self) -> String {
        format!("{}.svg", self.category_alt())
    }

    /// Alt text for the category icon.
    pub fn category_alt(&self) -> String {
        self.category.to_lowercase()
    }

    /// Whether the question text matches a search term (case-insensitive substring).
    pub fn matches_search(&self, term: &str) -> bool {
        self.question.to_lowercase().contains(&term.to_lowercase())
    }
}

/// Data for a question not yet in the bank.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: String,
    #[serde(default)]
    pub difficulty: Difficulty,
}
