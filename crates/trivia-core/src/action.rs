//! Commands a question card sends to its host.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A user-triggered command from a question card.
///
/// `Rate(k)` corresponds to a `PATCH` carrying the new rating, `Delete` to a
/// `DELETE` with no payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "verb", content = "rating")]
pub enum QuestionAction {
    #[serde(rename = "PATCH")]
    Rate(u8),
    #[serde(rename = "DELETE")]
    Delete,
}

impl QuestionAction {
    /// Request verb for hosts that dispatch on it.
    pub fn verb(&self) -> &'static str {
        match self {
            QuestionAction::Rate(_) => "PATCH",
            QuestionAction::Delete => "DELETE",
        }
    }

    /// The new rating for `PATCH`, nothing for `DELETE`.
    pub fn payload(&self) -> Option<u8> {
        match self {
            QuestionAction::Rate(rating) => Some(*rating),
            QuestionAction::Delete => None,
        }
    }
}

impl fmt::Display for QuestionAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.payload() {
            Some(rating) => write!(f, "{} {}", self.verb(), rating),
            None => f.write_str(self.verb()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbs_and_payloads() {
        assert_eq!(QuestionAction::Rate(4).verb(), "PATCH");
        assert_eq!(QuestionAction::Rate(4).payload(), Some(4));
        assert_eq!(QuestionAction::Delete.verb(), "DELETE");
        assert_eq!(QuestionAction::Delete.payload(), None);
    }

    #[test]
    fn display() {
        assert_eq!(QuestionAction::Rate(2).to_string(), "PATCH 2");
        assert_eq!(QuestionAction::Delete.to_string(), "DELETE");
    }

    #[test]
    fn serializes_as_verb_and_rating() {
        let json = serde_json::to_value(QuestionAction::Rate(5)).unwrap();
        assert_eq!(json, serde_json::json!({"verb": "PATCH", "rating": 5}));

        let json = serde_json::to_value(QuestionAction::Delete).unwrap();
        assert_eq!(json, serde_json::json!({"verb": "DELETE"}));
    }
}
