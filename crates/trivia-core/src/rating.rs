//! Star rating row.
//!
//! A question card shows [`STAR_COUNT`] stars. The star at index `i` is
//! checked iff `i + 1 <= rating`. Ratings outside `[0, STAR_COUNT]` are not
//! clamped: a negative rating checks nothing, anything above five checks
//! everything.

use crate::action::QuestionAction;
use crate::types::QuestionId;

/// Number of stars in a rating row
pub const STAR_COUNT: usize = 5;

/// One star of a rating row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Star {
    /// Zero-based position in the row
    pub index: usize,
    /// Rendered in the filled state
    pub checked: bool,
}

impl Star {
    /// Rating this star selects when activated (1-based)
    pub fn value(&self) -> u8 {
        self.index as u8 + 1
    }

    /// Command sent when this star is activated
    pub fn action(&self) -> QuestionAction {
        QuestionAction::Rate(self.value())
    }

    /// CSS class for the star label
    pub fn class(&self) -> &'static str {
        if self.checked {
            "fa fa-star checked"
        } else {
            "fa fa-star"
        }
    }
}

/// Build the star row for a rating.
pub fn star_row(rating: i32) -> [Star; STAR_COUNT] {
    std::array::from_fn(|index| Star {
        index,
        checked: (index as i64) < i64::from(rating),
    })
}

/// Number of checked stars a rating renders as.
pub fn checked_count(rating: i32) -> usize {
    rating.clamp(0, STAR_COUNT as i32) as usize
}

/// Radio group name shared by all stars of one question.
pub fn group_name(id: QuestionId) -> String {
    format!("rating_{}", id)
}

/// Unique control id for one star input.
pub fn control_id(id: QuestionId, index: usize) -> String {
    format!("rating_{}_{}", id, index)
}
