//! Reusable UI components for the trivia card
//!
//! The question card and its star row, plus the filter and paging
//! controls a host lays out around a list of cards.

mod category_pills;
mod new_question_form;
mod pager;
mod question_card;
mod search_box;
mod star_rating;

pub use category_pills::*;
pub use new_question_form::*;
pub use pager::*;
pub use question_card::*;
pub use search_box::*;
pub use star_rating::*;
