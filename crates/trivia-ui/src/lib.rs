//! Trivia Card UI Components
//!
//! Dioxus components for rendering trivia questions.
//!
//! ## Components
//!
//! - [`QuestionCard`]: one question with star rating, category icon,
//!   difficulty, delete icon and answer reveal
//! - [`StarRating`]: the five-star row used by the card
//! - [`CategoryPills`], [`SearchBox`], [`Pager`]: list controls for hosts
//!
//! Cards never change question data. They report [`trivia_core::QuestionAction`]
//! commands through `on_action` and expect the host to pass updated props.

pub mod components;

pub use components::*;
