//! Question Card Component
//!
//! One trivia question: text, star rating, category icon, difficulty,
//! delete icon and an answer that can be shown or hidden.

use dioxus::prelude::*;
use trivia_core::{AnswerVisibility, Question, QuestionAction};

use super::StarRating;

/// Icon shown for the delete affordance
pub const DELETE_ICON: &str = "delete.png";

/// Question card
///
/// The card owns a single piece of state, whether the answer is revealed.
/// Everything else comes from `question`; ratings and deletions are handed to
/// `on_action` and the card never updates them itself.
///
/// The answer is always rendered. Hiding it only sets `visibility: hidden`,
/// so the text stays in the tree and the layout does not shift.
///
/// # Example
///
/// ```rust,ignore
/// let id = question.id;
///
/// rsx! {
///     QuestionCard {
///         question: question.clone(),
///         on_action: move |action| {
///             if let Err(e) = bank.write().apply(id, action) {
///                 tracing::warn!(%id, "Question action failed: {}", e);
///             }
///         }
///     }
/// }
/// ```
#[component]
pub fn QuestionCard(
    /// Question to display
    question: Question,
    /// Receives `Rate(k)` from the stars and `Delete` from the delete icon
    on_action: EventHandler<QuestionAction>,
) -> Element {
    let mut visibility = use_signal(AnswerVisibility::default);

    let state = visibility();
    let toggle_label = state.toggle_label();
    let answer_style = format!("visibility: {}", state.css());
    let difficulty = question.difficulty.to_string();

    rsx! {
        div { class: "Question-holder",
            div { class: "Question", "{question.question}" }
            StarRating {
                question_id: question.id,
                rating: question.rating,
                on_select: on_action,
            }
            div { class: "Question-status",
                img {
                    class: "category",
                    alt: question.category_alt(),
                    src: question.category_icon(),
                }
                div { class: "difficulty", "Difficulty: {difficulty}" }
                img {
                    src: DELETE_ICON,
                    alt: "delete",
                    class: "delete",
                    onclick: move |_| on_action.call(QuestionAction::Delete),
                }
            }
            div {
                class: "show-answer button",
                onclick: move |_| {
                    let current = visibility();
                    visibility.set(current.toggled());
                },
                "{toggle_label}"
            }
            div { class: "answer-holder",
                span { style: "{answer_style}", "Answer: {question.answer}" }
            }
        }
    }
}
