//! Star Rating Component
//!
//! Five radio-backed stars. Checked stars are a pure function of the
//! rating; selecting a star only reports it, the rating shown never changes
//! until the host passes a new one.

use dioxus::prelude::*;
use trivia_core::{
    checked_count, control_id, group_name, star_row, QuestionAction, QuestionId, STAR_COUNT,
};

/// Properties for the StarRating component
#[derive(Clone, PartialEq, Props)]
pub struct StarRatingProps {
    /// Question the stars belong to, used for control ids
    pub question_id: QuestionId,
    /// Current rating, not clamped
    pub rating: i32,
    /// Handler called with `Rate(k)` when star `k` is selected
    pub on_select: EventHandler<QuestionAction>,
}

/// Displays a row of five selectable stars
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     StarRating {
///         question_id: question.id,
///         rating: question.rating,
///         on_select: move |action| on_action.call(action)
///     }
/// }
/// ```
#[component]
pub fn StarRating(props: StarRatingProps) -> Element {
    let rating = props.rating;
    let group = group_name(props.question_id);
    let stars: Vec<_> = star_row(rating)
        .into_iter()
        .map(|star| (star, control_id(props.question_id, star.index)))
        .collect();
    let on_select = props.on_select;
    let summary = format!("{} of {} stars", checked_count(rating), STAR_COUNT);

    rsx! {
        div { class: "fa", role: "radiogroup", "aria-label": "{summary}",
            for (star, input_id) in stars {
                label {
                    key: "{input_id}",
                    class: star.class(),
                    r#for: "{input_id}",
                    "data-rating": "{rating}",
                    input {
                        id: "{input_id}",
                        name: "{group}",
                        r#type: "radio",
                        onclick: move |_| on_select.call(star.action()),
                    }
                }
            }
        }
    }
}
