//! New Question Form Component
//!
//! Question, answer, category and difficulty inputs with an add button.
//! The form only collects text; the host decides whether the question is
//! accepted.

use dioxus::prelude::*;
use trivia_core::{Difficulty, NewQuestion};

/// Difficulty levels offered by the form
pub const DIFFICULTY_LEVELS: [i64; 5] = [1, 2, 3, 4, 5];

/// Build a question from the form fields
///
/// Fields are trimmed. Returns `None` while the question, answer or
/// category is blank.
pub fn draft_question(
    question: &str,
    answer: &str,
    category: &str,
    difficulty: i64,
) -> Option<NewQuestion> {
    let question = question.trim();
    let answer = answer.trim();
    let category = category.trim();
    if question.is_empty() || answer.is_empty() || category.is_empty() {
        return None;
    }
    Some(NewQuestion {
        question: question.to_string(),
        answer: answer.to_string(),
        category: category.to_string(),
        difficulty: Difficulty::Level(difficulty),
    })
}

/// Form for adding a question
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     NewQuestionForm {
///         categories: bank.read().categories(),
///         on_submit: move |new| state.add(new)
///     }
/// }
/// ```
#[component]
pub fn NewQuestionForm(
    /// Known categories, offered as suggestions
    categories: Vec<String>,
    /// Handler called with the drafted question
    on_submit: EventHandler<NewQuestion>,
) -> Element {
    let mut question = use_signal(String::new);
    let mut answer = use_signal(String::new);
    let mut category = use_signal(String::new);
    let mut difficulty = use_signal(|| DIFFICULTY_LEVELS[0]);

    let can_submit = draft_question(&question(), &answer(), &category(), difficulty()).is_some();

    let handle_submit = move |_| {
        let Some(new) = draft_question(&question(), &answer(), &category(), difficulty()) else {
            return;
        };
        on_submit.call(new);
        question.set(String::new());
        answer.set(String::new());
    };

    rsx! {
        div { class: "new-question-form",
            input {
                class: "input-field",
                placeholder: "question",
                value: "{question}",
                oninput: move |e| question.set(e.value()),
            }
            input {
                class: "input-field",
                placeholder: "answer",
                value: "{answer}",
                oninput: move |e| answer.set(e.value()),
            }
            input {
                class: "input-field",
                placeholder: "category",
                list: "known-categories",
                value: "{category}",
                oninput: move |e| category.set(e.value()),
            }
            datalist { id: "known-categories",
                for name in categories {
                    option { key: "{name}", value: "{name}" }
                }
            }
            select {
                class: "input-field",
                value: "{difficulty}",
                onchange: move |e| {
                    if let Ok(level) = e.value().parse::<i64>() {
                        difficulty.set(level);
                    }
                },
                for level in DIFFICULTY_LEVELS {
                    option { key: "{level}", value: "{level}", "Difficulty {level}" }
                }
            }
            button {
                class: if can_submit { "btn-add btn-add-active" } else { "btn-add" },
                r#type: "button",
                disabled: !can_submit,
                onclick: handle_submit,
                "Add question"
            }
        }
    }
}
