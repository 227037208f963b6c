//! Quiz view - random questions one at a time.
//!
//! Pick a category (or all of them), then step through questions that have
//! not come up yet in this round.

use dioxus::prelude::*;
use trivia_core::{AnswerVisibility, Question, QuestionBank, QuizRound, TriviaError};
use trivia_ui::CategoryPills;

use crate::context::use_bank;

/// Signals behind the quiz view
#[derive(Clone, Copy)]
struct QuizState {
    round: Signal<QuizRound>,
    current: Signal<Option<Question>>,
    visibility: Signal<AnswerVisibility>,
    message: Signal<Option<String>>,
}

impl QuizState {
    /// Start over, optionally in a single category
    fn restart(mut self, category: Option<String>) {
        tracing::debug!(?category, "Starting quiz round");
        self.round.set(QuizRound::new(category));
        self.current.set(None);
        self.visibility.set(AnswerVisibility::default());
        self.message.set(None);
    }

    fn ask_next(mut self, bank: Signal<QuestionBank>) {
        let result = self.round.write().next(&bank.read()).cloned();
        self.visibility.set(AnswerVisibility::default());
        match result {
            Ok(question) => {
                tracing::debug!(id = %question.id, "Asking quiz question");
                self.current.set(Some(question));
                self.message.set(None);
            }
            Err(e) => {
                if !matches!(e, TriviaError::NoQuestionsLeft) {
                    tracing::warn!("Picking quiz question failed: {}", e);
                }
                self.current.set(None);
                self.message.set(Some(round_message(&e)));
            }
        }
    }

    fn toggle_answer(mut self) {
        let current = (self.visibility)();
        self.visibility.set(current.toggled());
    }
}

/// Text shown when no question could be picked
fn round_message(error: &TriviaError) -> String {
    match error {
        TriviaError::NoQuestionsLeft => {
            "That was the last question. Restart to play again.".to_string()
        }
        other => other.to_string(),
    }
}

/// Quiz view component.
#[component]
pub fn QuizView() -> Element {
    let bank = use_bank();

    let state = QuizState {
        round: use_signal(QuizRound::default),
        current: use_signal(|| None),
        visibility: use_signal(AnswerVisibility::default),
        message: use_signal(|| None),
    };

    let categories = bank.read().categories();
    let selected = state.round.read().category().map(str::to_string);
    let restart_category = selected.clone();
    let asked = state.round.read().asked().len();
    let visibility = (state.visibility)();
    let answer_style = format!("visibility: {}", visibility.css());

    rsx! {
        div { class: "quiz",
            div { class: "list-controls",
                CategoryPills {
                    categories: categories,
                    selected: selected,
                    on_select: move |category| state.restart(category),
                }
            }

            if let Some(question) = (state.current)() {
                div { class: "Question-holder",
                    div { class: "Question", "{question.question}" }
                    div {
                        class: "show-answer button",
                        onclick: move |_| state.toggle_answer(),
                        {visibility.toggle_label()}
                    }
                    div { class: "answer-holder",
                        span { style: "{answer_style}", "Answer: {question.answer}" }
                    }
                }
            }

            if let Some(message) = (state.message)() {
                p { class: "empty-state", "{message}" }
            }

            p { class: "quiz-status", "{asked} asked this round" }

            div { class: "quiz-actions",
                button {
                    class: "btn-page",
                    r#type: "button",
                    onclick: move |_| state.ask_next(bank),
                    "next question \u{2192}"
                }
                button {
                    class: "btn-page",
                    r#type: "button",
                    onclick: move |_| state.restart(restart_category.clone()),
                    "restart"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trivia_core::QuestionId;

    #[test]
    fn exhausted_round_suggests_restart() {
        let message = round_message(&TriviaError::NoQuestionsLeft);
        assert!(message.contains("Restart"));
    }

    #[test]
    fn other_failures_show_the_error() {
        let message = round_message(&TriviaError::QuestionNotFound(QuestionId(3)));
        assert_eq!(message, "Question not found: 3");
    }
}
