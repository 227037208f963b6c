use dioxus::prelude::*;
use trivia_core::QuestionBank;

use crate::context::ListSettings;
use crate::pages::{QuestionList, QuizView};
use crate::theme::GLOBAL_STYLES;

/// Top-level views of the app
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    List,
    Quiz,
}

impl View {
    pub fn label(&self) -> &'static str {
        match self {
            View::List => "Questions",
            View::Quiz => "Play",
        }
    }

    /// Tab class, highlighted when `current` is this view
    pub fn tab_class(&self, current: View) -> &'static str {
        if *self == current {
            "pill selected"
        } else {
            "pill"
        }
    }
}

/// Root application component.
///
/// Provides global styles, the question bank context and the view switch.
#[component]
pub fn App() -> Element {
    let bank: Signal<QuestionBank> = use_signal(crate::initial_bank);
    let mut view = use_signal(|| View::List);

    // Provide bank and list settings to all child components
    use_context_provider(|| bank);
    use_context_provider(|| ListSettings {
        page_size: crate::page_size(),
    });

    let current = view();

    rsx! {
        style { {GLOBAL_STYLES} }
        div { class: "app-container",
            header { class: "app-header",
                h1 { class: "app-title", "Trivia" }
            }
            nav { class: "view-tabs",
                for tab in [View::List, View::Quiz] {
                    button {
                        class: tab.tab_class(current),
                        r#type: "button",
                        onclick: move |_| view.set(tab),
                        {tab.label()}
                    }
                }
            }
            {match current {
                View::List => rsx! { QuestionList {} },
                View::Quiz => rsx! { QuizView {} },
            }}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_tab_is_highlighted() {
        assert_eq!(View::Quiz.tab_class(View::Quiz), "pill selected");
        assert_eq!(View::List.tab_class(View::Quiz), "pill");
        assert_eq!(View::List.label(), "Questions");
    }
}
