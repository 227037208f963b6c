//! Question list - the main application view.
//!
//! Category pills and a search box on top, one card per question on the
//! current page, pager at the bottom, and a form for adding questions.

use dioxus::prelude::*;
use trivia_core::{ActionOutcome, NewQuestion, PageQuery, QuestionAction, QuestionBank, QuestionId};
use trivia_ui::{search_term, CategoryPills, NewQuestionForm, Pager, QuestionCard, SearchBox};

use crate::context::{use_bank, use_list_settings};

/// Signals behind the list view, bundled so event handlers can share them
#[derive(Clone, Copy)]
struct ListState {
    bank: Signal<QuestionBank>,
    page: Signal<usize>,
    category: Signal<Option<String>>,
    search: Signal<String>,
    error: Signal<Option<String>>,
    page_size: usize,
}

impl ListState {
    fn query(&self) -> PageQuery {
        PageQuery {
            page: (self.page)(),
            page_size: self.page_size,
            category: (self.category)(),
            search: search_term(&(self.search)()),
        }
    }

    /// Apply a card's command to the bank
    fn apply(mut self, id: QuestionId, action: QuestionAction) {
        let result = self.bank.write().apply(id, action);
        match result {
            Ok(outcome) => {
                tracing::info!(%id, %action, "Applied question action");
                self.error.set(None);
                if let ActionOutcome::Deleted { .. } = outcome {
                    self.settle_after_delete();
                }
            }
            Err(e) => {
                tracing::warn!(%id, %action, "Question action failed: {}", e);
                self.error.set(Some(e.to_string()));
            }
        }
    }

    /// Add a question from the form
    fn add(mut self, new: NewQuestion) {
        let result = self.bank.write().add(new);
        match result {
            Ok(id) => {
                tracing::info!(%id, "Added question");
                self.error.set(None);
            }
            Err(e) => {
                tracing::warn!("Adding question failed: {}", e);
                self.error.set(Some(e.to_string()));
            }
        }
    }

    /// Keep the view on something that still exists after a delete
    fn settle_after_delete(mut self) {
        if let Some(category) = (self.category)() {
            let still_present = self.bank.read().categories().contains(&category);
            if !still_present {
                tracing::debug!(%category, "Last question of category deleted");
                self.category.set(None);
                self.page.set(1);
                return;
            }
        }

        let total = match self.bank.read().page(&self.query()) {
            Ok(listing) => listing.total_questions,
            Err(_) => return,
        };
        let page = settled_page((self.page)(), total, self.page_size);
        if page != (self.page)() {
            self.page.set(page);
        }
    }

    fn select_category(mut self, category: Option<String>) {
        self.category.set(category);
        self.page.set(1);
    }

    fn set_search(mut self, raw: String) {
        self.search.set(raw);
        self.page.set(1);
    }

    fn set_page(mut self, page: usize) {
        self.page.set(page);
    }
}

/// Last page that still has questions on it, if `page` ran past the end
fn settled_page(page: usize, total: usize, page_size: usize) -> usize {
    let page_count = total.div_ceil(page_size.max(1)).max(1);
    page.clamp(1, page_count)
}

/// Main application view component.
#[component]
pub fn QuestionList() -> Element {
    let bank = use_bank();
    let settings = use_list_settings();

    // Local UI state
    let state = ListState {
        bank,
        page: use_signal(|| 1),
        category: use_signal(|| None),
        search: use_signal(String::new),
        error: use_signal(|| None),
        page_size: settings.page_size,
    };

    let categories = bank.read().categories();
    let listing = bank.read().page(&state.query());
    let error = (state.error)();

    rsx! {
        div { class: "question-list",
            NewQuestionForm {
                categories: categories.clone(),
                on_submit: move |new| state.add(new),
            }

            div { class: "list-controls",
                CategoryPills {
                    categories: categories,
                    selected: (state.category)(),
                    on_select: move |category| state.select_category(category),
                }
                SearchBox {
                    value: (state.search)(),
                    oninput: move |raw| state.set_search(raw),
                }
            }

            if let Some(message) = &error {
                div { class: "error-banner", "{message}" }
            }

            {match listing {
                Ok(listing) => rsx! {
                    div { class: "questions-list",
                        if listing.questions.is_empty() {
                            p { class: "empty-state", "no questions here" }
                        }
                        for question in listing.questions.iter().cloned() {
                            {
                                let id = question.id;
                                rsx! {
                                    QuestionCard {
                                        key: "{id}",
                                        question: question,
                                        on_action: move |action| state.apply(id, action),
                                    }
                                }
                            }
                        }
                    }
                    Pager {
                        page: listing.page,
                        page_count: listing.page_count(),
                        total: listing.total_questions,
                        has_previous: listing.has_previous(),
                        has_next: listing.has_next(),
                        on_page: move |page| state.set_page(page),
                    }
                },
                Err(e) => rsx! {
                    div { class: "error-banner", "{e}" }
                },
            }}
        }
    }
}
