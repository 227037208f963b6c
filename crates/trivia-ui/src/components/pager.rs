//! Pager Component
//!
//! Previous/next buttons around a "Page x of y" status line.

use dioxus::prelude::*;

/// Direction a pager button moves
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PageStep {
    Previous,
    Next,
}

impl PageStep {
    /// Returns the CSS class for this button
    pub fn class(&self) -> &'static str {
        match self {
            PageStep::Previous => "btn-page btn-page-prev",
            PageStep::Next => "btn-page btn-page-next",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PageStep::Previous => "\u{2190} previous",
            PageStep::Next => "next \u{2192}",
        }
    }

    /// Page reached from `page`, staying within `1..=page_count`
    pub fn apply(&self, page: usize, page_count: usize) -> usize {
        let last = page_count.max(1);
        match self {
            PageStep::Previous => page.saturating_sub(1).clamp(1, last),
            PageStep::Next => (page + 1).clamp(1, last),
        }
    }
}

/// Properties for the Pager component
#[derive(Clone, PartialEq, Props)]
pub struct PagerProps {
    /// Current page, 1-based
    pub page: usize,
    /// Total number of pages
    pub page_count: usize,
    /// Matching questions across all pages
    pub total: usize,
    /// A page exists before this one
    pub has_previous: bool,
    /// A page exists after this one
    pub has_next: bool,
    /// Handler called with the page to show
    pub on_page: EventHandler<usize>,
}

/// Pagination controls
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Pager {
///         page: listing.page,
///         page_count: listing.page_count(),
///         total: listing.total_questions,
///         has_previous: listing.has_previous(),
///         has_next: listing.has_next(),
///         on_page: move |p| page.set(p)
///     }
/// }
/// ```
#[component]
pub fn Pager(props: PagerProps) -> Element {
    let page = props.page;
    let page_count = props.page_count.max(1);
    let on_page = props.on_page;

    rsx! {
        div { class: "pager",
            for step in [PageStep::Previous, PageStep::Next] {
                {
                    let disabled = match step {
                        PageStep::Previous => !props.has_previous,
                        PageStep::Next => !props.has_next,
                    };
                    rsx! {
                        button {
                            class: step.class(),
                            r#type: "button",
                            disabled: disabled,
                            onclick: move |_| on_page.call(step.apply(page, page_count)),
                            {step.label()}
                        }
                    }
                }
            }
            span { class: "pager-status",
                "Page {page} of {page_count} \u{00B7} {props.total} questions"
            }
        }
    }
}
