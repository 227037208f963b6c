//! Category Pills Component
//!
//! Horizontal row of category filter pills, led by an "All" pill that
//! clears the filter.

use dioxus::prelude::*;

/// Label of the pill that clears the category filter
pub const ALL_CATEGORIES: &str = "All";

/// Properties for the CategoryPills component
#[derive(Clone, PartialEq, Props)]
pub struct CategoryPillsProps {
    /// List of available categories
    pub categories: Vec<String>,
    /// Currently selected category, `None` for all
    pub selected: Option<String>,
    /// Handler called when a pill is selected
    pub on_select: EventHandler<Option<String>>,
}

/// Displays a horizontal row of selectable category pills
///
/// # Example
///
/// ```rust,ignore
/// let mut selected = use_signal(|| None::<String>);
///
/// rsx! {
///     CategoryPills {
///         categories: bank.read().categories(),
///         selected: selected(),
///         on_select: move |cat| selected.set(cat)
///     }
/// }
/// ```
#[component]
pub fn CategoryPills(props: CategoryPillsProps) -> Element {
    let on_select = props.on_select;
    let pills: Vec<(String, Option<String>)> = std::iter::once((ALL_CATEGORIES.to_string(), None))
        .chain(props.categories.iter().map(|c| (c.clone(), Some(c.clone()))))
        .collect();

    rsx! {
        div {
            class: "category-pills",
            role: "radiogroup",
            "aria-label": "Category selection",
            for (label, value) in pills {
                {
                    let is_selected = props.selected == value;
                    rsx! {
                        button {
                            key: "{label}",
                            class: pill_class(is_selected),
                            role: "radio",
                            "aria-checked": if is_selected { "true" } else { "false" },
                            onclick: move |_| on_select.call(value.clone()),
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}

fn pill_class(selected: bool) -> &'static str {
    if selected {
        "pill selected"
    } else {
        "pill"
    }
}
