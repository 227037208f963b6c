//! Search Box Component
//!
//! Free-text filter over question text, with a clear button once
//! something has been typed.

use dioxus::prelude::*;

/// Properties for the SearchBox component
#[derive(Clone, PartialEq, Props)]
pub struct SearchBoxProps {
    /// Current search value
    pub value: String,
    /// Handler called with the raw text on every change
    pub oninput: EventHandler<String>,
    /// Placeholder text
    #[props(default = "search questions...".to_string())]
    pub placeholder: String,
}

/// Search input with icon and clear button
///
/// # Example
///
/// ```rust,ignore
/// let mut term = use_signal(String::new);
///
/// rsx! {
///     SearchBox {
///         value: term(),
///         oninput: move |s| term.set(s)
///     }
/// }
/// ```
#[component]
pub fn SearchBox(props: SearchBoxProps) -> Element {
    let oninput = props.oninput;
    let has_value = !props.value.is_empty();

    rsx! {
        div { class: "search-input-wrapper",
            span { class: "search-icon", "\u{1F50D}" }
            input {
                class: "input-field search-input",
                r#type: "search",
                placeholder: "{props.placeholder}",
                value: "{props.value}",
                oninput: move |e| oninput.call(e.value()),
            }
            if has_value {
                button {
                    class: "search-clear",
                    "aria-label": "Clear search",
                    onclick: move |_| oninput.call(String::new()),
                    "\u{00D7}"
                }
            }
        }
    }
}

/// Turn raw search box text into a filter term
///
/// Surrounding whitespace is ignored and blank text means no filter.
pub fn search_term(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_is_no_filter() {
        assert_eq!(search_term(""), None);
        assert_eq!(search_term("   "), None);
    }

    #[test]
    fn text_is_trimmed() {
        assert_eq!(search_term("  mona lisa "), Some("mona lisa".to_string()));
    }
}
