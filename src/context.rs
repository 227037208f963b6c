//! Shared state for the trivia desktop app.
//!
//! The question bank lives in a signal provided by `App`. Cards never see
//! it; they hand their commands to the list page, which applies them.
//!
//! ## Usage
//!
//! ```ignore
//! let bank = use_bank();
//! let settings = use_list_settings();
//! let page = bank.read().page(&PageQuery::default().page_size(settings.page_size))?;
//! ```

use dioxus::prelude::*;
use trivia_core::QuestionBank;

/// List options fixed at startup
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListSettings {
    pub page_size: usize,
}

/// Hook to access the question bank from context.
pub fn use_bank() -> Signal<QuestionBank> {
    use_context::<Signal<QuestionBank>>()
}

/// Hook to access the list settings from context.
pub fn use_list_settings() -> ListSettings {
    use_context::<ListSettings>()
}
