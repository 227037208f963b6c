//! Answer reveal state of a single card.

/// Whether a card's answer is shown.
///
/// The answer stays in the rendered tree either way; only its CSS
/// `visibility` changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnswerVisibility {
    #[default]
    Hidden,
    Visible,
}

impl AnswerVisibility {
    /// The other state
    pub fn toggled(self) -> Self {
        match self {
            AnswerVisibility::Hidden => AnswerVisibility::Visible,
            AnswerVisibility::Visible => AnswerVisibility::Hidden,
        }
    }

    pub fn is_visible(self) -> bool {
        self == AnswerVisibility::Visible
    }

    /// Value for the CSS `visibility` property
    pub fn css(self) -> &'static str {
        match self {
            AnswerVisibility::Hidden => "hidden",
            AnswerVisibility::Visible => "visible",
        }
    }

    /// Text of the show/hide control
    pub fn toggle_label(self) -> &'static str {
        match self {
            AnswerVisibility::Hidden => "Show Answer",
            AnswerVisibility::Visible => "Hide Answer",
        }
    }
}
