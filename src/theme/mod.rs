//! Visual theme for the trivia desktop app.

mod styles;

pub use styles::GLOBAL_STYLES;
