//! Widgets the directory view is drawn from.

/// Company rows with the collapsed region column.
pub mod cards;
pub mod logs;
/// Query row with the visible/total count.
pub mod prompt;
/// Full-region popup.
pub mod reveal;
pub mod status;

pub use cards::{CardsContext, render_cards};
pub use logs::render_logs;
pub use prompt::{PromptContext, render_prompt};
pub use reveal::{RevealContext, render_reveal};
pub use status::{render_empty, render_failure, render_loading, render_title};
