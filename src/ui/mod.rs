//! Interactive terminal interface for browsing the directory.
//!
//! [`DirectoryUi`] configures and starts the view. The remaining submodules
//! implement the event loop, key handling, rendering and the widgets it is
//! drawn from.

mod actions;
mod builder;
pub mod components;
mod config;
pub mod input;
mod loading;
mod render;
mod runtime;
mod state;
pub mod style;

pub use builder::{DEFAULT_TIMEOUT, DirectoryUi};
pub use config::UiConfig;
pub use state::{App, BrowseOutcome};
