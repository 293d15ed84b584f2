//! Visual styling for the terminal interface.

pub mod theme;

pub use theme::{LIGHT, SLATE, Theme, by_name, names};
