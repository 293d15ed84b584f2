//! Incremental search over the loaded directory.
//!
//! Every query change filters the complete directory again; results are never
//! derived from the previous result set.

mod filter;
mod memo;

pub use filter::{filter_companies, filter_indices, matches};
pub use memo::FilterMemo;
