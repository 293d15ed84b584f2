//! Searchable terminal directory of construction companies.
//!
//! The listing is fetched once from a static JSON resource, filtered on every
//! query change, and rendered as rows whose long region text can be revealed
//! on demand. The root re-exports the pieces embedders usually need.

pub mod app_dirs;
pub mod directory;
pub mod disclosure;
pub mod logging;
pub mod search;
pub mod session;
pub mod types;
pub mod ui;

pub use directory::{DirectoryError, Endpoint, EndpointOptions, LoadOutcome};
pub use disclosure::{Disclosure, RegionLabeler, short_label};
pub use search::{filter_companies, filter_indices};
pub use session::{DirectorySession, LoadState};
pub use types::{Company, RowKey};
pub use ui::{BrowseOutcome, DirectoryUi, UiConfig};
