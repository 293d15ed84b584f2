//! Loading the company listing.
//!
//! The listing is fetched once per session on a background thread. The
//! endpoint is resolved a single time at startup from the configured host and
//! base overrides.

mod endpoint;
mod error;
mod loader;
mod source;

pub use endpoint::{
	DEFAULT_PUBLISHED_BASE, DEFAULT_RESOURCE_PATH, DEVELOPMENT_HOST, DeployTarget, Endpoint,
	EndpointOptions,
};
pub use error::{DirectoryError, LOAD_FAILED_MESSAGE};
pub use loader::{LoadOutcome, PendingLoad, load, parse_listing, spawn};
pub use source::{CompanySource, FileSource, HttpSource, source_for};

#[cfg(test)]
pub(crate) use loader::tests as test_support;
