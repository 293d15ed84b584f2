use std::fmt;
use std::path::{Path, PathBuf};

use reqwest::Url;

use super::DirectoryError;

/// Host identity that selects the development base.
pub const DEVELOPMENT_HOST: &str = "localhost";

/// Where the listing is published for everyone else.
pub const DEFAULT_PUBLISHED_BASE: &str = "https://gard2np.github.io/info";

/// Listing location relative to the base.
pub const DEFAULT_RESOURCE_PATH: &str = "data/companies.json";

/// The two deployments the listing can be read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeployTarget {
	Development,
	Published,
}

impl DeployTarget {
	/// Pick the deployment for the running host. Only [`DEVELOPMENT_HOST`]
	/// selects development; any other or unknown host reads the published copy.
	#[must_use]
	pub fn for_host(host: Option<&str>) -> Self {
		match host {
			Some(host) if host.eq_ignore_ascii_case(DEVELOPMENT_HOST) => Self::Development,
			_ => Self::Published,
		}
	}
}

/// Inputs for resolving the listing location once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointOptions {
	pub host: Option<String>,
	pub base_url: Option<String>,
	pub local_base: PathBuf,
	pub published_base: String,
	pub resource_path: String,
}

impl Default for EndpointOptions {
	fn default() -> Self {
		Self {
			host: None,
			base_url: None,
			local_base: PathBuf::from("."),
			published_base: DEFAULT_PUBLISHED_BASE.to_string(),
			resource_path: DEFAULT_RESOURCE_PATH.to_string(),
		}
	}
}

impl EndpointOptions {
	#[must_use]
	pub fn target(&self) -> DeployTarget {
		DeployTarget::for_host(self.host.as_deref())
	}

	/// Resolve the base the listing is read from.
	///
	/// An explicit `base_url` wins over the host switch.
	pub fn resolve(&self) -> Result<Endpoint, DirectoryError> {
		match (&self.base_url, self.target()) {
			(Some(base), _) => Endpoint::from_base(base, &self.resource_path),
			(None, DeployTarget::Development) => Ok(Endpoint::File(join_path(
				&self.local_base,
				&self.resource_path,
			))),
			(None, DeployTarget::Published) => {
				Endpoint::from_base(&self.published_base, &self.resource_path)
			}
		}
	}
}

/// Fully resolved location of the company listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
	File(PathBuf),
	Http(Url),
}

impl Endpoint {
	/// Combine a base (URL or directory) with the resource path.
	pub fn from_base(base: &str, resource_path: &str) -> Result<Self, DirectoryError> {
		if base.starts_with("http://") || base.starts_with("https://") {
			let joined = format!(
				"{}/{}",
				base.trim_end_matches('/'),
				resource_path.trim_start_matches('/')
			);
			let url = Url::parse(&joined).map_err(|err| DirectoryError::fetch(&joined, err))?;
			return Ok(Self::Http(url));
		}

		let dir = base.strip_prefix("file://").unwrap_or(base);
		let dir = if dir.is_empty() { "." } else { dir };
		Ok(Self::File(join_path(Path::new(dir), resource_path)))
	}
}

impl fmt::Display for Endpoint {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::File(path) => write!(f, "{}", path.display()),
			Self::Http(url) => write!(f, "{url}"),
		}
	}
}

fn join_path(base: &Path, resource_path: &str) -> PathBuf {
	base.join(resource_path.trim_start_matches('/'))
}
