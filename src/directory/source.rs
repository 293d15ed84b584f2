use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use reqwest::Url;
use reqwest::blocking::Client;

use super::{DirectoryError, Endpoint};

/// Something that can produce the raw listing body.
///
/// Implementations run on the loader thread and are called exactly once.
pub trait CompanySource: Send + 'static {
	/// Human readable location used in logs and error details.
	fn location(&self) -> String;

	/// Read the complete response body.
	fn fetch(&self) -> Result<String, DirectoryError>;
}

/// Reads the listing over HTTP(S).
pub struct HttpSource {
	client: Client,
	url: Url,
}

impl HttpSource {
	pub fn new(url: Url, timeout: Duration) -> Result<Self, DirectoryError> {
		let client = Client::builder()
			.timeout(timeout)
			.user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
			.build()
			.map_err(|err| DirectoryError::fetch(url.as_str(), err))?;
		Ok(Self { client, url })
	}
}

impl CompanySource for HttpSource {
	fn location(&self) -> String {
		self.url.to_string()
	}

	fn fetch(&self) -> Result<String, DirectoryError> {
		let response = self
			.client
			.get(self.url.clone())
			.send()
			.map_err(|err| DirectoryError::fetch(self.location(), err))?;

		let status = response.status();
		if !status.is_success() {
			return Err(DirectoryError::Status {
				location: self.location(),
				status: status.as_u16(),
			});
		}

		response
			.text()
			.map_err(|err| DirectoryError::fetch(self.location(), err))
	}
}

/// Reads the listing from a local checkout of the site.
pub struct FileSource {
	path: PathBuf,
}

impl FileSource {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}
}

impl CompanySource for FileSource {
	fn location(&self) -> String {
		self.path.display().to_string()
	}

	fn fetch(&self) -> Result<String, DirectoryError> {
		fs::read_to_string(&self.path).map_err(|err| DirectoryError::fetch(self.location(), err))
	}
}

/// Build the source matching a resolved endpoint.
pub fn source_for(
	endpoint: &Endpoint,
	timeout: Duration,
) -> Result<Box<dyn CompanySource>, DirectoryError> {
	Ok(match endpoint {
		Endpoint::File(path) => Box::new(FileSource::new(path.clone())),
		Endpoint::Http(url) => Box::new(HttpSource::new(url.clone(), timeout)?),
	})
}
