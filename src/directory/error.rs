use thiserror::Error;

/// Shown to the user for every failed load; the detail only reaches the log.
pub const LOAD_FAILED_MESSAGE: &str = "Error fetching data";

/// Reasons the directory could not be loaded.
#[derive(Debug, Error)]
pub enum DirectoryError {
	/// The resource could not be reached or read.
	#[error("failed to fetch {location}: {reason}")]
	Fetch { location: String, reason: String },

	/// The server answered with a non-success status.
	#[error("{location} answered with status {status}")]
	Status { location: String, status: u16 },

	/// The body was not a JSON array of company records.
	#[error("{location} is not a company listing: {source}")]
	Parse {
		location: String,
		#[source]
		source: serde_json::Error,
	},
}

impl DirectoryError {
	pub fn fetch(location: impl Into<String>, reason: impl ToString) -> Self {
		Self::Fetch {
			location: location.into(),
			reason: reason.to_string(),
		}
	}

	/// Message safe to show in the interface.
	#[must_use]
	pub fn user_message(&self) -> &'static str {
		LOAD_FAILED_MESSAGE
	}

	/// Whether the failure happened before a body was obtained.
	#[must_use]
	pub fn is_fetch(&self) -> bool {
		matches!(self, Self::Fetch { .. } | Self::Status { .. })
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn every_error_shares_the_user_message() {
		let fetch = DirectoryError::fetch("https://example.test", "connection refused");
		let status = DirectoryError::Status {
			location: "https://example.test".into(),
			status: 404,
		};
		let parse = DirectoryError::Parse {
			location: "companies.json".into(),
			source: serde_json::from_str::<Vec<u8>>("{").unwrap_err(),
		};
		for err in [&fetch, &status, &parse] {
			assert_eq!(err.user_message(), "Error fetching data");
		}
		assert!(fetch.is_fetch());
		assert!(status.is_fetch());
		assert!(!parse.is_fetch());
	}

	#[test]
	fn detail_names_the_location() {
		let err = DirectoryError::Status {
			location: "https://example.test/data/companies.json".into(),
			status: 503,
		};
		assert_eq!(
			err.to_string(),
			"https://example.test/data/companies.json answered with status 503"
		);
	}
}
