use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread::{self, JoinHandle};

use crate::types::Company;

use super::{CompanySource, DirectoryError};

/// Result of the single directory fetch.
pub type LoadOutcome = Result<Vec<Company>, DirectoryError>;

/// Fetch and parse the listing on the calling thread.
pub fn load(source: &dyn CompanySource) -> LoadOutcome {
	let location = source.location();
	log::info!("loading company directory from {location}");
	let body = source.fetch()?;
	let companies = parse_listing(&location, &body)?;
	log::info!("loaded {} companies from {location}", companies.len());
	Ok(companies)
}

/// Parse a listing body. Only the outer shape is checked: the body must be an
/// array of objects; individual fields are taken as they come.
pub fn parse_listing(location: &str, body: &str) -> LoadOutcome {
	serde_json::from_str(body).map_err(|source| DirectoryError::Parse {
		location: location.to_string(),
		source,
	})
}

/// Start the one fetch of the session on a background thread.
///
/// The outcome is delivered through the returned [`PendingLoad`]. Dropping the
/// handle before the fetch finishes discards the outcome.
pub fn spawn(source: Box<dyn CompanySource>) -> PendingLoad {
	let (pending, _worker) = start(source);
	pending
}

/// The worker yields whether its outcome reached a live handle.
fn start(source: Box<dyn CompanySource>) -> (PendingLoad, JoinHandle<bool>) {
	let location = source.location();
	let (tx, rx) = mpsc::channel();
	let worker_location = location.clone();

	let worker = thread::spawn(move || {
		let outcome = load(source.as_ref());
		let delivered = tx.send(outcome).is_ok();
		if !delivered {
			log::debug!("directory load from {worker_location} finished after the session closed");
		}
		delivered
	});

	(PendingLoad { rx, location }, worker)
}

/// Handle to the in-flight directory fetch.
pub struct PendingLoad {
	rx: Receiver<LoadOutcome>,
	location: String,
}

impl PendingLoad {
	/// Take the outcome if the fetch has finished.
	pub fn poll(&self) -> Option<LoadOutcome> {
		match self.rx.try_recv() {
			Ok(outcome) => Some(outcome),
			Err(TryRecvError::Empty) => None,
			Err(TryRecvError::Disconnected) => Some(Err(self.stopped())),
		}
	}

	/// Block until the fetch finishes.
	pub fn wait(self) -> LoadOutcome {
		self.rx.recv().unwrap_or_else(|_| Err(self.stopped()))
	}

	#[must_use]
	pub fn location(&self) -> &str {
		&self.location
	}

	fn stopped(&self) -> DirectoryError {
		DirectoryError::fetch(&self.location, "loader stopped without a result")
	}
}
