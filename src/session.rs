//! The state a directory view is rendered from.
//!
//! [`DirectorySession`] is the only owner of the load state, the live query
//! and the disclosure state. It changes in response to discrete events: the
//! fetch completing, the query being edited, a reveal being requested or
//! dismissed.

use std::borrow::Cow;

use crate::directory::LoadOutcome;
use crate::disclosure::{Disclosure, RegionLabeler};
use crate::search::{FilterMemo, filter_companies};
use crate::types::{Company, RowKey, row_keys};

/// Progress of the one directory fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
	#[default]
	Loading,
	Ready(Vec<Company>),
	Failed(String),
}

impl LoadState {
	#[must_use]
	pub fn companies(&self) -> Option<&[Company]> {
		match self {
			Self::Ready(companies) => Some(companies),
			_ => None,
		}
	}

	#[must_use]
	pub fn is_loading(&self) -> bool {
		matches!(self, Self::Loading)
	}
}

#[derive(Debug, Default)]
pub struct DirectorySession {
	state: LoadState,
	keys: Vec<RowKey>,
	query: String,
	memo: FilterMemo,
	disclosure: Disclosure,
	labeler: RegionLabeler,
}

impl DirectorySession {
	#[must_use]
	pub fn new(labeler: RegionLabeler) -> Self {
		Self {
			labeler,
			..Self::default()
		}
	}

	/// Start with a query already typed.
	#[must_use]
	pub fn with_query(mut self, query: impl Into<String>) -> Self {
		self.query = query.into();
		self
	}

	#[must_use]
	pub fn load_state(&self) -> &LoadState {
		&self.state
	}

	/// Record the fetch outcome.
	///
	/// Only the first outcome while loading is applied; anything later is
	/// ignored and `false` is returned.
	pub fn apply_load(&mut self, outcome: LoadOutcome) -> bool {
		if !self.state.is_loading() {
			log::debug!("ignoring directory load outcome; state already settled");
			return false;
		}

		self.state = match outcome {
			Ok(companies) => {
				self.keys = row_keys(&companies);
				LoadState::Ready(companies)
			}
			Err(err) => {
				log::error!("Error fetching data: {err}");
				LoadState::Failed(err.user_message().to_string())
			}
		};
		self.memo.clear();
		true
	}

	#[must_use]
	pub fn query(&self) -> &str {
		&self.query
	}

	pub fn set_query(&mut self, query: impl Into<String>) {
		self.query = query.into();
	}

	/// Directory companies, empty until the listing is ready.
	#[must_use]
	pub fn companies(&self) -> &[Company] {
		self.state.companies().unwrap_or_default()
	}

	/// Companies matching an arbitrary `query`, in directory order.
	#[must_use]
	pub fn filtered_list(&self, query: &str) -> Vec<&Company> {
		filter_companies(self.companies(), query)
	}

	/// Positions of the companies matching the current query.
	pub fn visible_indices(&mut self) -> &[usize] {
		let Some(companies) = self.state.companies() else {
			return &[];
		};
		self.memo.indices(companies, &self.query)
	}

	/// Companies matching the current query.
	pub fn visible(&mut self) -> Vec<&Company> {
		let Some(companies) = self.state.companies() else {
			return Vec::new();
		};
		self.memo
			.indices(companies, &self.query)
			.iter()
			.filter_map(|&index| companies.get(index))
			.collect()
	}

	#[must_use]
	pub fn row_key(&self, index: usize) -> Option<&RowKey> {
		self.keys.get(index)
	}

	#[must_use]
	pub fn labeler(&self) -> RegionLabeler {
		self.labeler
	}

	#[must_use]
	pub fn short_label<'a>(&self, region: &'a str) -> Cow<'a, str> {
		self.labeler.label(region)
	}

	#[must_use]
	pub fn disclosure(&self) -> &Disclosure {
		&self.disclosure
	}

	pub fn request_reveal(&mut self, region: impl Into<String>) {
		self.disclosure.request(region);
	}

	pub fn dismiss(&mut self) {
		self.disclosure.dismiss();
	}
}
