use super::filter_indices;
use crate::types::Company;

/// Remembers the visible rows for the last query that was filtered.
///
/// The directory never changes after it loads, so the query alone keys the
/// cache. Every miss filters the full directory again.
#[derive(Debug, Default, Clone)]
pub struct FilterMemo {
	query: Option<String>,
	indices: Vec<usize>,
}

impl FilterMemo {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Visible row positions for `query`, filtering only when the query changed.
	pub fn indices(&mut self, companies: &[Company], query: &str) -> &[usize] {
		if self.query.as_deref() != Some(query) {
			self.indices = filter_indices(companies, query);
			self.query = Some(query.to_string());
		}
		&self.indices
	}

	/// Forget the cached result.
	pub fn clear(&mut self) {
		self.query = None;
		self.indices.clear();
	}
}
