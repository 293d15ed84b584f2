/// Text used by the interface for titles, prompts and table headings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiConfig {
	pub title: String,
	pub search_label: String,
	pub loading_label: String,
	pub empty_label: String,
	pub headers: [String; 4],
}

impl Default for UiConfig {
	fn default() -> Self {
		Self {
			title: "Construction Companies".to_string(),
			search_label: "Search".to_string(),
			loading_label: "Loading...".to_string(),
			empty_label: "No results".to_string(),
			headers: [
				"Grade".to_string(),
				"Name".to_string(),
				"Contact".to_string(),
				"Region".to_string(),
			],
		}
	}
}

impl UiConfig {
	#[must_use]
	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = title.into();
		self
	}
}
