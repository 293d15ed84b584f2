use std::time::Duration;

use anyhow::{Context, Result};

use super::App;
use super::config::UiConfig;
use super::state::BrowseOutcome;
use super::style::{self, Theme};
use crate::directory::{CompanySource, Endpoint, source_for, spawn};
use crate::disclosure::RegionLabeler;

/// Default timeout for the listing request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Builder for the interactive directory view.
pub struct DirectoryUi {
	source: Box<dyn CompanySource>,
	labeler: RegionLabeler,
	initial_query: String,
	ui_config: Option<UiConfig>,
	theme: Option<Theme>,
}

impl DirectoryUi {
	/// Browse the listing produced by `source`.
	pub fn new(source: Box<dyn CompanySource>) -> Self {
		Self {
			source,
			labeler: RegionLabeler::default(),
			initial_query: String::new(),
			ui_config: None,
			theme: None,
		}
	}

	/// Browse the listing at a resolved endpoint.
	pub fn from_endpoint(endpoint: &Endpoint, timeout: Duration) -> Result<Self> {
		let source = source_for(endpoint, timeout)
			.with_context(|| format!("failed to prepare a reader for {endpoint}"))?;
		Ok(Self::new(source))
	}

	pub fn with_region_threshold(mut self, threshold: usize) -> Self {
		self.labeler = RegionLabeler::new(threshold);
		self
	}

	pub fn with_initial_query(mut self, query: impl Into<String>) -> Self {
		self.initial_query = query.into();
		self
	}

	pub fn with_ui_config(mut self, config: UiConfig) -> Self {
		self.ui_config = Some(config);
		self
	}

	/// Unknown names keep the default theme.
	pub fn with_theme_name(mut self, name: &str) -> Self {
		match style::by_name(name) {
			Some(theme) => self.theme = Some(theme),
			None => log::warn!("unknown theme '{name}', keeping the default"),
		}
		self
	}

	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.theme = Some(theme);
		self
	}

	/// Start the fetch and run the interface until the user leaves.
	pub fn run(self) -> Result<BrowseOutcome> {
		let mut app = self.into_app();
		app.run()
	}

	fn into_app(self) -> App<'static> {
		let mut app = App::new(self.labeler, self.initial_query);
		if let Some(ui) = self.ui_config {
			app.set_ui_config(ui);
		}
		if let Some(theme) = self.theme {
			app.set_theme(theme);
		}
		app.set_pending_load(spawn(self.source));
		app
	}
}
