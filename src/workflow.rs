use anyhow::{Context, Result, bail};
use condir::directory::{self, CompanySource, LOAD_FAILED_MESSAGE, source_for};
use condir::{BrowseOutcome, Company, DirectorySession, DirectoryUi, LoadState, RegionLabeler};

use crate::settings::ResolvedConfig;

/// Coordinates building and running the interactive directory view.
pub(crate) struct BrowseWorkflow {
	directory_ui: DirectoryUi,
}

impl BrowseWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let ResolvedConfig {
			endpoint,
			timeout,
			region_threshold,
			initial_query,
			theme,
			ui,
			..
		} = config;

		let directory_ui = DirectoryUi::from_endpoint(&endpoint, timeout)?
			.with_region_threshold(region_threshold)
			.with_initial_query(initial_query)
			.with_ui_config(ui)
			.with_theme_name(&theme);
		Ok(Self { directory_ui })
	}

	pub(crate) fn run(self) -> Result<BrowseOutcome> {
		self.directory_ui.run()
	}
}

/// Loads the listing once and filters it without starting the interface.
pub(crate) struct PrintWorkflow {
	source: Box<dyn CompanySource>,
	labeler: RegionLabeler,
	query: String,
}

impl PrintWorkflow {
	pub(crate) fn from_config(config: &ResolvedConfig) -> Result<Self> {
		let source = source_for(&config.endpoint, config.timeout)
			.with_context(|| format!("failed to prepare a reader for {}", config.endpoint))?;
		Ok(Self::new(
			source,
			RegionLabeler::new(config.region_threshold),
			config.initial_query.clone(),
		))
	}

	fn new(source: Box<dyn CompanySource>, labeler: RegionLabeler, query: String) -> Self {
		Self {
			source,
			labeler,
			query,
		}
	}

	pub(crate) fn labeler(&self) -> RegionLabeler {
		self.labeler
	}

	/// Wait for the load and return the companies matching the query.
	///
	/// A failed load surfaces only the generic message; the cause is logged.
	pub(crate) fn run(self) -> Result<Vec<Company>> {
		let outcome = directory::spawn(self.source).wait();
		let mut session = DirectorySession::new(self.labeler).with_query(self.query);
		session.apply_load(outcome);

		match session.load_state() {
			LoadState::Failed(message) => bail!("{message}"),
			LoadState::Loading => bail!("{LOAD_FAILED_MESSAGE}"),
			LoadState::Ready(_) => {}
		}

		Ok(session.visible().into_iter().cloned().collect())
	}
}

#[cfg(test)]
mod tests {
	use condir::DirectoryError;

	use super::*;

	struct FixedSource(Result<&'static str, &'static str>);

	impl CompanySource for FixedSource {
		fn location(&self) -> String {
			"fixture".to_string()
		}

		fn fetch(&self) -> Result<String, DirectoryError> {
			self.0
				.map(str::to_string)
				.map_err(|reason| DirectoryError::fetch("fixture", reason))
		}
	}

	const LISTING: &str = r#"[
		{"name":"Alpha Gas Co","contact":"010-1111-2222","region":"Seoul Gangnam-gu Teheran-ro 123","industry":"gas","grade":"A"},
		{"name":"Beta Steel","contact":"02-333-4444","region":"Busan","industry":"steel","grade":"B"}
	]"#;

	fn workflow(source: FixedSource, query: &str) -> PrintWorkflow {
		PrintWorkflow::new(Box::new(source), RegionLabeler::default(), query.to_string())
	}

	#[test]
	fn print_run_filters_by_query() {
		let companies = workflow(FixedSource(Ok(LISTING)), "BUSAN")
			.run()
			.expect("load succeeds");
		let names: Vec<_> = companies.iter().map(|c| c.name.as_str()).collect();
		assert_eq!(names, ["Beta Steel"]);
	}

	#[test]
	fn empty_query_keeps_listing_order() {
		let companies = workflow(FixedSource(Ok(LISTING)), "")
			.run()
			.expect("load succeeds");
		assert_eq!(companies.len(), 2);
		assert_eq!(companies[0].name, "Alpha Gas Co");
	}

	#[test]
	fn failed_load_reports_generic_message() {
		let err = workflow(FixedSource(Err("connection refused")), "")
			.run()
			.expect_err("load fails");
		assert_eq!(err.to_string(), LOAD_FAILED_MESSAGE);
	}

	#[test]
	fn malformed_body_reports_generic_message() {
		let err = workflow(FixedSource(Ok("{\"oops\":")), "")
			.run()
			.expect_err("parse fails");
		assert_eq!(err.to_string(), "Error fetching data");
	}
}
