use ratatui::widgets::TableState;
use throbber_widgets_tui::ThrobberState;
use tui_logger::TuiWidgetState;

use super::config::UiConfig;
use super::input::SearchInput;
use super::style::Theme;
use crate::directory::PendingLoad;
use crate::disclosure::RegionLabeler;
use crate::session::DirectorySession;
use crate::types::{Company, RowKey};

/// What the user left the interface with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseOutcome {
	pub accepted: bool,
	pub query: String,
	pub selection: Option<Company>,
}

/// Interactive view over a [`DirectorySession`].
pub struct App<'a> {
	pub session: DirectorySession,
	pub search_input: SearchInput<'a>,
	pub table_state: TableState,
	pub theme: Theme,
	pub(crate) ui: UiConfig,
	pub(crate) throbber_state: ThrobberState,
	pub(crate) pending: Option<PendingLoad>,
	pub(crate) selected_key: Option<RowKey>,
	pub(crate) revealed_key: Option<RowKey>,
	pub(crate) show_logs: bool,
	pub(crate) log_state: TuiWidgetState,
}

impl<'a> App<'a> {
	#[must_use]
	pub fn new(labeler: RegionLabeler, initial_query: impl Into<String>) -> Self {
		let initial_query = initial_query.into();
		Self {
			session: DirectorySession::new(labeler).with_query(initial_query.clone()),
			search_input: SearchInput::new(initial_query),
			table_state: TableState::default(),
			theme: Theme::default(),
			ui: UiConfig::default(),
			throbber_state: ThrobberState::default(),
			pending: None,
			selected_key: None,
			revealed_key: None,
			show_logs: false,
			log_state: TuiWidgetState::new(),
		}
	}

	pub fn set_theme(&mut self, theme: Theme) {
		self.theme = theme;
	}

	pub fn set_ui_config(&mut self, ui: UiConfig) {
		self.ui = ui;
	}

	/// Push the editor text into the session and keep the selection on the
	/// same company when it is still visible.
	pub(crate) fn sync_query(&mut self) {
		self.session.set_query(self.search_input.text());
		self.restore_selection();
	}

	pub(crate) fn visible_len(&mut self) -> usize {
		self.session.visible_indices().len()
	}

	/// Directory position of the highlighted row.
	pub(crate) fn selected_index(&mut self) -> Option<usize> {
		let selected = self.table_state.selected()?;
		self.session.visible_indices().get(selected).copied()
	}

	pub(crate) fn selected_company(&mut self) -> Option<Company> {
		let index = self.selected_index()?;
		self.session.companies().get(index).cloned()
	}

	pub(crate) fn select_row(&mut self, row: Option<usize>) {
		self.table_state.select(row);
		self.selected_key = self
			.selected_index()
			.and_then(|index| self.session.row_key(index).cloned());
	}

	/// Company whose region is currently revealed, independent of selection.
	pub(crate) fn revealed_company(&self) -> Option<&Company> {
		let key = self.revealed_key.as_ref()?;
		self.session
			.companies()
			.iter()
			.enumerate()
			.find(|(index, _)| self.session.row_key(*index) == Some(key))
			.map(|(_, company)| company)
	}

	fn restore_selection(&mut self) {
		let len = self.visible_len();
		if len == 0 {
			self.table_state.select(None);
			return;
		}

		let visible = self.session.visible_indices().to_vec();
		let remembered = self.selected_key.as_ref().and_then(|key| {
			visible
				.iter()
				.position(|&index| self.session.row_key(index) == Some(key))
		});

		match remembered {
			Some(row) => self.table_state.select(Some(row)),
			None => self.select_row(Some(0)),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::types::Company;

	fn ready_app() -> App<'static> {
		let mut app = App::new(RegionLabeler::default(), "");
		app.session.apply_load(Ok(vec![
			Company::new("Alpha Gas Co", "010-1111-2222", "Seoul Gangnam-gu", "gas", "A"),
			Company::new("Beta Build", "051-000-0000", "Busan Haeundae-gu", "civil", "B"),
			Company::new("Gamma Steel", "02-333-4444", "Seoul Mapo-gu", "steel", "C"),
		]));
		app.sync_query();
		app
	}

	#[test]
	fn first_row_is_selected_once_ready() {
		let mut app = ready_app();
		assert_eq!(app.table_state.selected(), Some(0));
		assert_eq!(
			app.selected_company().map(|company| company.name),
			Some("Alpha Gas Co".to_string())
		);
	}

	#[test]
	fn selection_follows_company_across_queries() {
		let mut app = ready_app();
		app.select_row(Some(2));
		app.search_input = SearchInput::new("seoul");
		app.sync_query();
		assert_eq!(app.table_state.selected(), Some(1));
		assert_eq!(
			app.selected_company().map(|company| company.name),
			Some("Gamma Steel".to_string())
		);
	}

	#[test]
	fn selection_clears_when_nothing_matches() {
		let mut app = ready_app();
		app.search_input = SearchInput::new("incheon");
		app.sync_query();
		assert_eq!(app.table_state.selected(), None);
		assert!(app.selected_company().is_none());
	}
}
