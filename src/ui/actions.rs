use anyhow::Result;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::App;
use super::state::BrowseOutcome;
use crate::session::LoadState;

const PAGE_ROWS: usize = 10;

impl<'a> App<'a> {
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Result<Option<BrowseOutcome>> {
		if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
			return Ok(Some(self.outcome(false)));
		}

		match key.code {
			KeyCode::F(2) => {
				self.show_logs = !self.show_logs;
				return Ok(None);
			}
			KeyCode::Esc if self.session.disclosure().is_revealed() => {
				self.session.dismiss();
				self.revealed_key = None;
				return Ok(None);
			}
			KeyCode::Esc => return Ok(Some(self.outcome(false))),
			_ => {}
		}

		if !matches!(self.session.load_state(), LoadState::Ready(_)) {
			return Ok(None);
		}

		match key.code {
			KeyCode::Enter => self.reveal_selected(),
			KeyCode::Tab => return Ok(Some(self.outcome(true))),
			KeyCode::Up => self.move_selection_by(-1),
			KeyCode::Down => self.move_selection_by(1),
			KeyCode::PageUp => self.move_selection_by(-(PAGE_ROWS as isize)),
			KeyCode::PageDown => self.move_selection_by(PAGE_ROWS as isize),
			_ => {
				if self.search_input.input(key) {
					self.sync_query();
				}
			}
		}
		Ok(None)
	}

	fn reveal_selected(&mut self) {
		let Some(index) = self.selected_index() else {
			return;
		};
		let Some(company) = self.session.companies().get(index) else {
			return;
		};
		log::debug!("revealing region for {}", company.name);
		let region = company.region.clone();
		self.revealed_key = self.session.row_key(index).cloned();
		self.session.request_reveal(region);
	}

	fn move_selection_by(&mut self, delta: isize) {
		let len = self.visible_len();
		if len == 0 {
			return;
		}
		let current = self.table_state.selected().unwrap_or(0);
		let target = current.saturating_add_signed(delta).min(len - 1);
		self.select_row(Some(target));
	}

	fn outcome(&mut self, accepted: bool) -> BrowseOutcome {
		let selection = if accepted {
			self.selected_company()
		} else {
			None
		};
		BrowseOutcome {
			accepted,
			query: self.session.query().to_string(),
			selection,
		}
	}
}
