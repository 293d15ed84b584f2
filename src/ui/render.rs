use ratatui::{
	Frame,
	layout::{Constraint, Layout, Margin, Rect},
};

use super::App;
use super::components::{
	CardsContext, PromptContext, RevealContext, render_cards, render_empty, render_failure,
	render_loading, render_logs, render_prompt, render_reveal, render_title,
};
use crate::session::LoadState;

impl<'a> App<'a> {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area();
		let [title_area, body] = Layout::vertical([Constraint::Length(1), Constraint::Min(1)])
			.areas(area);
		render_title(frame, title_area, &self.ui.title, &self.theme);

		let main = if self.show_logs {
			let [main, logs] =
				Layout::vertical([Constraint::Min(3), Constraint::Percentage(40)]).areas(body);
			render_logs(frame, logs, &self.log_state, &self.theme);
			main
		} else {
			body
		};
		let main = main.inner(Margin {
			vertical: 0,
			horizontal: 1,
		});

		match self.session.load_state() {
			LoadState::Loading => render_loading(
				frame,
				main,
				&self.ui.loading_label,
				&self.throbber_state,
				&self.theme,
			),
			LoadState::Failed(message) => render_failure(frame, main, message, &self.theme),
			LoadState::Ready(_) => {}
		}
		if self.session.load_state().companies().is_some() {
			self.render_directory(frame, main);
		}
	}

	fn render_directory(&mut self, frame: &mut Frame, area: Rect) {
		let [prompt_area, _, cards_area] = Layout::vertical([
			Constraint::Length(1),
			Constraint::Length(1),
			Constraint::Min(1),
		])
		.areas(area);

		let visible = self.session.visible_indices().to_vec();
		render_prompt(
			frame,
			prompt_area,
			PromptContext {
				search_input: &self.search_input,
				label: &self.ui.search_label,
				visible: visible.len(),
				total: self.session.companies().len(),
				theme: &self.theme,
			},
		);

		render_cards(
			frame,
			cards_area,
			&mut self.table_state,
			CardsContext {
				companies: self.session.companies(),
				visible: &visible,
				headers: &self.ui.headers,
				labeler: self.session.labeler(),
				theme: &self.theme,
			},
		);

		if visible.is_empty() {
			const HEADER_AND_DIVIDER_HEIGHT: u16 = 2;
			if cards_area.height > HEADER_AND_DIVIDER_HEIGHT {
				let mut message_area = cards_area;
				message_area.y += HEADER_AND_DIVIDER_HEIGHT;
				message_area.height -= HEADER_AND_DIVIDER_HEIGHT;
				render_empty(frame, message_area, &self.ui.empty_label, &self.theme);
			}
		}

		if let Some(region) = self.session.disclosure().revealed() {
			let company = self.revealed_company();
			render_reveal(
				frame,
				area,
				RevealContext {
					region,
					company,
					theme: &self.theme,
				},
			);
		}
	}
}
