use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::widgets::Paragraph;

use crate::ui::input::SearchInput;
use crate::ui::style::Theme;

/// Argument bundle for rendering the query row.
pub struct PromptContext<'a> {
	pub search_input: &'a SearchInput<'a>,
	pub label: &'a str,
	pub visible: usize,
	pub total: usize,
	pub theme: &'a Theme,
}

/// Render `label > query` with the visible/total count on the right.
pub fn render_prompt(frame: &mut Frame, area: Rect, context: PromptContext<'_>) {
	let PromptContext {
		search_input,
		label,
		visible,
		total,
		theme,
	} = context;

	let prompt = format!("{label} > ");
	let count = format!("{visible}/{total}");
	let horizontal = Layout::default()
		.direction(Direction::Horizontal)
		.constraints([
			Constraint::Length(prompt.chars().count() as u16),
			Constraint::Min(1),
			Constraint::Length(count.len() as u16 + 1),
		])
		.split(area);

	frame.render_widget(
		Paragraph::new(prompt).style(theme.prompt_style()),
		horizontal[0],
	);
	search_input.render(frame, horizontal[1]);
	frame.render_widget(
		Paragraph::new(count)
			.alignment(Alignment::Right)
			.style(theme.empty_style()),
		horizontal[2],
	);
}
