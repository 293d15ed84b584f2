use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

use crate::types::Company;
use crate::ui::style::Theme;

const MIN_POPUP_WIDTH: u16 = 24;
const POPUP_PADDING: u16 = 4;

/// Argument bundle for the full-region popup.
pub struct RevealContext<'a> {
	pub region: &'a str,
	pub company: Option<&'a Company>,
	pub theme: &'a Theme,
}

/// Overlay the full region text, centred on `area`.
pub fn render_reveal(frame: &mut Frame, area: Rect, context: RevealContext<'_>) {
	let RevealContext {
		region,
		company,
		theme,
	} = context;

	let mut lines = vec![Line::from(region)];
	let mut title = " Region ".to_string();
	if let Some(company) = company {
		title = format!(" {} ", company.name);
		lines.push(Line::default());
		lines.push(Line::from(Span::styled(company.dial_uri(), theme.link_style())));
	}

	let content_width = lines
		.iter()
		.map(Line::width)
		.chain(std::iter::once(title.width()))
		.max()
		.map(clamp_width)
		.unwrap_or_default();
	let width = content_width
		.saturating_add(POPUP_PADDING)
		.max(MIN_POPUP_WIDTH)
		.min(area.width);
	let inner_width = width.saturating_sub(POPUP_PADDING).max(1);
	let wrapped_rows = lines
		.iter()
		.map(|line| clamp_width(line.width()).div_ceil(inner_width).max(1))
		.fold(0u16, u16::saturating_add);
	let height = wrapped_rows.saturating_add(2).min(area.height);

	let popup = popup_area(area, width, height);
	let block = Block::bordered()
		.title(title)
		.border_style(theme.prompt_style());
	let body = Paragraph::new(lines)
		.block(block)
		.wrap(Wrap { trim: false });

	frame.render_widget(Clear, popup);
	frame.render_widget(body, popup);
}

/// Display widths past `u16::MAX` saturate.
fn clamp_width(width: usize) -> u16 {
	u16::try_from(width).unwrap_or(u16::MAX)
}

fn popup_area(area: Rect, width: u16, height: u16) -> Rect {
	let [vertical] = Layout::vertical([Constraint::Length(height)])
		.flex(Flex::Center)
		.areas(area);
	let [popup] = Layout::horizontal([Constraint::Length(width)])
		.flex(Flex::Center)
		.areas(vertical);
	popup
}

#[cfg(test)]
mod tests {
	use ratatui::{Terminal, backend::TestBackend};

	use super::*;

	#[test]
	fn popup_shows_full_region_and_dial_link() {
		let company = Company::new(
			"Alpha Gas Co",
			"010-1111-2222",
			"Seoul Gangnam-gu Teheran-ro 123",
			"gas",
			"A",
		);
		let theme = Theme::default();
		let mut terminal = Terminal::new(TestBackend::new(60, 12)).expect("terminal");
		terminal
			.draw(|frame| {
				let area = frame.area();
				render_reveal(
					frame,
					area,
					RevealContext {
						region: &company.region,
						company: Some(&company),
						theme: &theme,
					},
				);
			})
			.expect("draw");

		let view = terminal.backend().to_string();
		assert!(view.contains("Seoul Gangnam-gu Teheran-ro 123"));
		assert!(view.contains("tel:010-1111-2222"));
		assert!(view.contains("Alpha Gas Co"));
	}

	#[test]
	fn oversized_region_saturates_instead_of_wrapping_width() {
		assert_eq!(clamp_width(80), 80);
		assert_eq!(clamp_width(70_000), u16::MAX);

		let region = "x".repeat(70_001);
		let theme = Theme::default();
		let mut terminal = Terminal::new(TestBackend::new(40, 8)).expect("terminal");
		terminal
			.draw(|frame| {
				let area = frame.area();
				render_reveal(
					frame,
					area,
					RevealContext {
						region: &region,
						company: None,
						theme: &theme,
					},
				);
			})
			.expect("draw");

		let view = terminal.backend().to_string();
		assert!(view.lines().next().is_some_and(|line| line.contains("Region")));
		assert_eq!(view.lines().count(), 8);
		assert!(view.lines().nth(1).is_some_and(|line| line.contains("xxxx")));
	}
}
