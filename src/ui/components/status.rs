use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use throbber_widgets_tui::{Throbber, ThrobberState};

use crate::ui::style::Theme;

/// Render the application title across the top row.
pub fn render_title(frame: &mut Frame, area: Rect, title: &str, theme: &Theme) {
	let line = Line::from(Span::styled(format!(" {title}"), theme.header_style()));
	frame.render_widget(Paragraph::new(line).style(theme.header_style()), area);
}

/// Spinner shown while the directory is being fetched.
pub fn render_loading(
	frame: &mut Frame,
	area: Rect,
	label: &str,
	throbber_state: &ThrobberState,
	theme: &Theme,
) {
	let area = centered_line(area);
	let spinner = Throbber::default()
		.style(theme.prompt_style())
		.throbber_style(theme.prompt_style());
	let mut line = Line::from(spinner.to_symbol_span(throbber_state));
	line.spans
		.push(Span::styled(format!(" {label}"), theme.prompt_style()));
	frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

/// The user-facing failure message; the detail lives in the log pane.
pub fn render_failure(frame: &mut Frame, area: Rect, message: &str, theme: &Theme) {
	let area = centered_line(area);
	let text = Paragraph::new(message)
		.alignment(Alignment::Center)
		.style(theme.error_style());
	frame.render_widget(text, area);
}

/// Placeholder when the query matches nothing.
pub fn render_empty(frame: &mut Frame, area: Rect, label: &str, theme: &Theme) {
	let area = centered_line(area);
	let empty = Paragraph::new(label)
		.alignment(Alignment::Center)
		.style(theme.empty_style());
	frame.render_widget(empty, area);
}

fn centered_line(area: Rect) -> Rect {
	let [line] = Layout::vertical([Constraint::Length(1)])
		.flex(Flex::Center)
		.areas(area);
	line
}
