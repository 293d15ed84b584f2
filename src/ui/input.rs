use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::Style;
use tui_textarea::TextArea;

/// Single-line query editor.
pub struct SearchInput<'a> {
	textarea: TextArea<'a>,
}

impl<'a> SearchInput<'a> {
	#[must_use]
	pub fn new(initial: impl Into<String>) -> Self {
		let initial = initial.into();
		let mut textarea = TextArea::new(vec![initial]);
		textarea.set_cursor_line_style(Style::default());
		textarea.move_cursor(tui_textarea::CursorMove::End);
		Self { textarea }
	}

	/// Current query text.
	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or_default()
	}

	/// Feed a key to the editor. Returns `true` when the text changed.
	///
	/// Line breaks are swallowed so the query stays on one line.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		let newline = matches!(key.code, KeyCode::Enter)
			|| (key.modifiers.contains(KeyModifiers::CONTROL)
				&& matches!(key.code, KeyCode::Char('m') | KeyCode::Char('j')));
		if newline {
			return false;
		}
		let before = self.text().to_string();
		self.textarea.input(key);
		self.text() != before
	}

	pub fn render(&self, frame: &mut Frame, area: Rect) {
		frame.render_widget(&self.textarea, area);
	}
}
