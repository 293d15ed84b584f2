use ratatui::style::{Color, Modifier, Style};

/// Colour scheme applied to the terminal interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	pub header: Style,
	pub row_highlight: Style,
	pub prompt: Style,
	pub empty: Style,
	pub grade: Style,
	pub link: Style,
	pub error: Style,
}

impl Theme {
	#[must_use]
	pub fn header_style(&self) -> Style {
		self.header
	}

	#[must_use]
	pub fn row_highlight_style(&self) -> Style {
		self.row_highlight
	}

	#[must_use]
	pub fn prompt_style(&self) -> Style {
		self.prompt
	}

	#[must_use]
	pub fn empty_style(&self) -> Style {
		self.empty
	}

	#[must_use]
	pub fn grade_style(&self) -> Style {
		self.grade
	}

	#[must_use]
	pub fn link_style(&self) -> Style {
		self.link
	}

	#[must_use]
	pub fn error_style(&self) -> Style {
		self.error
	}

	#[must_use]
	pub fn header_bg(&self) -> Color {
		self.header.bg.unwrap_or(Color::Reset)
	}

	#[must_use]
	pub fn header_fg(&self) -> Color {
		self.header.fg.unwrap_or(Color::Reset)
	}
}

impl Default for Theme {
	fn default() -> Self {
		SLATE
	}
}

pub const SLATE: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(226, 232, 240))
		.bg(Color::Rgb(15, 23, 42)),
	row_highlight: Style::new()
		.bg(Color::Rgb(30, 41, 59))
		.fg(Color::Rgb(250, 204, 21)),
	prompt: Style::new().fg(Color::LightCyan),
	empty: Style::new().fg(Color::DarkGray),
	grade: Style::new().fg(Color::Gray),
	link: Style::new().fg(Color::LightBlue),
	error: Style::new().fg(Color::LightRed).add_modifier(Modifier::BOLD),
};

pub const LIGHT: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.bg(Color::Rgb(226, 232, 240)),
	row_highlight: Style::new()
		.bg(Color::Rgb(200, 200, 200))
		.fg(Color::Rgb(120, 120, 0)),
	prompt: Style::new().fg(Color::Rgb(0, 102, 153)),
	empty: Style::new().fg(Color::Rgb(100, 100, 100)),
	grade: Style::new().fg(Color::Rgb(90, 90, 90)),
	link: Style::new().fg(Color::Rgb(25, 118, 210)),
	error: Style::new()
		.fg(Color::Rgb(176, 0, 32))
		.add_modifier(Modifier::BOLD),
};

const BUILT_IN: &[(&str, Theme)] = &[("slate", SLATE), ("light", LIGHT)];

/// Names of the bundled themes.
#[must_use]
pub fn names() -> Vec<&'static str> {
	BUILT_IN.iter().map(|(name, _)| *name).collect()
}

/// Look up a bundled theme, ignoring case and surrounding whitespace.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	let wanted = name.trim();
	BUILT_IN
		.iter()
		.find(|(candidate, _)| candidate.eq_ignore_ascii_case(wanted))
		.map(|(_, theme)| *theme)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn lookup_ignores_case() {
		assert_eq!(by_name(" Light "), Some(LIGHT));
		assert_eq!(by_name("SLATE"), Some(SLATE));
		assert_eq!(by_name("solarized"), None);
	}

	#[test]
	fn default_theme_is_listed_first() {
		assert_eq!(names().first(), Some(&"slate"));
		assert_eq!(Theme::default(), SLATE);
	}
}
