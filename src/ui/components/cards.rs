use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Cell, HighlightSpacing, Paragraph, Row, Table, TableState};

use crate::disclosure::RegionLabeler;
use crate::types::Company;
use crate::ui::style::Theme;

const HIGHLIGHT_SYMBOL: &str = "▶ ";
const TABLE_COLUMN_SPACING: u16 = 1;

/// Argument bundle for rendering the company cards.
pub struct CardsContext<'a> {
	pub companies: &'a [Company],
	pub visible: &'a [usize],
	pub headers: &'a [String; 4],
	pub labeler: RegionLabeler,
	pub theme: &'a Theme,
}

/// Render one row per visible company: grade, name, contact, short region.
pub fn render_cards(
	frame: &mut Frame,
	area: Rect,
	table_state: &mut TableState,
	context: CardsContext<'_>,
) {
	let CardsContext {
		companies,
		visible,
		headers,
		labeler,
		theme,
	} = context;

	let header = Row::new(headers.iter().map(|title| Cell::from(title.as_str())))
		.style(theme.header_style())
		.height(1)
		.bottom_margin(1);

	let rows = visible
		.iter()
		.filter_map(|&index| companies.get(index))
		.map(|company| company_row(company, labeler, theme));

	let table = Table::new(rows, column_widths())
		.header(header)
		.column_spacing(TABLE_COLUMN_SPACING)
		.highlight_spacing(HighlightSpacing::WhenSelected)
		.row_highlight_style(theme.row_highlight_style())
		.highlight_symbol(HIGHLIGHT_SYMBOL);
	frame.render_stateful_widget(table, area, table_state);

	render_header_separator(frame, area, theme, 1);
}

fn company_row<'a>(company: &'a Company, labeler: RegionLabeler, theme: &Theme) -> Row<'a> {
	Row::new(vec![
		Cell::from(Span::styled(company.grade.as_str(), theme.grade_style())),
		Cell::from(Span::styled(
			company.name.as_str(),
			Style::new().add_modifier(Modifier::BOLD),
		)),
		Cell::from(Span::styled(company.contact.as_str(), theme.link_style())),
		Cell::from(labeler.label(&company.region)),
	])
}

fn column_widths() -> [Constraint; 4] {
	[
		Constraint::Length(6),
		Constraint::Fill(2),
		Constraint::Length(15),
		Constraint::Fill(1),
	]
}

fn render_header_separator(frame: &mut Frame, area: Rect, theme: &Theme, header_height: u16) {
	if header_height >= area.height {
		return;
	}
	let width = area.width as usize;
	if width == 0 {
		return;
	}

	let sep_rect = Rect {
		x: area.x,
		y: area.y + header_height,
		width: area.width,
		height: 1,
	};
	let line = Span::styled(
		"─".repeat(width),
		Style::new().bg(theme.header_bg()).fg(theme.header_fg()),
	);
	frame.render_widget(Paragraph::new(Text::from(Line::from(line))), sep_rect);
}
