use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::{Block, Clear};
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerWidget, TuiWidgetState};

use crate::logging;
use crate::ui::style::Theme;

/// Render captured log records in a bordered pane.
pub fn render_logs(frame: &mut Frame, area: Rect, state: &TuiWidgetState, theme: &Theme) {
	frame.render_widget(Clear, area);
	if area.width == 0 || area.height == 0 {
		return;
	}

	logging::pump();

	let widget = TuiLoggerWidget::default()
		.block(
			Block::bordered()
				.title(" Log (F2 to close) ")
				.border_style(theme.prompt_style()),
		)
		.output_level(Some(TuiLoggerLevelOutput::Abbreviated))
		.output_target(false)
		.output_file(false)
		.output_line(false)
		.state(state);
	frame.render_widget(widget, area);
}
