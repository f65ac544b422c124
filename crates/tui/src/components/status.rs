use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use throbber_widgets_tui::{Throbber, ThrobberState};
use unicode_width::UnicodeWidthStr;

use crate::style::Theme;

/// Argument bundle for a status row.
pub struct StatusLine<'a> {
	/// Text shown on the left.
	pub label: &'a str,
	pub label_style: Style,
	/// Search summary shown on the right.
	pub progress_text: &'a str,
	/// Whether a search is still in flight.
	pub loading: bool,
	/// Spinner animation state.
	pub throbber_state: &'a ThrobberState,
}

/// Render a label on the left and the search summary on the right of `area`.
///
/// The summary yields to the label when the row is too narrow for both.
pub fn render_status(frame: &mut Frame, area: Rect, status: StatusLine<'_>, theme: &Theme) {
	if area.width == 0 || area.height == 0 {
		return;
	}
	let StatusLine {
		label,
		label_style,
		progress_text,
		loading,
		throbber_state,
	} = status;

	let buffer = frame.buffer_mut();
	if !label.is_empty() {
		buffer.set_line(
			area.left(),
			area.top(),
			&Line::from(Span::styled(label.to_string(), label_style)),
			area.width,
		);
	}

	let mut line = Line::default();
	if loading {
		let spinner = Throbber::default()
			.style(theme.muted)
			.throbber_style(theme.muted);
		line.spans.push(spinner.to_symbol_span(throbber_state));
	}
	line.spans
		.push(Span::styled(progress_text.to_string(), theme.muted));

	let line_width = u16::try_from(line.width()).unwrap_or(u16::MAX);
	if line_width == 0 {
		return;
	}

	let start_x = area.right().saturating_sub(line_width).max(area.left());
	let label_width = u16::try_from(label.width()).unwrap_or(u16::MAX);
	if label_width > 0 {
		let min_start = area.left().saturating_add(label_width).saturating_add(3);
		if start_x < min_start {
			return;
		}
	}

	let max_width = area.right().saturating_sub(start_x).min(line_width);
	buffer.set_line(start_x, area.top(), &line, max_width);
}
