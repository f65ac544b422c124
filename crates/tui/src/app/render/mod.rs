use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Margin, Rect};
use ratatui::text::{Line, Span};

use super::App;
use crate::components::{SLIDER_HEIGHT, StatusLine, render_hits, render_range_slider, render_status};

const KEY_HINTS: &str = "↑↓ facet  ←→ move  space handle  enter apply  esc cancel";

/// Rows taken by one slider including the blank row above it.
const SLIDER_SLOT: u16 = SLIDER_HEIGHT + 1;

impl App {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});

		let slider_rows = u16::try_from(self.sliders.len())
			.unwrap_or(u16::MAX)
			.saturating_mul(SLIDER_SLOT);
		let [title_area, sliders_area, hits_area, footer_area] = Layout::vertical([
			Constraint::Length(1),
			Constraint::Length(slider_rows),
			Constraint::Min(0),
			Constraint::Length(1),
		])
		.areas(area);

		self.render_title(frame, title_area);
		self.render_sliders(frame, sliders_area);

		let hits = self
			.client
			.results()
			.map_or(&[][..], |results| results.hits.as_slice());
		render_hits(frame, hits_area, hits, &self.theme);

		frame.buffer_mut().set_line(
			footer_area.x,
			footer_area.y,
			&Line::from(Span::styled(KEY_HINTS, self.theme.muted)),
			footer_area.width,
		);
	}

	fn render_title(&self, frame: &mut Frame, area: Rect) {
		let documents = self.client.document_count();
		let summary = match self.client.results() {
			Some(results) => format!("{} of {documents} documents", results.total),
			None => format!("{documents} documents"),
		};
		render_status(
			frame,
			area,
			StatusLine {
				label: &self.options.title,
				label_style: self.theme.header,
				progress_text: &summary,
				loading: self.client.is_loading(),
				throbber_state: &self.throbber_state,
			},
			&self.theme,
		);
	}

	fn render_sliders(&mut self, frame: &mut Frame, area: Rect) {
		let mut y = area.y;
		for (index, slider) in self.sliders.iter_mut().enumerate() {
			y = y.saturating_add(1);
			let wanted = Rect::new(area.x, y, area.width, SLIDER_HEIGHT);
			let slot = wanted.intersection(area);
			render_range_slider(
				frame,
				slot,
				slider,
				index == self.focused,
				&self.theme,
				&self.throbber_state,
			);
			y = y.saturating_add(SLIDER_HEIGHT);
		}
	}
}
