use facet_range_core::{Handle, levels::zone_tone_at};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use throbber_widgets_tui::{Throbber, ThrobberState};

use super::state::{RangeSliderFacet, SliderPhase, column_for_value, value_at_column};
use crate::style::Theme;

/// Rows used by one slider: heading, track and value label.
pub const SLIDER_HEIGHT: u16 = 3;

const TRACK_SYMBOL: &str = "━";
const HANDLE_SYMBOL: &str = "●";

/// Render `slider` into `area` and remember where its track landed so pointer
/// input can be mapped back to values.
pub fn render_range_slider(
	frame: &mut Frame,
	area: Rect,
	slider: &mut RangeSliderFacet,
	focused: bool,
	theme: &Theme,
	throbber_state: &ThrobberState,
) {
	slider.track_area = None;
	if area.width == 0 || area.height == 0 {
		return;
	}

	render_heading(frame, area, slider, focused, theme, throbber_state);

	if area.height < 2 {
		return;
	}
	let track = Rect {
		x: area.x,
		y: area.y + 1,
		width: area.width,
		height: 1,
	};
	render_track(frame, track, slider, focused, theme);
	slider.track_area = Some(track);

	if area.height >= SLIDER_HEIGHT {
		render_value_label(frame, area, slider, theme);
	}
}

fn render_heading(
	frame: &mut Frame,
	area: Rect,
	slider: &RangeSliderFacet,
	focused: bool,
	theme: &Theme,
	throbber_state: &ThrobberState,
) {
	let style = if focused {
		theme.heading_focused()
	} else {
		theme.heading
	};
	let mut line = Line::from(Span::styled(slider.facet().label.clone(), style));
	if slider.is_loading() {
		line.spans.push(Span::raw(" "));
		let spinner = Throbber::default()
			.style(theme.muted)
			.throbber_style(theme.muted);
		line.spans.push(spinner.to_symbol_span(throbber_state));
	}
	frame
		.buffer_mut()
		.set_line(area.x, area.y, &line, area.width);
}

fn render_track(frame: &mut Frame, track: Rect, slider: &RangeSliderFacet, focused: bool, theme: &Theme) {
	let levels = slider.levels();
	let value = slider.value();
	let low = track.x + column_for_value(track.width, value.low());
	let high = track.x + column_for_value(track.width, value.high());
	let active = focused.then(|| slider.active_handle());

	let buffer = frame.buffer_mut();
	for column in track.left()..track.right() {
		let tone = zone_tone_at(levels, value_at_column(track, column));
		buffer[(column, track.y)]
			.set_symbol(TRACK_SYMBOL)
			.set_style(theme.zone_style(tone));
	}

	// When both handles share a cell the active one is drawn on top.
	let mut handles = [(Handle::Low, low), (Handle::High, high)];
	if active == Some(Handle::Low) {
		handles.reverse();
	}
	for (handle, column) in handles {
		let style = if active == Some(handle) {
			theme.handle_active
		} else {
			theme.handle
		};
		buffer[(column, track.y)]
			.set_symbol(HANDLE_SYMBOL)
			.set_style(style);
	}
}

fn render_value_label(frame: &mut Frame, area: Rect, slider: &RangeSliderFacet, theme: &Theme) {
	let value = slider.value();
	let mut text = format!("{} – {}", value.low(), value.high());
	if slider.phase() == SliderPhase::Dragging {
		text.push_str(" …");
	}
	frame
		.buffer_mut()
		.set_stringn(area.x, area.y + 2, text, area.width as usize, theme.muted);
}

#[cfg(test)]
mod tests {
	use std::time::{Duration, Instant};

	use facet_range_core::{DualRange, Entry, Facet, FilterStore, FilterSubscription, RangeFilter, Scheduler, SearchManager, ZoneTone};
	use ratatui::Terminal;
	use ratatui::backend::TestBackend;
	use ratatui::buffer::Buffer;
	use ratatui::style::Color;

	use super::*;
	use crate::components::range_slider::state::CommitAction;

	#[derive(Default)]
	struct StoreOnly(FilterStore);

	impl SearchManager for StoreOnly {
		fn filter_by_id(&self, id: &str) -> Option<RangeFilter> {
			self.0.get(id).cloned()
		}

		fn set_filter(&mut self, filter: RangeFilter) {
			self.0.set(filter);
		}

		fn search(&mut self) {}

		fn subscribe(&mut self, id: &str) -> FilterSubscription {
			self.0.subscribe(id)
		}
	}

	fn slider(selection: Option<(i64, i64)>, scheduler: &Scheduler<CommitAction>) -> RangeSliderFacet {
		let mut manager = StoreOnly::default();
		if let Some((min, max)) = selection {
			manager.set_filter(RangeFilter::new("rating", min, max));
		}
		let facet = Facet::new("rating", "Rating").with_entries([
			Entry::new("10", 0),
			Entry::new("20", 3),
			Entry::new("60", 2),
			Entry::new("80", 0),
		]);
		RangeSliderFacet::mount(
			facet,
			false,
			&mut manager,
			scheduler.clone(),
			Duration::from_millis(400),
		)
	}

	fn draw(slider: &mut RangeSliderFacet, width: u16, focused: bool) -> Buffer {
		let theme = Theme::default();
		let throbber = ThrobberState::default();
		let mut terminal = Terminal::new(TestBackend::new(width, SLIDER_HEIGHT)).expect("terminal");
		terminal
			.draw(|frame| {
				let area = frame.area();
				render_range_slider(frame, area, slider, focused, &theme, &throbber);
			})
			.expect("draw");
		terminal.backend().buffer().clone()
	}

	fn buffer_to_string(buf: &Buffer) -> String {
		let mut lines = Vec::new();
		for y in 0..buf.area.height {
			let mut line = String::new();
			for x in 0..buf.area.width {
				line.push_str(buf[(x, y)].symbol());
			}
			lines.push(line.trim_end().to_string());
		}
		lines.join("\n")
	}

	#[test]
	fn renders_heading_track_and_values() {
		let scheduler = Scheduler::new();
		let mut slider = slider(Some((20, 60)), &scheduler);
		let buffer = draw(&mut slider, 21, false);

		insta::assert_snapshot!(buffer_to_string(&buffer), @r"
		Rating
		━━━━●━━━━━━━●━━━━━━━━
		20 – 60
		");
		assert_eq!(slider.track_area, Some(Rect::new(0, 1, 21, 1)));
	}

	fn fg(buffer: &Buffer, column: u16) -> Option<Color> {
		Some(buffer[(column, 1)].fg)
	}

	#[test]
	fn track_cells_follow_level_zones() {
		let scheduler = Scheduler::new();
		let mut slider = slider(None, &scheduler);
		let buffer = draw(&mut slider, 21, false);
		let theme = Theme::default();
		let warning = theme.zone_style(ZoneTone::Warning).fg;
		let primary = theme.zone_style(ZoneTone::Primary).fg;

		// Columns map to multiples of five; levels span 20..=60.
		assert_eq!(fg(&buffer, 2), warning);
		assert_eq!(fg(&buffer, 3), warning);
		assert_eq!(fg(&buffer, 4), primary);
		assert_eq!(fg(&buffer, 12), primary);
		assert_eq!(fg(&buffer, 13), warning);

		// Handles sit on both ends of the full range.
		assert_eq!(buffer[(0, 1)].symbol(), HANDLE_SYMBOL);
		assert_eq!(buffer[(20, 1)].symbol(), HANDLE_SYMBOL);
		assert_eq!(fg(&buffer, 0), theme.handle.fg);
	}

	#[test]
	fn focused_slider_highlights_active_handle() {
		let scheduler = Scheduler::new();
		let mut slider = slider(Some((40, 40)), &scheduler);
		let theme = Theme::default();

		let buffer = draw(&mut slider, 21, true);
		assert_eq!(buffer[(8, 1)].symbol(), HANDLE_SYMBOL);
		assert_eq!(fg(&buffer, 8), theme.handle_active.fg);
		assert_eq!(Some(buffer[(8, 1)].bg), theme.handle_active.bg);

		slider.toggle_handle();
		let buffer = draw(&mut slider, 21, true);
		assert_eq!(fg(&buffer, 8), theme.handle_active.fg);

		let buffer = draw(&mut slider, 21, false);
		assert_eq!(fg(&buffer, 8), theme.handle.fg);
	}

	#[test]
	fn pending_commit_is_marked() {
		let scheduler = Scheduler::new();
		let mut slider = slider(None, &scheduler);
		slider.change(DualRange::new(5, 95), Instant::now());
		let text = buffer_to_string(&draw(&mut slider, 21, false));
		assert_eq!(text.lines().nth(2), Some("5 – 95 …"));
	}

	#[test]
	fn short_areas_skip_the_track() {
		let scheduler = Scheduler::new();
		let mut slider = slider(None, &scheduler);
		let theme = Theme::default();
		let throbber = ThrobberState::default();
		let mut terminal = Terminal::new(TestBackend::new(10, 1)).expect("terminal");
		terminal
			.draw(|frame| {
				let area = frame.area();
				render_range_slider(frame, area, &mut slider, false, &theme, &throbber);
			})
			.expect("draw");
		assert_eq!(slider.track_area, None);
	}
}
