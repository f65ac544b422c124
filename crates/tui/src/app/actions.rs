use std::time::Instant;

use facet_range_core::{FilterOutcome, RANGE_MAX, RANGE_MIN};
use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::App;

impl App {
	/// Process a keyboard event and return the outcome if the user exits.
	pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Option<FilterOutcome> {
		match key.code {
			KeyCode::Esc | KeyCode::Char('q') => return Some(self.cancel()),
			KeyCode::Enter => return Some(self.accept()),
			KeyCode::Up | KeyCode::BackTab => self.focus_prev(),
			KeyCode::Down | KeyCode::Tab => self.focus_next(),
			KeyCode::Left | KeyCode::Right => {
				let step = if key.modifiers.contains(KeyModifiers::SHIFT) {
					self.options.large_step
				} else {
					self.options.step
				};
				let delta = if key.code == KeyCode::Left { -step } else { step };
				if let Some(slider) = self.focused_mut() {
					slider.nudge(delta, now);
				}
			}
			KeyCode::Char(' ') => {
				if let Some(slider) = self.focused_mut() {
					slider.toggle_handle();
				}
			}
			KeyCode::Home => {
				if let Some(slider) = self.focused_mut() {
					slider.jump(RANGE_MIN, now);
				}
			}
			KeyCode::End => {
				if let Some(slider) = self.focused_mut() {
					slider.jump(RANGE_MAX, now);
				}
			}
			_ => {}
		}
		None
	}

	pub fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) {
		match mouse.kind {
			MouseEventKind::Down(MouseButton::Left) => {
				let pressed = self
					.sliders
					.iter_mut()
					.position(|slider| slider.press(mouse.column, mouse.row, now));
				if let Some(index) = pressed {
					self.focused = index;
				}
			}
			MouseEventKind::Drag(MouseButton::Left) => {
				for slider in &mut self.sliders {
					if slider.drag(mouse.column, now) {
						break;
					}
				}
			}
			MouseEventKind::Up(MouseButton::Left) => {
				for slider in &mut self.sliders {
					slider.release();
				}
			}
			MouseEventKind::ScrollUp => self.focus_prev(),
			MouseEventKind::ScrollDown => self.focus_next(),
			_ => {}
		}
	}
}
