use ratatui::style::{Color, Modifier, Style};

use super::types::{Theme, ThemeRegistration};

const DEFAULT_THEME: &str = "slate";

/// Get the default built-in theme.
pub fn default_theme() -> Theme {
	slate()
}

pub(super) fn registrations() -> Vec<ThemeRegistration> {
	vec![
		ThemeRegistration::new(DEFAULT_THEME, slate()).alias("dark"),
		ThemeRegistration::new("paper", paper()).alias("light"),
		ThemeRegistration::new("mono", mono()).alias("plain"),
	]
}

fn slate() -> Theme {
	Theme {
		heading: Style::new().fg(Color::White).add_modifier(Modifier::BOLD),
		primary: Style::new().fg(Color::Cyan),
		warning: Style::new().fg(Color::Yellow),
		handle: Style::new().fg(Color::White).add_modifier(Modifier::BOLD),
		handle_active: Style::new()
			.fg(Color::Black)
			.bg(Color::Cyan)
			.add_modifier(Modifier::BOLD),
		muted: Style::new().fg(Color::DarkGray),
		header: Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD),
	}
}

fn paper() -> Theme {
	Theme {
		heading: Style::new().fg(Color::Black).add_modifier(Modifier::BOLD),
		primary: Style::new().fg(Color::Blue),
		warning: Style::new().fg(Color::Red),
		handle: Style::new().fg(Color::Black).add_modifier(Modifier::BOLD),
		handle_active: Style::new()
			.fg(Color::White)
			.bg(Color::Blue)
			.add_modifier(Modifier::BOLD),
		muted: Style::new().fg(Color::Gray),
		header: Style::new().fg(Color::Blue).add_modifier(Modifier::BOLD),
	}
}

fn mono() -> Theme {
	Theme {
		heading: Style::new().add_modifier(Modifier::BOLD),
		primary: Style::new(),
		warning: Style::new().add_modifier(Modifier::DIM),
		handle: Style::new().add_modifier(Modifier::BOLD),
		handle_active: Style::new().add_modifier(Modifier::REVERSED),
		muted: Style::new().add_modifier(Modifier::DIM),
		header: Style::new().add_modifier(Modifier::BOLD),
	}
}
