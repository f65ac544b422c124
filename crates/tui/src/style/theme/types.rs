use facet_range_core::ZoneTone;
use ratatui::style::{Modifier, Style};

/// A theme containing styles for the slider and its surroundings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	/// Facet label above each slider.
	pub heading: Style,
	/// Track cells inside the span of values that have hits.
	pub primary: Style,
	/// Track cells outside that span.
	pub warning: Style,
	/// Handle glyphs.
	pub handle: Style,
	/// The handle that keyboard input currently moves.
	pub handle_active: Style,
	/// Secondary text such as value labels and hints.
	pub muted: Style,
	/// Title bar and borders.
	pub header: Style,
}

impl Theme {
	/// Style for a track cell of the given tone.
	#[must_use]
	pub fn zone_style(&self, tone: ZoneTone) -> Style {
		match tone {
			ZoneTone::Primary => self.primary,
			ZoneTone::Warning => self.warning,
		}
	}

	/// Heading style for a focused slider.
	#[must_use]
	pub fn heading_focused(&self) -> Style {
		self.heading.add_modifier(Modifier::UNDERLINED)
	}
}

/// Describes a theme instance that can be looked up by name.
#[derive(Debug, Clone)]
pub struct ThemeRegistration {
	/// The name of the theme.
	pub name: String,
	/// The theme configuration.
	pub theme: Theme,
	/// Alternate names for the theme.
	pub aliases: Vec<String>,
}

impl ThemeRegistration {
	/// Creates a new theme registration with the given name and theme.
	pub fn new(name: impl Into<String>, theme: Theme) -> Self {
		Self {
			name: name.into(),
			theme,
			aliases: Vec::new(),
		}
	}

	/// Adds a single alias to this theme registration.
	#[must_use]
	pub fn alias(mut self, alias: impl Into<String>) -> Self {
		self.aliases.push(alias.into());
		self
	}
}
