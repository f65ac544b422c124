use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

use super::builtins::registrations;
use super::types::{Theme, ThemeRegistration};

#[derive(Debug)]
struct ThemeEntry {
	display_name: String,
	theme: Theme,
}

#[derive(Debug, Default)]
struct ThemeRegistry {
	canonical: BTreeMap<String, ThemeEntry>,
	aliases: HashMap<String, String>,
}

impl ThemeRegistry {
	fn register(&mut self, registration: ThemeRegistration) {
		let ThemeRegistration {
			name,
			theme,
			aliases,
		} = registration;

		let normalized = normalize_name(&name);
		for alias in aliases {
			let alias = normalize_name(&alias);
			if alias != normalized {
				self.aliases.entry(alias).or_insert_with(|| normalized.clone());
			}
		}
		self.canonical.insert(
			normalized,
			ThemeEntry {
				display_name: name,
				theme,
			},
		);
	}

	fn get(&self, name: &str) -> Option<Theme> {
		let normalized = normalize_name(name);

		if let Some(entry) = self.canonical.get(&normalized) {
			return Some(entry.theme);
		}

		let target = self.aliases.get(&normalized)?;
		self.canonical.get(target).map(|entry| entry.theme)
	}

	fn names(&self) -> Vec<String> {
		self.canonical
			.values()
			.map(|entry| entry.display_name.clone())
			.collect()
	}
}

fn registry() -> &'static ThemeRegistry {
	static REGISTRY: OnceLock<ThemeRegistry> = OnceLock::new();
	REGISTRY.get_or_init(|| {
		let mut registry = ThemeRegistry::default();
		for registration in registrations() {
			registry.register(registration);
		}
		registry
	})
}

fn normalize_name(name: &str) -> String {
	name.trim().to_ascii_lowercase()
}

/// Look up a theme by name or alias, ignoring case.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	registry().get(name)
}

/// Names of all registered themes in sorted order.
#[must_use]
pub fn names() -> Vec<String> {
	registry().names()
}
