//! Visual styling utilities.
//!
//! Themes map the slider's zone tones and handle states onto terminal styles.

/// Theme definitions, built-in themes and lookup by name.
pub mod theme;

pub use theme::{Theme, ThemeRegistration, builtin_themes, by_name, default_theme, names};
