//! Configuration loading and resolution utilities.
//!
//! Configuration files, `FACET_RANGE__*` environment variables and CLI flags
//! are layered by `config`, deserialized into a raw mirror, then validated
//! into the [`ResolvedConfig`] used by the application.

mod loader;
mod raw;
mod resolved;
mod sources;

pub use loader::load;
pub use resolved::ResolvedConfig;
