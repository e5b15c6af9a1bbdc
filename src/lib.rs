//! Portrait resolver - finds a displayable image for every character.
//!
//! Candidates are tried in priority order, each validated by an actual
//! load, with successes and failures cached for the process lifetime and a
//! generated placeholder when nothing loads.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing the resolution engine.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing adapters for external services.
pub mod infrastructure;

pub use application::{CacheStats, Resolution, ResolveImageUseCase};
pub use domain::{CharacterRef, ImageSize, Thumbnail};

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "portrait-resolver";
