//! Domain layer with core entities, errors, and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Port definitions.
pub mod ports;

pub use entities::{CharacterRef, CuratedEntry, ImageDimensions, ImageSize, ImageSource, Thumbnail};
pub use errors::{CatalogError, ConfigError, ProbeError};
pub use ports::ImageProbePort;
