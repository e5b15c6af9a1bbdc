//! Portrait resolution building blocks.

pub mod curated;
pub mod fallback;
pub mod image_validator;
pub mod resolution_cache;
pub mod source_generator;

pub use curated::CuratedCatalog;
pub use fallback::{FallbackImage, synthesize};
pub use image_validator::ImageValidator;
pub use resolution_cache::{CacheStats, ResolutionCache};
pub use source_generator::SourceGenerator;
