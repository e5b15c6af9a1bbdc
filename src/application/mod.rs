//! Application layer with the resolution engine and its use cases.

/// Engine building blocks.
pub mod services;
/// Use case implementations.
pub mod use_cases;

pub use services::{CacheStats, CuratedCatalog, ResolutionCache};
pub use use_cases::{Resolution, ResolveImageUseCase};
