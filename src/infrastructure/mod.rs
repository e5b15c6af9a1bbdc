//! Infrastructure layer with external service adapters.

/// Character payload shaping and demo data.
pub mod catalog;
/// Application configuration.
pub mod config;
/// Image handling (probing, content-host URLs).
pub mod image;

pub use catalog::{demo_characters, filter_name_starts_with, parse_character_response};
pub use config::{AppConfig, CliArgs, LogLevel, ResolverConfig};
pub use image::HttpImageProbe;
