//! Domain error types.

mod config_error;
mod probe_error;

pub use config_error::{CatalogError, ConfigError};
pub use probe_error::ProbeError;
