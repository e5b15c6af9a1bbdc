//! Domain types for portrait candidates and probe results.

use serde::{Deserialize, Serialize};

/// Name of an image rendition on the content host (e.g. `standard_xlarge`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageSize(String);

impl ImageSize {
    /// Rendition used when the caller does not ask for one.
    pub const DEFAULT: &'static str = "standard_xlarge";

    /// Rendition used for cache warming.
    pub const PRELOAD: &'static str = "standard_medium";

    /// Creates a size from any string-like input.
    #[must_use]
    pub fn new(size: impl Into<String>) -> Self {
        Self(size.into())
    }

    /// Returns the inner string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ImageSize {
    fn default() -> Self {
        Self::new(Self::DEFAULT)
    }
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ImageSize {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ImageSize {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// One candidate URL considered during resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSource {
    /// Candidate URL.
    pub url: String,
    /// Lower values are tried first.
    pub priority: u32,
    /// Human-readable origin, used in diagnostics.
    pub label: String,
}

impl ImageSource {
    /// Creates a new candidate.
    #[must_use]
    pub fn new(url: impl Into<String>, priority: u32, label: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            priority,
            label: label.into(),
        }
    }
}

/// Pixel dimensions reported by a successful image load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageDimensions {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl ImageDimensions {
    /// Creates new dimensions.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns true if both sides are strictly larger than `min`.
    #[must_use]
    pub const fn exceeds(&self, min: u32) -> bool {
        self.width > min && self.height > min
    }
}

impl std::fmt::Display for ImageDimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
