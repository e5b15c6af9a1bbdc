//! Character entity as consumed by the portrait resolver.

use serde::{Deserialize, Serialize};

/// Location of a character's primary image on the content host.
///
/// The full URL of a rendition is `{path}/{size}.{extension}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thumbnail {
    /// Base path without size suffix or extension.
    #[serde(default)]
    pub path: String,
    /// File extension without the leading dot.
    #[serde(default)]
    pub extension: String,
}

impl Thumbnail {
    /// Creates a new thumbnail locator.
    #[must_use]
    pub fn new(path: impl Into<String>, extension: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            extension: extension.into(),
        }
    }

    /// Returns true if both path and extension are present.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.path.is_empty() && !self.extension.is_empty()
    }

    /// Returns true if a path is present, regardless of extension.
    #[must_use]
    pub fn has_path(&self) -> bool {
        !self.path.is_empty()
    }
}

/// Minimal character record needed to resolve a portrait.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterRef {
    /// Upstream character identifier.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Free-form description, possibly empty.
    #[serde(default)]
    pub description: String,
    /// Primary image locator.
    #[serde(default)]
    pub thumbnail: Thumbnail,
}

impl CharacterRef {
    /// Creates a new character record.
    #[must_use]
    pub fn new(
        id: u64,
        name: impl Into<String>,
        description: impl Into<String>,
        thumbnail: Thumbnail,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            thumbnail,
        }
    }
}

impl std::fmt::Display for CharacterRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}
