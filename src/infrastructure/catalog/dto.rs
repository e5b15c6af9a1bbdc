use serde::Deserialize;

use crate::domain::entities::{CharacterRef, Thumbnail};

/// Envelope of a character list response.
#[derive(Debug, Deserialize)]
pub struct CharacterDataWrapper {
    /// HTTP-like status code echoed in the body.
    #[serde(default)]
    pub code: Option<u16>,
    /// Paged result container.
    pub data: CharacterDataContainer,
}

/// Paged result container.
#[derive(Debug, Deserialize)]
pub struct CharacterDataContainer {
    /// Offset of the first result.
    #[serde(default)]
    pub offset: u32,
    /// Total results available upstream.
    #[serde(default)]
    pub total: u32,
    /// Characters on this page.
    #[serde(default)]
    pub results: Vec<CharacterResponse>,
}

/// Upstream character record. Fields the resolver does not need are ignored.
#[derive(Debug, Deserialize)]
pub struct CharacterResponse {
    /// Character ID.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Description, sometimes null upstream.
    #[serde(default)]
    pub description: Option<String>,
    /// Primary image, sometimes missing upstream.
    #[serde(default)]
    pub thumbnail: Option<ThumbnailResponse>,
}

/// Upstream image locator.
#[derive(Debug, Deserialize)]
pub struct ThumbnailResponse {
    /// Base path.
    #[serde(default)]
    pub path: String,
    /// File extension.
    #[serde(default)]
    pub extension: String,
}

impl From<CharacterResponse> for CharacterRef {
    fn from(value: CharacterResponse) -> Self {
        let thumbnail = value
            .thumbnail
            .map(|t| Thumbnail::new(t.path, t.extension))
            .unwrap_or_default();

        Self::new(
            value.id,
            value.name,
            value.description.unwrap_or_default(),
            thumbnail,
        )
    }
}
