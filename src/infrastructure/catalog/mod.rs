//! Shapes upstream character data into [`CharacterRef`] records.

mod demo;
mod dto;

use std::path::Path;

use tracing::debug;

use crate::domain::entities::CharacterRef;
use crate::domain::errors::CatalogError;

pub use demo::{demo_characters, find_demo_character};
pub use dto::{CharacterDataContainer, CharacterDataWrapper, CharacterResponse, ThumbnailResponse};

/// Parses a character list response body.
///
/// # Errors
/// Returns error if the payload is not a valid character list.
pub fn parse_character_response(json: &str) -> Result<Vec<CharacterRef>, CatalogError> {
    let wrapper: CharacterDataWrapper = serde_json::from_str(json)?;
    debug!(
        count = wrapper.data.results.len(),
        total = wrapper.data.total,
        offset = wrapper.data.offset,
        "Parsed character payload"
    );
    Ok(wrapper.data.results.into_iter().map(Into::into).collect())
}

/// Reads and parses a character list response from disk.
///
/// # Errors
/// Returns error if the file cannot be read or parsed.
pub async fn load_characters_file(path: &Path) -> Result<Vec<CharacterRef>, CatalogError> {
    let contents = tokio::fs::read_to_string(path).await?;
    parse_character_response(&contents)
}

/// Keeps characters whose name starts with `prefix`, ignoring case.
///
/// A blank prefix keeps everything.
#[must_use]
pub fn filter_name_starts_with(characters: Vec<CharacterRef>, prefix: &str) -> Vec<CharacterRef> {
    let prefix = prefix.trim().to_lowercase();
    if prefix.is_empty() {
        return characters;
    }
    characters
        .into_iter()
        .filter(|c| c.name.to_lowercase().starts_with(&prefix))
        .collect()
}
