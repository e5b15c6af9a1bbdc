//! Curated portrait entries keyed by character name.

use serde::{Deserialize, Serialize};

/// Hand-picked portrait URLs for one character name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CuratedEntry {
    /// Lowercase lookup key matched against display names.
    pub name: String,
    /// Portrait URLs in preference order.
    pub urls: Vec<String>,
}

impl CuratedEntry {
    /// Creates a new entry; the key is lowercased.
    #[must_use]
    pub fn new<I, S>(name: &str, urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.to_lowercase(),
            urls: urls.into_iter().map(Into::into).collect(),
        }
    }
}
