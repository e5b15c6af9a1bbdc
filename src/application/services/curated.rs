//! Curated high-quality portraits looked up by character name.

use crate::domain::entities::CuratedEntry;

const BUILTIN: &[(&str, &[&str])] = &[
    (
        "spider-man",
        &[
            "https://cdn.marvel.com/content/1x/spider-man_lob_crd_01.jpg",
            "https://terrigen-cdn-dev.marvel.com/content/prod/1x/spider-man_lob_crd_01.jpg",
        ],
    ),
    (
        "iron man",
        &[
            "https://cdn.marvel.com/content/1x/iron_man_lob_crd_01.jpg",
            "https://terrigen-cdn-dev.marvel.com/content/prod/1x/iron_man_lob_crd_01.jpg",
        ],
    ),
    (
        "captain america",
        &[
            "https://cdn.marvel.com/content/1x/captain_america_lob_crd_01.jpg",
            "https://terrigen-cdn-dev.marvel.com/content/prod/1x/captain_america_lob_crd_01.jpg",
        ],
    ),
    (
        "thor",
        &[
            "https://cdn.marvel.com/content/1x/thor_lob_crd_01.jpg",
            "https://terrigen-cdn-dev.marvel.com/content/prod/1x/thor_lob_crd_01.jpg",
        ],
    ),
    (
        "hulk",
        &[
            "https://cdn.marvel.com/content/1x/hulk_lob_crd_01.jpg",
            "https://terrigen-cdn-dev.marvel.com/content/prod/1x/hulk_lob_crd_01.jpg",
        ],
    ),
    (
        "black widow",
        &[
            "https://cdn.marvel.com/content/1x/black_widow_lob_crd_01.jpg",
            "https://terrigen-cdn-dev.marvel.com/content/prod/1x/black_widow_lob_crd_01.jpg",
        ],
    ),
    (
        "doctor strange",
        &["https://cdn.marvel.com/content/1x/doctor_strange_lob_crd_01.jpg"],
    ),
    (
        "wolverine",
        &["https://cdn.marvel.com/content/1x/wolverine_lob_crd_01.jpg"],
    ),
    (
        "deadpool",
        &["https://cdn.marvel.com/content/1x/deadpool_lob_crd_01.jpg"],
    ),
];

/// Ordered table of curated portraits.
#[derive(Debug, Clone)]
pub struct CuratedCatalog {
    entries: Vec<CuratedEntry>,
}

impl CuratedCatalog {
    /// Catalog holding only the built-in entries.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN
                .iter()
                .map(|(name, urls)| CuratedEntry::new(name, urls.iter().copied()))
                .collect(),
        }
    }

    /// Catalog with no entries at all.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends entries after the existing ones.
    #[must_use]
    pub fn with_entries(mut self, extra: impl IntoIterator<Item = CuratedEntry>) -> Self {
        self.entries.extend(extra.into_iter().map(|mut e| {
            e.name = e.name.to_lowercase();
            e
        }));
        self
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Curated URLs for a display name.
    ///
    /// The exact (case-insensitive) match comes first, followed by every
    /// entry whose key contains the name or is contained in it. An exact
    /// match therefore appears twice; callers rely on that ordering.
    #[must_use]
    pub fn lookup(&self, display_name: &str) -> Vec<String> {
        let name = display_name.to_lowercase();
        let mut urls = Vec::new();

        if let Some(exact) = self.entries.iter().find(|e| e.name == name) {
            urls.extend(exact.urls.iter().cloned());
        }

        for entry in &self.entries {
            if name.contains(&entry.name) || entry.name.contains(&name) {
                urls.extend(entry.urls.iter().cloned());
            }
        }

        urls
    }
}

impl Default for CuratedCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
