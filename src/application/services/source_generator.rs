//! Builds the ordered candidate list for one resolution request.

use crate::domain::entities::{CharacterRef, ImageSize, ImageSource};
use crate::infrastructure::image::{
    ALTERNATE_SIZES, rendition_url, rewrite_to_secondary_host, thumbnail_url,
};

use super::curated::CuratedCatalog;

/// Priority of the requested rendition of the primary image.
pub const PRIMARY_PRIORITY: u32 = 1;
/// Priority of the first alternate rendition; later ones follow.
pub const ALTERNATE_SIZE_BASE_PRIORITY: u32 = 2;
/// Priority of the secondary-host rewrite.
pub const SECONDARY_HOST_PRIORITY: u32 = 10;
/// Priority of the first curated portrait; later ones follow.
pub const CURATED_BASE_PRIORITY: u32 = 20;

/// Generates prioritized candidates for a character.
#[derive(Debug, Clone, Default)]
pub struct SourceGenerator {
    curated: CuratedCatalog,
}

impl SourceGenerator {
    /// Creates a generator backed by `curated`.
    #[must_use]
    pub const fn new(curated: CuratedCatalog) -> Self {
        Self { curated }
    }

    /// Candidates for `character` at `size`, lowest priority first.
    #[must_use]
    pub fn generate(&self, character: &CharacterRef, size: &ImageSize) -> Vec<ImageSource> {
        let thumb = &character.thumbnail;
        let mut sources = Vec::new();

        if thumb.is_complete() {
            sources.push(ImageSource::new(
                thumbnail_url(thumb, size),
                PRIMARY_PRIORITY,
                "primary",
            ));

            for (index, alt) in (0u32..).zip(ALTERNATE_SIZES) {
                if alt == size.as_str() {
                    continue;
                }
                sources.push(ImageSource::new(
                    rendition_url(&thumb.path, alt, &thumb.extension),
                    ALTERNATE_SIZE_BASE_PRIORITY + index,
                    format!("primary ({alt})"),
                ));
            }
        }

        if thumb.has_path() {
            let alt_path = rewrite_to_secondary_host(&thumb.path);
            sources.push(ImageSource::new(
                rendition_url(&alt_path, size.as_str(), &thumb.extension),
                SECONDARY_HOST_PRIORITY,
                "secondary host",
            ));
        }

        for (index, url) in (0u32..).zip(self.curated.lookup(&character.name)) {
            sources.push(ImageSource::new(
                url,
                CURATED_BASE_PRIORITY + index,
                "curated",
            ));
        }

        sources.sort_by_key(|s| s.priority);
        sources
    }
}
