//! Portrait resolution use case.

use std::sync::Arc;

use futures_util::future::join_all;
use tracing::{debug, info, instrument, warn};

use crate::application::services::{
    CacheStats, CuratedCatalog, ImageValidator, ResolutionCache, SourceGenerator, synthesize,
};
use crate::domain::entities::{CharacterRef, ImageSize};
use crate::domain::ports::ImageProbePort;
use crate::infrastructure::config::ResolverConfig;

/// How a resolution call ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Answered from the success cache without probing.
    Cached(String),
    /// A candidate validated.
    Probed {
        /// Winning URL.
        url: String,
        /// Label of the winning candidate.
        label: String,
    },
    /// Every candidate failed; a placeholder was synthesized.
    Fallback(String),
}

impl Resolution {
    /// The resolved URL.
    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            Self::Cached(url) | Self::Fallback(url) | Self::Probed { url, .. } => url,
        }
    }

    /// Consumes the resolution, returning the URL.
    #[must_use]
    pub fn into_url(self) -> String {
        match self {
            Self::Cached(url) | Self::Fallback(url) | Self::Probed { url, .. } => url,
        }
    }

    /// Returns true if the placeholder was used.
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}

/// Resolves a displayable portrait URL for characters.
pub struct ResolveImageUseCase {
    generator: SourceGenerator,
    validator: ImageValidator,
    cache: Arc<ResolutionCache>,
    default_size: ImageSize,
    preload_size: ImageSize,
}

impl std::fmt::Debug for ResolveImageUseCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolveImageUseCase")
            .field("validator", &self.validator)
            .field("default_size", &self.default_size)
            .field("preload_size", &self.preload_size)
            .finish_non_exhaustive()
    }
}

impl ResolveImageUseCase {
    /// Creates a resolver with default settings and the built-in curated catalog.
    #[must_use]
    pub fn new(probe: Arc<dyn ImageProbePort>) -> Self {
        Self::from_config(probe, &ResolverConfig::default(), CuratedCatalog::builtin())
    }

    /// Creates a resolver from configuration.
    #[must_use]
    pub fn from_config(
        probe: Arc<dyn ImageProbePort>,
        config: &ResolverConfig,
        curated: CuratedCatalog,
    ) -> Self {
        Self {
            generator: SourceGenerator::new(curated),
            validator: ImageValidator::new(probe, config.probe_timeout(), config.min_dimension),
            cache: Arc::new(ResolutionCache::new()),
            default_size: config.default_size.clone(),
            preload_size: config.preload_size.clone(),
        }
    }

    /// Shares `cache` with other resolvers.
    #[must_use]
    pub fn with_cache(mut self, cache: Arc<ResolutionCache>) -> Self {
        self.cache = cache;
        self
    }

    /// The shared cache.
    #[must_use]
    pub fn cache(&self) -> &Arc<ResolutionCache> {
        &self.cache
    }

    /// Resolves `character` at `size`, reporting how the URL was found.
    ///
    /// Candidates are tried one at a time in priority order. URLs already
    /// known to fail are skipped without probing. When nothing validates,
    /// the placeholder is cached under the same key and returned.
    #[instrument(skip(self, character, size), fields(id = character.id, size = %size))]
    pub async fn resolve(&self, character: &CharacterRef, size: &ImageSize) -> Resolution {
        let key = ResolutionCache::key(character.id, size.as_str());

        if let Some(url) = self.cache.get(&key) {
            return Resolution::Cached(url);
        }

        let sources = self.generator.generate(character, size);
        debug!(candidates = sources.len(), "Probing portrait candidates");

        for source in sources {
            if self.cache.is_failed(&source.url) {
                debug!(url = %source.url, "Skipping known failed URL");
                continue;
            }

            if self.validator.validate(&source.url).await {
                let url = self.cache.insert(key, source.url);
                debug!(url = %url, label = %source.label, "Portrait resolved");
                return Resolution::Probed {
                    url,
                    label: source.label,
                };
            }

            warn!(url = %source.url, label = %source.label, "Portrait candidate failed");
            self.cache.mark_failed(&source.url);
        }

        let fallback = synthesize(character);
        info!(
            name = %character.name,
            caption = %fallback.caption,
            "No portrait candidate validated, using placeholder"
        );
        Resolution::Fallback(self.cache.insert(key, fallback.url))
    }

    /// Resolves `character` at `size`. Never fails.
    pub async fn resolve_image_url(&self, character: &CharacterRef, size: &ImageSize) -> String {
        self.resolve(character, size).await.into_url()
    }

    /// Resolves `character` at the configured default size.
    pub async fn resolve_default(&self, character: &CharacterRef) -> String {
        self.resolve_image_url(character, &self.default_size).await
    }

    /// Warms the cache for `characters` at the preload size.
    ///
    /// Every character is resolved concurrently and the call returns once
    /// all of them have settled.
    pub async fn preload_images(&self, characters: &[CharacterRef]) {
        if characters.is_empty() {
            return;
        }

        let size = &self.preload_size;
        let results = join_all(characters.iter().map(|c| self.resolve(c, size))).await;

        let fallbacks = results.iter().filter(|r| r.is_fallback()).count();
        if fallbacks > 0 {
            warn!(fallbacks, total = results.len(), "Some portraits fell back to placeholders");
        }
        info!(total = results.len(), size = %size, "Preloaded portraits");
    }

    /// Empties the success cache and the failed URL set.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    /// Current cache sizes.
    #[must_use]
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{ImageDimensions, Thumbnail};
    use crate::domain::errors::ProbeError;
    use crate::domain::ports::MockImageProbePort;
    use crate::domain::ports::mocks::{ProbeOutcome, ScriptedProbe};

    fn spider_man(path: &str) -> CharacterRef {
        CharacterRef::new(1, "Spider-Man", "", Thumbnail::new(path, "jpg"))
    }

    fn unknown(id: u64, path: &str) -> CharacterRef {
        CharacterRef::new(id, "Squirrel Girl", "", Thumbnail::new(path, "jpg"))
    }

    #[tokio::test]
    async fn test_primary_validates_with_single_probe() {
        let mut probe = MockImageProbePort::new();
        probe
            .expect_probe()
            .withf(|url| url == "http://x/img/standard_xlarge.jpg")
            .times(1)
            .returning(|_| Ok(ImageDimensions::new(300, 450)));
        let resolver = ResolveImageUseCase::new(Arc::new(probe));

        let url = resolver
            .resolve_image_url(&spider_man("http://x/img"), &ImageSize::default())
            .await;

        assert_eq!(url, "http://x/img/standard_xlarge.jpg");
    }

    #[tokio::test]
    async fn test_second_call_hits_cache() {
        let probe = Arc::new(ScriptedProbe::all_valid());
        let resolver = ResolveImageUseCase::new(probe.clone());
        let character = spider_man("http://x/img");

        let first = resolver.resolve(&character, &ImageSize::default()).await;
        let second = resolver.resolve(&character, &ImageSize::default()).await;

        assert_eq!(first.url(), second.url());
        assert!(matches!(second, Resolution::Cached(_)));
        assert_eq!(probe.call_count(), 1);
    }

    #[tokio::test]
    async fn test_falls_through_to_alternate_size() {
        let probe = Arc::new(
            ScriptedProbe::all_failing().with(
                "http://x/img/standard_medium.jpg",
                ProbeOutcome::Loads(ImageDimensions::new(200, 200)),
            ),
        );
        let resolver = ResolveImageUseCase::new(probe.clone());

        let resolution = resolver.resolve(&unknown(2, "http://x/img"), &ImageSize::default()).await;

        assert_eq!(
            resolution,
            Resolution::Probed {
                url: "http://x/img/standard_medium.jpg".to_string(),
                label: "primary (standard_medium)".to_string(),
            }
        );
        assert_eq!(
            probe.calls(),
            vec![
                "http://x/img/standard_xlarge.jpg",
                "http://x/img/standard_large.jpg",
                "http://x/img/standard_medium.jpg",
            ]
        );
        assert_eq!(resolver.cache_stats().failed, 2);
    }

    #[tokio::test]
    async fn test_tiny_image_rejected() {
        let probe = Arc::new(
            ScriptedProbe::all_failing().with(
                "http://x/img/standard_xlarge.jpg",
                ProbeOutcome::Loads(ImageDimensions::new(1, 1)),
            ),
        );
        let resolver = ResolveImageUseCase::new(probe);

        let resolution = resolver.resolve(&unknown(3, "http://x/img"), &ImageSize::default()).await;

        assert!(resolution.is_fallback());
    }

    #[tokio::test]
    async fn test_exhaustion_falls_back_and_caches() {
        let probe = Arc::new(ScriptedProbe::all_failing());
        let resolver = ResolveImageUseCase::new(probe.clone());
        let character = spider_man("http://x/img");

        let url = resolver.resolve_image_url(&character, &ImageSize::default()).await;
        let probes_after_first = probe.call_count();
        let again = resolver.resolve_image_url(&character, &ImageSize::default()).await;

        assert!(url.starts_with("https://ui-avatars.com/api/?name=Spider-Man&"));
        assert_eq!(url, again);
        assert_eq!(probe.call_count(), probes_after_first);
        assert_eq!(resolver.cache_stats().cached, 1);
    }

    #[tokio::test]
    async fn test_duplicate_candidates_probed_once() {
        // Primary and secondary-host URLs coincide off the primary host, and
        // exact curated matches are listed twice; the failure set skips repeats.
        let probe = Arc::new(ScriptedProbe::all_failing());
        let resolver = ResolveImageUseCase::new(probe.clone());

        let _ = resolver
            .resolve(&spider_man("http://x/img"), &ImageSize::default())
            .await;

        let calls = probe.calls();
        let mut unique = calls.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(calls.len(), unique.len());
        assert_eq!(calls.len(), 5 + 2);
    }

    #[tokio::test]
    async fn test_failed_url_skipped_across_characters() {
        let probe = Arc::new(ScriptedProbe::all_failing());
        let resolver = ResolveImageUseCase::new(probe.clone());

        let _ = resolver.resolve(&unknown(10, "http://x/shared"), &ImageSize::default()).await;
        let before = probe.call_count();
        let _ = resolver.resolve(&unknown(11, "http://x/shared"), &ImageSize::default()).await;

        assert_eq!(probe.call_count(), before);
    }

    #[tokio::test]
    async fn test_failure_set_not_scoped_by_size() {
        let probe = Arc::new(ScriptedProbe::all_failing());
        let resolver = ResolveImageUseCase::new(probe.clone());
        let character = unknown(12, "http://x/img");

        let _ = resolver.resolve(&character, &ImageSize::new("standard_xlarge")).await;
        let before = probe.call_count();
        let resolution = resolver.resolve(&character, &ImageSize::new("standard_large")).await;

        assert!(resolution.is_fallback());
        assert_eq!(probe.call_count(), before);
        assert_eq!(resolver.cache_stats().cached, 2);
    }

    #[tokio::test]
    async fn test_probe_errors_never_escape() {
        let mut probe = MockImageProbePort::new();
        probe.expect_probe().returning(|url| {
            Err(ProbeError::InvalidUrl {
                url: url.to_string(),
            })
        });
        let resolver = ResolveImageUseCase::new(Arc::new(probe));

        let url = resolver
            .resolve_image_url(&unknown(4, "::not a url::"), &ImageSize::default())
            .await;

        assert!(url.contains("ui-avatars.com"));
    }

    #[tokio::test]
    async fn test_probe_panic_treated_as_failure() {
        let probe = Arc::new(ScriptedProbe::new(ProbeOutcome::Panics));
        let resolver = ResolveImageUseCase::new(probe);

        let resolution = resolver.resolve(&unknown(5, "http://x/img"), &ImageSize::default()).await;

        assert!(resolution.is_fallback());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stalled_candidate_skipped_after_timeout() {
        let probe = Arc::new(
            ScriptedProbe::all_valid().with("http://x/img/standard_xlarge.jpg", ProbeOutcome::Stalls),
        );
        let resolver = ResolveImageUseCase::new(probe);

        let url = resolver
            .resolve_image_url(&unknown(6, "http://x/img"), &ImageSize::default())
            .await;

        assert_eq!(url, "http://x/img/standard_large.jpg");
        assert!(resolver.cache().is_failed("http://x/img/standard_xlarge.jpg"));
    }

    #[tokio::test]
    async fn test_preload_uses_preload_size() {
        let probe = Arc::new(ScriptedProbe::all_valid());
        let resolver = ResolveImageUseCase::new(probe.clone());
        let characters = vec![unknown(7, "http://x/a"), unknown(8, "http://x/b")];

        resolver.preload_images(&characters).await;

        assert_eq!(probe.call_count(), 2);
        assert_eq!(
            resolver.cache().get("7-standard_medium").as_deref(),
            Some("http://x/a/standard_medium.jpg")
        );
    }

    #[tokio::test]
    async fn test_preload_empty_is_noop() {
        let probe = Arc::new(ScriptedProbe::all_valid());
        let resolver = ResolveImageUseCase::new(probe.clone());

        resolver.preload_images(&[]).await;

        assert_eq!(probe.call_count(), 0);
        assert_eq!(resolver.cache_stats().cached, 0);
    }

    #[tokio::test]
    async fn test_clear_cache_resets_stats() {
        let probe = Arc::new(ScriptedProbe::all_failing());
        let resolver = ResolveImageUseCase::new(probe);
        resolver.preload_images(&[spider_man("http://x/img")]).await;
        assert!(resolver.cache_stats().failed > 0);

        resolver.clear_cache();

        let stats = resolver.cache_stats();
        assert_eq!(stats.cached, 0);
        assert_eq!(stats.failed, 0);
    }

    #[tokio::test]
    async fn test_shared_cache_between_resolvers() {
        let cache = Arc::new(ResolutionCache::new());
        let first = ResolveImageUseCase::new(Arc::new(ScriptedProbe::all_valid()))
            .with_cache(cache.clone());
        let probe = Arc::new(ScriptedProbe::all_valid());
        let second = ResolveImageUseCase::new(probe.clone()).with_cache(cache);
        let character = unknown(9, "http://x/img");

        let a = first.resolve_default(&character).await;
        let b = second.resolve_default(&character).await;

        assert_eq!(a, b);
        assert_eq!(probe.call_count(), 0);
    }
}
