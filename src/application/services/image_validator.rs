//! Decides whether a candidate URL is a real, displayable image.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::domain::ports::ImageProbePort;

/// Default deadline for one probe.
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Default exclusive lower bound on width and height.
pub const DEFAULT_MIN_DIMENSION: u32 = 50;

/// Validates candidates by loading them through an [`ImageProbePort`].
#[derive(Clone)]
pub struct ImageValidator {
    probe: Arc<dyn ImageProbePort>,
    timeout: Duration,
    min_dimension: u32,
}

impl std::fmt::Debug for ImageValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageValidator")
            .field("timeout", &self.timeout)
            .field("min_dimension", &self.min_dimension)
            .finish_non_exhaustive()
    }
}

impl ImageValidator {
    /// Creates a validator with explicit limits.
    #[must_use]
    pub fn new(probe: Arc<dyn ImageProbePort>, timeout: Duration, min_dimension: u32) -> Self {
        Self {
            probe,
            timeout,
            min_dimension,
        }
    }

    /// Creates a validator with the default 5s deadline and 50px floor.
    #[must_use]
    pub fn with_defaults(probe: Arc<dyn ImageProbePort>) -> Self {
        Self::new(probe, DEFAULT_PROBE_TIMEOUT, DEFAULT_MIN_DIMENSION)
    }

    /// Returns true only if `url` loads within the deadline and both sides
    /// exceed the minimum.
    ///
    /// The load runs as its own task and races a timer; whichever settles
    /// first decides the outcome and the loser is dropped. Load errors,
    /// panics inside the probe and timeouts all yield `false`.
    pub async fn validate(&self, url: &str) -> bool {
        let probe = Arc::clone(&self.probe);
        let target = url.to_string();
        let mut load = tokio::spawn(async move { probe.probe(&target).await });

        tokio::select! {
            joined = &mut load => match joined {
                Ok(Ok(dims)) => {
                    let ok = dims.exceeds(self.min_dimension);
                    if !ok {
                        debug!(url = %url, dimensions = %dims, "Image too small, treating as placeholder");
                    }
                    ok
                }
                Ok(Err(e)) if e.is_content_error() => {
                    debug!(url = %url, error = %e, "Image failed to load");
                    false
                }
                Ok(Err(e)) => {
                    warn!(url = %url, error = %e, "Image probe error");
                    false
                }
                Err(e) => {
                    warn!(url = %url, error = %e, "Image probe task failed");
                    false
                }
            },
            () = tokio::time::sleep(self.timeout) => {
                load.abort();
                debug!(url = %url, timeout_ms = self.timeout.as_millis(), "Image load timed out");
                false
            }
        }
    }
}
