//! Port definition for the image-loading primitive.

use async_trait::async_trait;

use crate::domain::entities::ImageDimensions;
use crate::domain::errors::ProbeError;

/// Loads a URL as an image and reports its dimensions.
///
/// Implementations are not expected to enforce a deadline; the validator
/// races every probe against its own timer.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImageProbePort: Send + Sync {
    /// Attempts to load `url` as an image.
    async fn probe(&self, url: &str) -> Result<ImageDimensions, ProbeError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::time::Duration;

    use parking_lot::Mutex;

    /// Scripted outcome for a single URL.
    #[derive(Debug, Clone)]
    pub enum ProbeOutcome {
        /// Load succeeds with the given dimensions.
        Loads(ImageDimensions),
        /// Load fails.
        Fails,
        /// Load never settles.
        Stalls,
        /// Probe panics mid-load.
        Panics,
    }

    /// Probe that answers from a per-URL script and records every call.
    pub struct ScriptedProbe {
        outcomes: HashMap<String, ProbeOutcome>,
        default: ProbeOutcome,
        calls: Mutex<Vec<String>>,
    }

    impl ScriptedProbe {
        /// Every URL gets `default` unless scripted otherwise.
        pub fn new(default: ProbeOutcome) -> Self {
            Self {
                outcomes: HashMap::new(),
                default,
                calls: Mutex::new(Vec::new()),
            }
        }

        /// Every URL loads as a 100x100 image.
        pub fn all_valid() -> Self {
            Self::new(ProbeOutcome::Loads(ImageDimensions::new(100, 100)))
        }

        /// Every URL fails to load.
        pub fn all_failing() -> Self {
            Self::new(ProbeOutcome::Fails)
        }

        /// Scripts the outcome for one URL.
        #[must_use]
        pub fn with(mut self, url: impl Into<String>, outcome: ProbeOutcome) -> Self {
            self.outcomes.insert(url.into(), outcome);
            self
        }

        /// URLs probed so far, in call order.
        pub fn calls(&self) -> Vec<String> {
            self.calls.lock().clone()
        }

        /// Number of probes so far.
        pub fn call_count(&self) -> usize {
            self.calls.lock().len()
        }
    }

    #[async_trait]
    impl ImageProbePort for ScriptedProbe {
        async fn probe(&self, url: &str) -> Result<ImageDimensions, ProbeError> {
            self.calls.lock().push(url.to_string());
            let outcome = self.outcomes.get(url).unwrap_or(&self.default).clone();
            match outcome {
                ProbeOutcome::Loads(dims) => Ok(dims),
                ProbeOutcome::Fails => Err(ProbeError::HttpStatus { status: 404 }),
                ProbeOutcome::Stalls => {
                    tokio::time::sleep(Duration::from_secs(3600)).await;
                    Err(ProbeError::network("stalled probe woke up"))
                }
                ProbeOutcome::Panics => panic!("scripted probe panic for {url}"),
            }
        }
    }
}
