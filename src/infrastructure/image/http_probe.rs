//! HTTP-backed image probe.
//!
//! Downloads the candidate and reads its header to learn the pixel size.
//! Only the dimensions are decoded, never the full bitmap.

use std::io::Cursor;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{Client, Url};
use tracing::{debug, trace};

use crate::domain::entities::ImageDimensions;
use crate::domain::errors::ProbeError;
use crate::domain::ports::ImageProbePort;

/// Default user agent sent with probe requests.
pub const DEFAULT_USER_AGENT: &str = concat!("portrait-resolver/", env!("CARGO_PKG_VERSION"));

/// Probes candidate URLs with a plain HTTP GET.
#[derive(Clone)]
pub struct HttpImageProbe {
    client: Client,
}

impl std::fmt::Debug for HttpImageProbe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpImageProbe").finish_non_exhaustive()
    }
}

impl HttpImageProbe {
    /// Creates a probe with the default user agent.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be created.
    pub fn new() -> Result<Self, ProbeError> {
        Self::with_user_agent(DEFAULT_USER_AGENT)
    }

    /// Creates a probe sending the given user agent.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be created.
    pub fn with_user_agent(user_agent: &str) -> Result<Self, ProbeError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|e| ProbeError::network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { client })
    }

    /// Wraps an existing client.
    #[must_use]
    pub const fn with_client(client: Client) -> Self {
        Self { client }
    }

    async fn download(&self, url: Url) -> Result<Bytes, ProbeError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ProbeError::network(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProbeError::HttpStatus {
                status: status.as_u16(),
            });
        }

        response
            .bytes()
            .await
            .map_err(|e| ProbeError::network(format!("failed to read body: {e}")))
    }
}

/// Reads the pixel size from an encoded image without decoding it.
///
/// # Errors
/// Returns error if the format is unknown or the header is malformed.
pub fn read_dimensions(bytes: &[u8]) -> Result<ImageDimensions, ProbeError> {
    let reader = image::ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| ProbeError::decode(format!("unreadable image: {e}")))?;

    let (width, height) = reader
        .into_dimensions()
        .map_err(|e| ProbeError::decode(e.to_string()))?;

    Ok(ImageDimensions::new(width, height))
}

#[async_trait]
impl ImageProbePort for HttpImageProbe {
    async fn probe(&self, url: &str) -> Result<ImageDimensions, ProbeError> {
        let parsed = Url::parse(url).map_err(|_| ProbeError::InvalidUrl {
            url: url.to_string(),
        })?;

        trace!(url = %parsed, "Probing image");
        let bytes = self.download(parsed).await?;

        let dims = tokio::task::spawn_blocking(move || read_dimensions(&bytes))
            .await
            .map_err(|e| ProbeError::task(format!("decode task panicked: {e}")))??;

        debug!(url = %url, dimensions = %dims, "Image probe loaded");
        Ok(dims)
    }
}
