//! Content-host URL building for character thumbnails.

use crate::domain::entities::{ImageSize, Thumbnail};

/// Host serving primary character thumbnails.
pub const PRIMARY_HOST: &str = "i.annihil.us";

/// Secondary content host that mirrors the primary one.
pub const SECONDARY_HOST: &str = "terrigen-cdn-dev.marvel.com";

/// Renditions tried, in order, when the requested one is unavailable.
pub const ALTERNATE_SIZES: [&str; 5] = [
    "standard_xlarge",
    "standard_large",
    "standard_medium",
    "portrait_xlarge",
    "portrait_incredible",
];

/// Builds the URL of one rendition: `{path}/{size}.{extension}`.
#[must_use]
pub fn rendition_url(path: &str, size: &str, extension: &str) -> String {
    format!("{path}/{size}.{extension}")
}

/// Builds the URL of a thumbnail at the given size.
#[must_use]
pub fn thumbnail_url(thumbnail: &Thumbnail, size: &ImageSize) -> String {
    rendition_url(&thumbnail.path, size.as_str(), &thumbnail.extension)
}

/// Swaps the first occurrence of the primary host for the secondary one.
///
/// Paths on other hosts are returned unchanged.
#[must_use]
pub fn rewrite_to_secondary_host(path: &str) -> String {
    path.replacen(PRIMARY_HOST, SECONDARY_HOST, 1)
}
