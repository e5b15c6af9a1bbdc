//! Image handling infrastructure.
//!
//! This module provides:
//! - Content-host URL building and host rewrites
//! - An HTTP probe that loads candidates and reports their size

pub mod http_probe;
pub mod marvel_cdn;

pub use http_probe::{HttpImageProbe, read_dimensions};
pub use marvel_cdn::{
    ALTERNATE_SIZES, PRIMARY_HOST, SECONDARY_HOST, rendition_url, rewrite_to_secondary_host,
    thumbnail_url,
};
