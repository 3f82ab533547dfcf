// SPDX-License-Identifier: MPL-2.0
//! Download and decode of gallery renditions.
//!
//! [`load`] is the async entry point used by the application: it streams the
//! body with [`fetch`] and decodes it with [`decode`] on the blocking pool.

use crate::config::{Config, THUMBNAIL_MAX_EDGE};
use crate::domain::media::RawImage;
use crate::error::{Error, FetchError, Result};
use std::sync::OnceLock;
use std::time::Duration;

/// User agent sent with every request.
const USER_AGENT: &str = concat!("IcedGallery/", env!("CARGO_PKG_VERSION"));

/// Maximum number of redirects followed per request.
const MAX_REDIRECTS: usize = 10;

static CLIENT: OnceLock<std::result::Result<reqwest::Client, String>> = OnceLock::new();

/// Which rendition of an item is being loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rendition {
    /// Grid preview, downscaled after decode.
    Thumbnail,
    /// Lightbox image at full resolution.
    Full,
}

/// Limits applied to a single download.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchLimits {
    pub timeout: Duration,
    pub max_bytes: u64,
}

impl FetchLimits {
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            timeout: config.fetch_timeout(),
            max_bytes: config.max_download_bytes(),
        }
    }
}

impl Default for FetchLimits {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Downloads `url` into memory.
///
/// # Errors
///
/// Returns [`Error::Fetch`] if the request fails, the status is not a
/// success, the body is larger than `limits.max_bytes`, or the stream breaks.
pub async fn fetch(url: &str, limits: FetchLimits) -> Result<Vec<u8>> {
    use futures_util::StreamExt;

    let response = client()?
        .get(url)
        .timeout(limits.timeout)
        .send()
        .await
        .map_err(|e| FetchError::Request(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()).into());
    }

    let declared = response.content_length().unwrap_or(0);
    check_size(declared, limits.max_bytes)?;

    let mut body = Vec::with_capacity(usize::try_from(declared).unwrap_or(0));
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| FetchError::Interrupted(e.to_string()))?;
        check_size((body.len() + chunk.len()) as u64, limits.max_bytes)?;
        body.extend_from_slice(&chunk);
    }

    log::debug!("fetched {} bytes from {url}", body.len());
    Ok(body)
}

/// Shared HTTP client, built on first use so connections are pooled across
/// downloads. The timeout is applied per request.
fn client() -> Result<&'static reqwest::Client> {
    CLIENT
        .get_or_init(|| {
            reqwest::Client::builder()
                .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
                .user_agent(USER_AGENT)
                .build()
                .map_err(|e| e.to_string())
        })
        .as_ref()
        .map_err(|e| FetchError::Request(e.clone()).into())
}

fn check_size(len: u64, limit_bytes: u64) -> Result<()> {
    if len > limit_bytes {
        return Err(FetchError::TooLarge { limit_bytes }.into());
    }
    Ok(())
}

/// Decodes image bytes into RGBA, downscaling thumbnails.
///
/// # Errors
///
/// Returns [`Error::Decode`] if the format is unsupported or the data is corrupt.
pub fn decode(bytes: &[u8], rendition: Rendition) -> Result<RawImage> {
    let mut image = image_rs::load_from_memory(bytes)?;

    if rendition == Rendition::Thumbnail
        && (image.width() > THUMBNAIL_MAX_EDGE || image.height() > THUMBNAIL_MAX_EDGE)
    {
        image = image.thumbnail(THUMBNAIL_MAX_EDGE, THUMBNAIL_MAX_EDGE);
    }

    let rgba = image.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(RawImage::from_rgba(width, height, rgba.into_raw()))
}

/// Fetches and decodes `url`, returning the URL alongside the outcome.
pub async fn load(
    url: &'static str,
    rendition: Rendition,
    limits: FetchLimits,
) -> (&'static str, Result<RawImage>) {
    let result = match fetch(url, limits).await {
        Ok(bytes) => tokio::task::spawn_blocking(move || decode(&bytes, rendition))
            .await
            .unwrap_or_else(|e| Err(Error::Decode(format!("decode task failed: {e}")))),
        Err(err) => Err(err),
    };

    if let Err(err) = &result {
        log::warn!("failed to load {url}: {err}");
    }

    (url, result)
}
