use thiserror::Error;
use url::Url;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MediaError {
    #[error("media locator cannot be empty")]
    EmptyLocator,

    #[error("invalid media locator: {raw}")]
    InvalidLocator { raw: String },
}

//
// ─── PROXY ─────────────────────────────────────────────────────────────────────
//

/// Path of the video proxy endpoint, relative to the media base.
pub const PROXY_VIDEO_PATH: &str = "api/proxy-video";

/// Conversation video embedded under "Immersive Practice".
pub const IMMERSIVE_PRACTICE_EMBED: &str = "https://www.youtube.com/embed/TWwKwKH8MwA";

/// Used when a greeting has no image.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// Parses an absolute media locator.
///
/// # Errors
///
/// Returns `MediaError` when the value is blank or not an absolute URL.
pub fn parse_locator(raw: &str) -> Result<Url, MediaError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(MediaError::EmptyLocator);
    }
    Url::parse(trimmed).map_err(|_| MediaError::InvalidLocator {
        raw: raw.to_string(),
    })
}

/// Builds locators that route video playback through the media proxy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaProxy {
    base: Url,
}

impl MediaProxy {
    /// # Errors
    ///
    /// Returns `MediaError` when `base` is not an absolute URL.
    pub fn new(base: &str) -> Result<Self, MediaError> {
        let mut base = parse_locator(base)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Self { base })
    }

    #[must_use]
    pub fn base(&self) -> &Url {
        &self.base
    }

    /// `{base}/api/proxy-video?url=<target>`, with `target` percent-encoded.
    ///
    /// # Errors
    ///
    /// Returns `MediaError` when `target` is not an absolute URL.
    pub fn video_url(&self, target: &str) -> Result<Url, MediaError> {
        let target = parse_locator(target)?;
        let mut url = self
            .base
            .join(PROXY_VIDEO_PATH)
            .map_err(|_| MediaError::InvalidLocator {
                raw: self.base.to_string(),
            })?;
        url.query_pairs_mut().append_pair("url", target.as_str());
        Ok(url)
    }
}
