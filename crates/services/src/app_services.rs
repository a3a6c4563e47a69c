use std::sync::Arc;

use signs_core::model::MediaProxy;

use crate::detection::DetectionHub;
use crate::error::AppServicesError;
use crate::identity::IdentityProvider;

/// Assembles the app-facing collaborators the UI reads from context.
#[derive(Clone)]
pub struct AppServices {
    identity: Arc<dyn IdentityProvider>,
    detections: DetectionHub,
    media: MediaProxy,
}

impl AppServices {
    /// # Errors
    ///
    /// Returns `AppServicesError` if the media base is not an absolute URL.
    pub fn new(
        identity: Arc<dyn IdentityProvider>,
        detections: DetectionHub,
        media_base: &str,
    ) -> Result<Self, AppServicesError> {
        let media = MediaProxy::new(media_base)?;
        tracing::info!(media_base = %media.base(), "app services ready");
        Ok(Self {
            identity,
            detections,
            media,
        })
    }

    #[must_use]
    pub fn identity(&self) -> Arc<dyn IdentityProvider> {
        Arc::clone(&self.identity)
    }

    #[must_use]
    pub fn detections(&self) -> DetectionHub {
        self.detections.clone()
    }

    #[must_use]
    pub fn media(&self) -> MediaProxy {
        self.media.clone()
    }
}
