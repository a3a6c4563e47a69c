use std::sync::{Arc, Mutex};

use services::{AppServices, DetectionHub, IdentityProvider};
use signs_core::model::{GreetingId, MediaProxy};

pub trait UiApp: Send + Sync {
    fn identity(&self) -> Arc<dyn IdentityProvider>;
    fn detections(&self) -> DetectionHub;
    fn media(&self) -> MediaProxy;

    /// Lesson tab to open right after launch, if any.
    fn lesson_on_launch(&self) -> Option<GreetingId>;
}

impl UiApp for AppServices {
    fn identity(&self) -> Arc<dyn IdentityProvider> {
        AppServices::identity(self)
    }

    fn detections(&self) -> DetectionHub {
        AppServices::detections(self)
    }

    fn media(&self) -> MediaProxy {
        AppServices::media(self)
    }

    fn lesson_on_launch(&self) -> Option<GreetingId> {
        None
    }
}

#[derive(Clone)]
pub struct AppContext {
    identity: Arc<dyn IdentityProvider>,
    detections: DetectionHub,
    media: MediaProxy,
    lesson_on_launch_once: Arc<Mutex<Option<GreetingId>>>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            identity: app.identity(),
            detections: app.detections(),
            media: app.media(),
            lesson_on_launch_once: Arc::new(Mutex::new(app.lesson_on_launch())),
        }
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

    /// One-shot: the first call returns the configured lesson, later calls `None`.
    #[must_use]
    pub fn take_lesson_on_launch(&self) -> Option<GreetingId> {
        self.lesson_on_launch_once
            .lock()
            .ok()
            .and_then(|mut slot| slot.take())
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
