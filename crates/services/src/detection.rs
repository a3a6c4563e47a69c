//! Fan-out of labels produced by an external sign detector.
//!
//! The detector itself lives outside this workspace. Anything that can name a
//! sign (a camera model, a scripted demo, a typed label) publishes into a
//! [`DetectionHub`]; each mounted lesson view holds a [`DetectionSubscription`]
//! and forwards what it receives to its session.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;

use crate::error::{AppServicesError, DetectionError};

pub const DEFAULT_CAPACITY: usize = 32;

#[derive(Clone)]
pub struct DetectionHub {
    sender: broadcast::Sender<String>,
    current_label: Arc<watch::Sender<Option<String>>>,
}

impl DetectionHub {
    /// # Errors
    ///
    /// Returns `AppServicesError::InvalidDetectionCapacity` when `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self, AppServicesError> {
        if capacity == 0 {
            return Err(AppServicesError::InvalidDetectionCapacity);
        }
        Ok(Self::with_capacity(capacity))
    }

    fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        let (current_label, _) = watch::channel(None);
        Self {
            sender,
            current_label: Arc::new(current_label),
        }
    }

    /// Delivers `sign` to every live subscription and returns how many got it.
    ///
    /// Publishing with nobody listening is normal (no quiz open) and drops the
    /// label.
    pub fn publish(&self, sign: impl Into<String>) -> usize {
        let sign = sign.into();
        tracing::debug!(%sign, "detection received");
        self.sender.send(sign).unwrap_or(0)
    }

    #[must_use]
    pub fn subscribe(&self) -> DetectionSubscription {
        DetectionSubscription {
            receiver: self.sender.subscribe(),
        }
    }

    /// Tells detectors which sign the learner is being asked for.
    pub fn set_current_label(&self, label: Option<&str>) {
        self.current_label.send_replace(label.map(str::to_string));
    }

    #[must_use]
    pub fn current_label(&self) -> Option<String> {
        self.current_label.borrow().clone()
    }
}

impl Default for DetectionHub {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

pub struct DetectionSubscription {
    receiver: broadcast::Receiver<String>,
}

impl DetectionSubscription {
    /// Waits for the next label. Labels missed because this subscriber fell
    /// behind are skipped.
    ///
    /// # Errors
    ///
    /// Returns `DetectionError::Closed` once every hub handle is gone.
    pub async fn recv(&mut self) -> Result<String, DetectionError> {
        loop {
            match self.receiver.recv().await {
                Ok(sign) => return Ok(sign),
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "detection subscriber lagged; dropping labels");
                }
                Err(broadcast::error::RecvError::Closed) => return Err(DetectionError::Closed),
            }
        }
    }
}

/// Replays a fixed list of labels in a loop. Stands in for a camera detector
/// during demos.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptedDetector {
    labels: Vec<String>,
    interval: Duration,
}

impl ScriptedDetector {
    #[must_use]
    pub fn new(labels: Vec<String>, interval: Duration) -> Self {
        Self { labels, interval }
    }

    /// Comma-separated labels, e.g. `"goodbye, hello"`. Blank entries are kept
    /// as empty labels, which sessions ignore.
    #[must_use]
    pub fn parse(script: &str, interval: Duration) -> Self {
        let labels = script.split(',').map(|label| label.trim().to_string()).collect();
        Self::new(labels, interval)
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Publishes one label per interval until the task is aborted.
    #[must_use]
    pub fn spawn(self, hub: DetectionHub) -> JoinHandle<()> {
        tokio::spawn(async move { self.run(hub).await })
    }

    async fn run(self, hub: DetectionHub) {
        if self.labels.is_empty() {
            return;
        }
        for label in self.labels.iter().cycle() {
            tokio::time::sleep(self.interval).await;
            let delivered = hub.publish(label.as_str());
            tracing::trace!(label = %label, delivered, "scripted detection");
        }
    }
}
