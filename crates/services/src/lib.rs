#![forbid(unsafe_code)]

pub mod app_services;
pub mod detection;
pub mod error;
pub mod identity;

pub use app_services::AppServices;
pub use detection::{DetectionHub, DetectionSubscription, ScriptedDetector};
pub use error::{AppServicesError, DetectionError, IdentityError};
pub use identity::{IdentityProvider, StaticIdentityProvider, UserInfoClient, UserInfoConfig};
