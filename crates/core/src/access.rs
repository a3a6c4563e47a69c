//! Client-side gate for the admin page.
//!
//! This only decides what to render. Anything the admin panel does must still
//! be authorized by the backend.

use crate::model::IdentityState;

/// The only nickname allowed to see the admin panel.
pub const ADMIN_NICKNAME: &str = "admin";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    Loading,
    /// Identity resolution failed; carries the provider's message verbatim.
    Failed(String),
    Unauthorized,
    Granted,
}

#[must_use]
pub fn decide_access(state: &IdentityState) -> AccessDecision {
    match state {
        IdentityState::Loading => AccessDecision::Loading,
        IdentityState::Failed(message) => AccessDecision::Failed(message.clone()),
        IdentityState::Resolved(identity) => {
            let nickname = identity.as_ref().and_then(|user| user.nickname());
            if nickname == Some(ADMIN_NICKNAME) {
                AccessDecision::Granted
            } else {
                AccessDecision::Unauthorized
            }
        }
    }
}
