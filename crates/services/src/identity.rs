use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use signs_core::model::Identity;

use crate::error::IdentityError;

/// Source of the signed-in user.
///
/// `Ok(None)` means nobody is signed in; it is not an error.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn current_user(&self) -> Result<Option<Identity>, IdentityError>;
}

//
// ─── STATIC ────────────────────────────────────────────────────────────────────
//

/// Answers with a fixed result. Used for `--as-user` and in tests.
#[derive(Debug, Clone)]
pub struct StaticIdentityProvider {
    outcome: Result<Option<Identity>, String>,
}

impl StaticIdentityProvider {
    #[must_use]
    pub fn signed_in(identity: Identity) -> Self {
        Self {
            outcome: Ok(Some(identity)),
        }
    }

    #[must_use]
    pub fn signed_out() -> Self {
        Self { outcome: Ok(None) }
    }

    /// Every lookup fails with `message`.
    #[must_use]
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            outcome: Err(message.into()),
        }
    }
}

#[async_trait]
impl IdentityProvider for StaticIdentityProvider {
    async fn current_user(&self) -> Result<Option<Identity>, IdentityError> {
        self.outcome
            .clone()
            .map_err(IdentityError::Rejected)
    }
}

//
// ─── OIDC USERINFO ─────────────────────────────────────────────────────────────
//

#[derive(Clone, Debug)]
pub struct UserInfoConfig {
    pub issuer: String,
    pub access_token: String,
}

impl UserInfoConfig {
    /// Returns `None` when either value is blank.
    #[must_use]
    pub fn new(issuer: String, access_token: String) -> Option<Self> {
        if issuer.trim().is_empty() || access_token.trim().is_empty() {
            return None;
        }
        Some(Self {
            issuer,
            access_token,
        })
    }

    fn userinfo_url(&self) -> String {
        format!("{}/userinfo", self.issuer.trim_end_matches('/'))
    }
}

/// Reads the current user from an OpenID Connect `/userinfo` endpoint.
#[derive(Clone)]
pub struct UserInfoClient {
    client: Client,
    config: UserInfoConfig,
}

impl UserInfoClient {
    #[must_use]
    pub fn new(config: UserInfoConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

#[async_trait]
impl IdentityProvider for UserInfoClient {
    async fn current_user(&self) -> Result<Option<Identity>, IdentityError> {
        let response = self
            .client
            .get(self.config.userinfo_url())
            .bearer_auth(&self.config.access_token)
            .send()
            .await?;

        match response.status() {
            StatusCode::UNAUTHORIZED => {
                tracing::debug!("userinfo rejected the access token; treating as signed out");
                return Ok(None);
            }
            status if !status.is_success() => return Err(IdentityError::HttpStatus(status)),
            _ => {}
        }

        let body = response.bytes().await?;
        let identity: Identity = serde_json::from_slice(&body)?;
        Ok(Some(identity))
    }
}
