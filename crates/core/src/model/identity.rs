use serde::{Deserialize, Serialize};

/// The signed-in user as reported by the identity provider.
///
/// Mirrors the OIDC userinfo claims the app reads; only `nickname` takes part
/// in access decisions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    #[serde(default)]
    pub sub: Option<String>,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub picture: Option<String>,
}

impl Identity {
    #[must_use]
    pub fn with_nickname(nickname: impl Into<String>) -> Self {
        Self {
            nickname: Some(nickname.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn nickname(&self) -> Option<&str> {
        self.nickname.as_deref()
    }

    /// Name to greet the user with.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.nickname.as_deref())
            .unwrap_or("Guest")
    }
}

/// Where identity resolution currently stands for one render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentityState {
    Loading,
    Failed(String),
    Resolved(Option<Identity>),
}
