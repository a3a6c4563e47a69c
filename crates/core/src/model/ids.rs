use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Key of one lesson in the greeting catalog.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum GreetingId {
    #[default]
    Hello,
    Goodbye,
    Please,
    #[serde(rename = "thankyou")]
    ThankYou,
}

impl GreetingId {
    /// All greetings in tab order.
    pub const ALL: [GreetingId; 4] = [
        GreetingId::Hello,
        GreetingId::Goodbye,
        GreetingId::Please,
        GreetingId::ThankYou,
    ];

    /// The key used in routes and tab values.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            GreetingId::Hello => "hello",
            GreetingId::Goodbye => "goodbye",
            GreetingId::Please => "please",
            GreetingId::ThankYou => "thankyou",
        }
    }

    /// Parses a tab key, falling back to `Hello` for anything unknown.
    #[must_use]
    pub fn from_key_or_default(key: &str) -> Self {
        key.parse().unwrap_or_default()
    }
}

// ─── Display Implementations ───────────────────────────────────────────────────

impl fmt::Display for GreetingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// ─── FromStr Implementations ───────────────────────────────────────────────────

/// Error type for parsing a greeting key from string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseGreetingIdError {
    raw: String,
}

impl fmt::Display for ParseGreetingIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown greeting: {}", self.raw)
    }
}

impl std::error::Error for ParseGreetingIdError {}

impl FromStr for GreetingId {
    type Err = ParseGreetingIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GreetingId::ALL
            .into_iter()
            .find(|id| id.key() == s)
            .ok_or_else(|| ParseGreetingIdError { raw: s.to_string() })
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
