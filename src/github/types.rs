// GitHub API response types.
// Defines structs for deserializing user profiles, follower entries, and rate limit state.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Remaining-request count below which the client waits for the window to reset.
pub const THROTTLE_THRESHOLD: u64 = 5;

/// Extra wait after the reported reset time.
pub const THROTTLE_MARGIN_SECS: u64 = 1;

/// A GitHub user profile from `/users/{username}`.
///
/// Every field is optional so a sparse or partially redacted payload still
/// decodes; analytics supplies defaults for anything missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub login: Option<String>,
    pub id: Option<u64>,
    pub name: Option<String>,
    pub html_url: Option<String>,
    /// ISO-8601 creation time, `YYYY-MM-DDTHH:MM:SSZ`. Kept as text and parsed on demand.
    pub created_at: Option<String>,
    pub public_repos: Option<u64>,
    pub public_gists: Option<u64>,
    pub followers: Option<u64>,
    pub following: Option<u64>,
}

/// One entry of a followers or following collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Member {
    pub login: String,
    pub id: Option<u64>,
    pub html_url: Option<String>,
    pub avatar_url: Option<String>,
    #[serde(rename = "type")]
    pub account_type: Option<String>,
    pub name: Option<String>,
    pub public_repos: Option<u64>,
    pub followers: Option<u64>,
    pub following: Option<u64>,
}

impl Member {
    /// Create a member with only a login, as used by tests and fixtures.
    pub fn with_login(login: &str) -> Self {
        Self {
            login: login.to_string(),
            ..Self::default()
        }
    }
}

/// Rate limit information from response headers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RateLimit {
    pub limit: u64,
    pub remaining: u64,
    /// Epoch seconds at which the current window resets.
    pub reset: u64,
}

impl RateLimit {
    /// How long to wait before the next request, given the current epoch time.
    ///
    /// Returns `None` while the remaining quota is at or above the threshold,
    /// or when the reported reset time has already passed.
    pub fn throttle_delay(&self, now: u64) -> Option<Duration> {
        if self.remaining >= THROTTLE_THRESHOLD || self.reset <= now {
            return None;
        }

        Some(Duration::from_secs(self.reset - now + THROTTLE_MARGIN_SECS))
    }
}
