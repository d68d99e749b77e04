// Analysis orchestration.
// Fetches profile and follower lists through the cache, then runs the analytics.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::analytics::{FollowerAnalytics, Summary};
use crate::cache::{ResponseCache, followers_key, following_key, user_info_key};
use crate::error::Result;
use crate::github::{GitHubClient, Member, Profile, RateLimit};

/// Everything produced by one analysis run.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub profile: Profile,
    pub followers: Vec<Member>,
    pub following: Vec<Member>,
    pub not_following_back: Vec<Member>,
    pub not_following: Vec<Member>,
    pub mutual: Vec<Member>,
    pub summary: Summary,
}

/// Runs analyses, consulting the cache (when enabled) before each API call.
pub struct Tracker {
    client: GitHubClient,
    cache: Option<ResponseCache>,
}

impl Tracker {
    pub fn new(client: GitHubClient, cache: Option<ResponseCache>) -> Self {
        Self { client, cache }
    }

    pub fn rate_limit(&self) -> RateLimit {
        self.client.get_rate_limit_status()
    }

    /// Fetch all data for `username` and analyze it.
    ///
    /// The first failed fetch aborts the run.
    pub async fn run(&mut self, username: &str) -> Result<AnalysisReport> {
        let profile = match self.cached::<Profile>(&user_info_key(username)) {
            Some(profile) => profile,
            None => {
                info!(username, "Fetching user data");
                let profile = self.client.get_profile(username).await?;
                self.store(&user_info_key(username), &profile);
                profile
            }
        };

        let followers = match self.cached_list(&followers_key(username)) {
            Some(followers) => followers,
            None => {
                info!(username, "Fetching followers");
                let followers = self.client.get_all_followers(username).await?;
                self.store(&followers_key(username), &followers);
                followers
            }
        };

        let following = match self.cached_list(&following_key(username)) {
            Some(following) => following,
            None => {
                info!(username, "Fetching accounts followed");
                let following = self.client.get_all_following(username).await?;
                self.store(&following_key(username), &following);
                following
            }
        };

        let analytics = FollowerAnalytics::new(&profile, &followers, &following);
        let not_following_back = analytics.not_following_back();
        let not_following = analytics.not_following();
        let mutual = analytics.mutual();
        let summary = analytics.summarize();

        Ok(AnalysisReport {
            profile,
            followers,
            following,
            not_following_back,
            not_following,
            mutual,
            summary,
        })
    }

    /// Read and decode a cached value; anything undecodable counts as a miss.
    fn cached<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.cache.as_ref()?.get(key)?;
        match serde_json::from_value(value) {
            Ok(decoded) => Some(decoded),
            Err(e) => {
                debug!(key, error = %e, "Cached value has unexpected shape");
                None
            }
        }
    }

    /// Cached member lists are only used when non-empty.
    fn cached_list(&self, key: &str) -> Option<Vec<Member>> {
        self.cached::<Vec<Member>>(key).filter(|list| !list.is_empty())
    }

    fn store<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        if let Some(cache) = &self.cache {
            cache.set(key, value);
        }
    }
}
