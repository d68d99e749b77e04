// GitHub API endpoint functions.
// Typed methods for user profiles and the paginated followers/following lists.

use tracing::debug;

use crate::error::Result;

use super::client::GitHubClient;
use super::pagination::{PageSource, collect_all};
use super::types::{Member, Profile, RateLimit};

/// One of the follower-graph list endpoints of a user, fetched page by page.
struct MemberPages<'a> {
    client: &'a mut GitHubClient,
    endpoint: String,
}

impl PageSource for MemberPages<'_> {
    type Item = Member;

    async fn fetch_page(&mut self, page: u32, per_page: u32) -> Result<Vec<Member>> {
        let params = [
            ("page", &page.to_string()),
            ("per_page", &per_page.to_string()),
        ];
        let response = self.client.get_with_params(&self.endpoint, &params).await?;
        let members: Vec<Member> = response.json().await?;
        debug!(endpoint = %self.endpoint, page, count = members.len(), "Fetched page");
        Ok(members)
    }
}

impl GitHubClient {
    /// Get a user's public profile.
    pub async fn get_profile(&mut self, username: &str) -> Result<Profile> {
        let response = self.get(&format!("/users/{}", username)).await?;
        let profile: Profile = response.json().await?;
        Ok(profile)
    }

    /// Get every account following `username`, across all pages.
    pub async fn get_all_followers(&mut self, username: &str) -> Result<Vec<Member>> {
        let mut pages = MemberPages {
            client: self,
            endpoint: format!("/users/{}/followers", username),
        };
        collect_all(&mut pages).await
    }

    /// Get every account `username` follows, across all pages.
    pub async fn get_all_following(&mut self, username: &str) -> Result<Vec<Member>> {
        let mut pages = MemberPages {
            client: self,
            endpoint: format!("/users/{}/following", username),
        };
        collect_all(&mut pages).await
    }

    /// Last observed rate limit values.
    pub fn get_rate_limit_status(&self) -> RateLimit {
        *self.rate_limit()
    }
}
