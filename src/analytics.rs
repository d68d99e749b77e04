// Follower relationship analytics.
// Derives not-following-back, not-following, and mutual sets plus a summary record.

use std::collections::HashSet;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::github::{Member, Profile};

/// Placeholder for missing login or display name.
pub const UNKNOWN: &str = "Unknown";

/// Format of GitHub's `created_at` timestamps.
const CREATED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Summary statistics for one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub username: String,
    pub name: String,
    pub total_followers: usize,
    pub total_following: usize,
    pub not_following_back_count: usize,
    pub not_following_count: usize,
    pub mutual_count: usize,
    pub percent_not_following_back: f64,
    pub percent_not_following: f64,
    pub mutual_percentage: f64,
    pub follow_ratio: f64,
    pub join_date: Option<String>,
    pub account_age_days: i64,
    pub public_repos: u64,
    pub public_gists: u64,
}

/// Relationship analysis over a profile and its two member lists.
///
/// Membership is decided by login. Every derived list holds full records in
/// the order of the list it was filtered from.
pub struct FollowerAnalytics<'a> {
    profile: &'a Profile,
    followers: &'a [Member],
    following: &'a [Member],
    follower_logins: HashSet<&'a str>,
    following_logins: HashSet<&'a str>,
}

impl<'a> FollowerAnalytics<'a> {
    pub fn new(profile: &'a Profile, followers: &'a [Member], following: &'a [Member]) -> Self {
        Self {
            profile,
            followers,
            following,
            follower_logins: followers.iter().map(|m| m.login.as_str()).collect(),
            following_logins: following.iter().map(|m| m.login.as_str()).collect(),
        }
    }

    /// Accounts the user follows that do not follow back, in `following` order.
    pub fn not_following_back(&self) -> Vec<Member> {
        self.following
            .iter()
            .filter(|m| !self.follower_logins.contains(m.login.as_str()))
            .cloned()
            .collect()
    }

    /// Followers the user does not follow back, in `followers` order.
    pub fn not_following(&self) -> Vec<Member> {
        self.followers
            .iter()
            .filter(|m| !self.following_logins.contains(m.login.as_str()))
            .cloned()
            .collect()
    }

    /// Accounts present in both lists, taken from `followers` and kept in its order.
    pub fn mutual(&self) -> Vec<Member> {
        self.followers
            .iter()
            .filter(|m| self.following_logins.contains(m.login.as_str()))
            .cloned()
            .collect()
    }

    /// Build the summary using the current time for the account age.
    pub fn summarize(&self) -> Summary {
        self.summarize_at(Utc::now())
    }

    /// Build the summary, measuring account age up to `now`.
    pub fn summarize_at(&self, now: DateTime<Utc>) -> Summary {
        let not_following_back = self.not_following_back().len();
        let not_following = self.not_following().len();
        let mutual = self.mutual().len();

        let total_followers = self.followers.len();
        let total_following = self.following.len();

        let join_date = self.profile.created_at.clone();
        let account_age_days = join_date
            .as_deref()
            .and_then(|date| account_age_days(date, now))
            .unwrap_or(0);

        Summary {
            username: self
                .profile
                .login
                .clone()
                .unwrap_or_else(|| UNKNOWN.to_string()),
            name: self
                .profile
                .name
                .clone()
                .unwrap_or_else(|| UNKNOWN.to_string()),
            total_followers,
            total_following,
            not_following_back_count: not_following_back,
            not_following_count: not_following,
            mutual_count: mutual,
            percent_not_following_back: round2(percent(not_following_back, total_following)),
            percent_not_following: round2(percent(not_following, total_followers)),
            mutual_percentage: round2(mutual_percentage(mutual, total_followers, total_following)),
            follow_ratio: round2(ratio(total_followers, total_following)),
            join_date,
            account_age_days,
            public_repos: self.profile.public_repos.unwrap_or(0),
            public_gists: self.profile.public_gists.unwrap_or(0),
        }
    }
}

/// `100 * part / whole`, or 0 for an empty whole.
fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    part as f64 / whole as f64 * 100.0
}

fn mutual_percentage(mutual: usize, followers: usize, following: usize) -> f64 {
    if followers == 0 || following == 0 {
        return 0.0;
    }
    percent(mutual, followers.max(following))
}

fn ratio(followers: usize, following: usize) -> f64 {
    if following == 0 {
        return 0.0;
    }
    followers as f64 / following as f64
}

/// Round to two decimal places, halves away from zero.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Whole days between a strict `YYYY-MM-DDTHH:MM:SSZ` timestamp and `now`.
fn account_age_days(created_at: &str, now: DateTime<Utc>) -> Option<i64> {
    let created = NaiveDateTime::parse_from_str(created_at, CREATED_AT_FORMAT)
        .ok()?
        .and_utc();
    Some(now.signed_duration_since(created).num_days())
}
