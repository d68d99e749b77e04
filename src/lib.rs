// follow-tracker: GitHub follower graph analysis.
// Fetches followers and following through a rate-limit-aware client and a TTL cache,
// then derives relationship sets and summary statistics.

pub mod analytics;
pub mod app;
pub mod cache;
pub mod config;
pub mod error;
pub mod export;
pub mod github;
pub mod report;
pub mod tracker;
mod ui;

pub use analytics::{FollowerAnalytics, Summary};
pub use cache::ResponseCache;
pub use error::{Result, TrackerError};
pub use github::{GitHubClient, Member, Profile, RateLimit};
pub use tracker::{AnalysisReport, Tracker};
