// GitHub API module.
// Provides the client, endpoint methods, pagination, and types for the follower graph.

pub mod client;
pub mod endpoints;
pub mod pagination;
pub mod types;

pub use client::{GITHUB_API_BASE, GitHubClient};
pub use pagination::{PER_PAGE, PageSource, collect_all};
pub use types::*;
