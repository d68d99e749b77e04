// Cache module for local filesystem caching.
// Stores GitHub API responses so repeated runs within the max age skip the network.

pub mod paths;
pub mod store;

pub use paths::*;
pub use store::{CacheEntry, DEFAULT_MAX_AGE, ResponseCache};
