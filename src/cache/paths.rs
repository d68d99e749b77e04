// Cache path utilities.
// Locates the cache directory and maps cache keys to entry file names.

use std::path::PathBuf;

use directories::ProjectDirs;

/// Suffix of every cache entry file.
pub const ENTRY_EXTENSION: &str = "json";

/// Get the default cache directory (~/.cache/follow-tracker on Linux).
///
/// Falls back to `.cache` in the working directory when no home directory is known.
pub fn default_cache_dir() -> PathBuf {
    ProjectDirs::from("", "", "follow-tracker")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".cache"))
}

/// Cache key for a user's profile.
pub fn user_info_key(username: &str) -> String {
    format!("user_info_{}", username)
}

/// Cache key for a user's followers list.
pub fn followers_key(username: &str) -> String {
    format!("followers_{}", username)
}

/// Cache key for the list of accounts a user follows.
pub fn following_key(username: &str) -> String {
    format!("following_{}", username)
}

/// File name holding the entry for `key`.
///
/// Every non-alphanumeric character becomes `_`. The mapping is lossy:
/// `followers_a-b` and `followers_a.b` share one file.
pub fn entry_file_name(key: &str) -> String {
    format!("{}.{}", sanitize_key(key), ENTRY_EXTENSION)
}

/// Replace every character that is not alphanumeric with an underscore.
fn sanitize_key(key: &str) -> String {
    key.chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_key() {
        assert_eq!(sanitize_key("simple"), "simple");
        assert_eq!(sanitize_key("followers_octo-cat"), "followers_octo_cat");
        assert_eq!(sanitize_key("../etc/passwd"), "___etc_passwd");
    }

    #[test]
    fn test_entry_file_name() {
        assert_eq!(entry_file_name("user_info_octocat"), "user_info_octocat.json");
    }

    #[test]
    fn test_lossy_keys_collide() {
        assert_eq!(entry_file_name("followers_a-b"), entry_file_name("followers_a.b"));
    }

    #[test]
    fn test_key_conventions() {
        assert_eq!(user_info_key("octocat"), "user_info_octocat");
        assert_eq!(followers_key("octocat"), "followers_octocat");
        assert_eq!(following_key("octocat"), "following_octocat");
    }

    #[test]
    fn test_default_cache_dir_is_named_for_app() {
        let dir = default_cache_dir();
        let rendered = dir.to_string_lossy();
        assert!(rendered.contains("follow-tracker") || rendered == ".cache");
    }
}
