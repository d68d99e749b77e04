// Cache store for reading and writing API responses.
// One JSON file per key, each stamped with its write time and checked against a max age.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::Result;

use super::paths::{ENTRY_EXTENSION, entry_file_name};

/// Default maximum entry age: 1 hour.
pub const DEFAULT_MAX_AGE: Duration = Duration::from_secs(60 * 60);

/// On-disk form of a cache entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry {
    /// Seconds since the Unix epoch when the entry was written.
    pub timestamp: f64,
    /// The cached payload.
    pub data: Value,
}

impl CacheEntry {
    /// Create an entry stamped with the current time.
    pub fn new(data: Value) -> Self {
        Self {
            timestamp: now_epoch_secs(),
            data,
        }
    }

    /// Check if this entry is older than `max_age` at time `now`.
    pub fn is_expired(&self, max_age: Duration, now: f64) -> bool {
        now - self.timestamp > max_age.as_secs_f64()
    }
}

/// Directory-backed cache of JSON values with per-entry expiration.
///
/// Reads and writes never fail from the caller's point of view: a missing,
/// unreadable, or expired entry is a miss, and a failed write is logged and
/// otherwise ignored.
#[derive(Debug, Clone)]
pub struct ResponseCache {
    dir: PathBuf,
    max_age: Duration,
}

impl ResponseCache {
    /// Open a cache in `dir`, creating the directory if needed.
    pub fn new(dir: impl Into<PathBuf>, max_age: Duration) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir, max_age })
    }

    /// Open a cache in `dir` with the default max age.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        Self::new(dir, DEFAULT_MAX_AGE)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn max_age(&self) -> Duration {
        self.max_age
    }

    /// Path of the entry file for `key`.
    pub fn entry_path(&self, key: &str) -> PathBuf {
        self.dir.join(entry_file_name(key))
    }

    /// Get the cached value for `key`, or `None` if absent, unreadable, or expired.
    pub fn get(&self, key: &str) -> Option<Value> {
        let path = self.entry_path(key);
        let contents = fs::read_to_string(&path).ok()?;

        let entry: CacheEntry = match serde_json::from_str(&contents) {
            Ok(entry) => entry,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "Ignoring unreadable cache entry");
                return None;
            }
        };

        if entry.is_expired(self.max_age, now_epoch_secs()) {
            debug!(key, "Cache entry expired");
            return None;
        }

        debug!(key, "Cache hit");
        Some(entry.data)
    }

    /// Store `value` under `key`, replacing any existing entry.
    ///
    /// The entry is written to a temp file and renamed into place, so a failed
    /// write leaves the previous entry untouched.
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        let path = self.entry_path(key);
        if let Err(e) = self.write_entry(&path, value) {
            warn!(path = %path.display(), error = %e, "Failed to write cache file");
        }
    }

    fn write_entry<T: Serialize + ?Sized>(&self, path: &Path, value: &T) -> Result<()> {
        let entry = CacheEntry::new(serde_json::to_value(value)?);
        let json = serde_json::to_string(&entry)?;

        let temp_path = path.with_extension("tmp");
        let mut file = fs::File::create(&temp_path)?;
        file.write_all(json.as_bytes())?;
        file.sync_all()?;
        fs::rename(&temp_path, path)?;

        Ok(())
    }

    /// Remove the entry for `key`, or every entry when `key` is `None`.
    ///
    /// Missing entries are ignored; removal failures are logged.
    pub fn clear(&self, key: Option<&str>) {
        match key {
            Some(key) => remove_entry(&self.entry_path(key)),
            None => {
                let entries = match fs::read_dir(&self.dir) {
                    Ok(entries) => entries,
                    Err(e) => {
                        warn!(dir = %self.dir.display(), error = %e, "Failed to list cache directory");
                        return;
                    }
                };

                for entry in entries.flatten() {
                    let path = entry.path();
                    if path.extension().is_some_and(|ext| ext == ENTRY_EXTENSION) {
                        remove_entry(&path);
                    }
                }
            }
        }
    }
}

fn remove_entry(path: &Path) {
    if !path.exists() {
        return;
    }
    if let Err(e) = fs::remove_file(path) {
        warn!(path = %path.display(), error = %e, "Failed to remove cache file");
    }
}

fn now_epoch_secs() -> f64 {
    Utc::now().timestamp_micros() as f64 / 1_000_000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn backdate(cache: &ResponseCache, key: &str, secs: f64) {
        let path = cache.entry_path(key);
        let mut entry: CacheEntry =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        entry.timestamp -= secs;
        fs::write(&path, serde_json::to_string(&entry).unwrap()).unwrap();
    }

    #[test]
    fn test_set_then_get() {
        let temp_dir = TempDir::new().unwrap();
        let cache = ResponseCache::open(temp_dir.path()).unwrap();

        let value = json!([{"login": "a", "html_url": "https://github.com/a"}, {"login": "b"}]);
        cache.set("followers_octocat", &value);

        assert_eq!(cache.get("followers_octocat"), Some(value));
    }

    #[test]
    fn test_set_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let cache = ResponseCache::open(temp_dir.path()).unwrap();

        cache.set("k", &json!(1));
        cache.set("k", &json!({"v": 2}));

        assert_eq!(cache.get("k"), Some(json!({"v": 2})));
    }

    #[test]
    fn test_get_missing() {
        let temp_dir = TempDir::new().unwrap();
        let cache = ResponseCache::open(temp_dir.path()).unwrap();

        assert_eq!(cache.get("nope"), None);
    }

    #[test]
    fn test_backdated_entry_expires() {
        let temp_dir = TempDir::new().unwrap();
        let cache = ResponseCache::new(temp_dir.path(), Duration::from_secs(60)).unwrap();

        cache.set("k", &json!("v"));
        backdate(&cache, "k", 61.0);

        assert_eq!(cache.get("k"), None);
    }

    #[test]
    fn test_entry_within_max_age_survives() {
        let temp_dir = TempDir::new().unwrap();
        let cache = ResponseCache::new(temp_dir.path(), Duration::from_secs(60)).unwrap();

        cache.set("k", &json!("v"));
        backdate(&cache, "k", 30.0);

        assert_eq!(cache.get("k"), Some(json!("v")));
    }

    #[test]
    fn test_corrupt_entry_is_a_miss() {
        let temp_dir = TempDir::new().unwrap();
        let cache = ResponseCache::open(temp_dir.path()).unwrap();

        fs::write(cache.entry_path("bad"), "{not json").unwrap();
        fs::write(cache.entry_path("partial"), r#"{"data": 1}"#).unwrap();

        assert_eq!(cache.get("bad"), None);
        assert_eq!(cache.get("partial"), None);
    }

    #[test]
    fn test_on_disk_layout() {
        let temp_dir = TempDir::new().unwrap();
        let cache = ResponseCache::open(temp_dir.path()).unwrap();

        cache.set("user_info_octo-cat", &json!({"login": "octo-cat"}));

        let path = temp_dir.path().join("user_info_octo_cat.json");
        let raw: Value = serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
        assert!(raw["timestamp"].is_f64());
        assert_eq!(raw["data"], json!({"login": "octo-cat"}));
    }

    #[test]
    fn test_clear_single_key() {
        let temp_dir = TempDir::new().unwrap();
        let cache = ResponseCache::open(temp_dir.path()).unwrap();

        cache.set("a", &json!(1));
        cache.set("b", &json!(2));
        cache.clear(Some("a"));
        cache.clear(Some("never_written"));

        assert_eq!(cache.get("a"), None);
        assert_eq!(cache.get("b"), Some(json!(2)));
    }

    #[test]
    fn test_clear_all_only_removes_entries() {
        let temp_dir = TempDir::new().unwrap();
        let cache = ResponseCache::open(temp_dir.path()).unwrap();
        let other = temp_dir.path().join("notes.txt");
        fs::write(&other, "keep me").unwrap();

        cache.set("a", &json!(1));
        cache.set("b", &json!(2));
        cache.clear(None);

        assert_eq!(cache.get("a"), None);
        assert_eq!(cache.get("b"), None);
        assert!(other.exists());
    }

    #[test]
    fn test_creates_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("nested").join("cache");

        let cache = ResponseCache::open(&dir).unwrap();
        assert!(dir.is_dir());
        assert_eq!(cache.max_age(), DEFAULT_MAX_AGE);
    }

    #[test]
    fn test_write_failure_is_absorbed() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("gone");
        let cache = ResponseCache::open(&dir).unwrap();
        fs::remove_dir_all(&dir).unwrap();

        cache.set("k", &json!(1));
        assert_eq!(cache.get("k"), None);
    }

    #[test]
    fn test_entry_expiry_boundary() {
        let entry = CacheEntry {
            timestamp: 1000.0,
            data: Value::Null,
        };
        let max_age = Duration::from_secs(10);

        assert!(!entry.is_expired(max_age, 1010.0));
        assert!(entry.is_expired(max_age, 1010.5));
    }
}
