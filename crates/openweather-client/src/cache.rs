//! Time-bucketed in-memory weather cache.
//!
//! Keys embed the city name and the start of the current 10-minute bucket, so
//! all lookups for one city within one bucket collide deterministically. This
//! is a single-purpose dedup store with a fixed TTL, not a general LRU: the
//! bucketing bounds cardinality by the number of active cities.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::debug;

use crate::model::WeatherRecord;

/// Width of the key-alignment window, in seconds.
pub const BUCKET_WIDTH_SECS: i64 = 600;

/// TTL applied on insert. Exceeds the bucket width so an entry is guaranteed
/// present for its bucket's entire addressable window.
pub const ENTRY_TTL: Duration = Duration::from_secs(900);

/// How often the background sweep purges expired entries.
pub const SWEEP_INTERVAL: Duration = Duration::from_secs(900);

struct CacheEntry {
    record: WeatherRecord,
    expires_at: Instant,
}

/// Concurrent keyed store for [`WeatherRecord`]s. Clone shares the underlying
/// map; get/set need no external locking.
#[derive(Clone)]
pub struct WeatherCache {
    entries: Arc<RwLock<HashMap<String, CacheEntry>>>,
}

impl WeatherCache {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Builds the canonical cache key: lowercased city plus the start of the
    /// bucket containing `now_unix`. Key construction is the caller's
    /// responsibility; the store itself is agnostic to the scheme.
    pub fn bucket_key(city: &str, now_unix: i64) -> String {
        let bucket = now_unix - now_unix.rem_euclid(BUCKET_WIDTH_SECS);
        format!("weather:{}:{}", city.trim().to_lowercase(), bucket)
    }

    /// Returns a clone of the record under `key`, unless absent or expired.
    pub async fn get(&self, key: &str) -> Option<WeatherRecord> {
        let entries = self.entries.read().await;
        entries
            .get(key)
            .filter(|entry| entry.expires_at > Instant::now())
            .map(|entry| entry.record.clone())
    }

    /// Inserts `record` under `key`, expiring after `ttl`.
    pub async fn set(&self, key: String, record: WeatherRecord, ttl: Duration) {
        let entry = CacheEntry {
            record,
            expires_at: Instant::now() + ttl,
        };
        self.entries.write().await.insert(key, entry);
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Spawns the periodic sweep that purges expired entries. The write lock
    /// is held only for the retain pass, so lookups are never stalled for the
    /// sweep duration. Abort the returned handle to stop sweeping.
    pub fn spawn_sweeper(&self, interval: Duration) -> JoinHandle<()> {
        let entries = Arc::clone(&self.entries);
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            // The first tick completes immediately; skip it.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                let now = Instant::now();
                let mut map = entries.write().await;
                let before = map.len();
                map.retain(|_, entry| entry.expires_at > now);
                let removed = before - map.len();
                drop(map);
                if removed > 0 {
                    debug!(removed, "cache sweep purged expired entries");
                }
            }
        })
    }
}

impl Default for WeatherCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(city: &str) -> WeatherRecord {
        WeatherRecord {
            city: city.to_string(),
            temp_c: 10.0,
            feels_like_c: 9.0,
            humidity: 50,
            description: "облачно".to_string(),
            icon: "04d".to_string(),
            wind_speed_mps: 2.0,
            observed_at: 1_717_500_000,
            timezone_offset_secs: 10_800,
        }
    }

    #[test]
    fn keys_collide_within_one_bucket() {
        let a = WeatherCache::bucket_key("Москва", 1_210);
        let b = WeatherCache::bucket_key("москва ", 1_790);
        assert_eq!(a, b);
    }

    #[test]
    fn keys_differ_across_buckets() {
        let a = WeatherCache::bucket_key("Москва", 1_790);
        let b = WeatherCache::bucket_key("Москва", 1_810);
        assert_ne!(a, b);
    }

    #[test]
    fn keys_differ_between_cities() {
        let a = WeatherCache::bucket_key("Москва", 1_210);
        let b = WeatherCache::bucket_key("Казань", 1_210);
        assert_ne!(a, b);
    }

    #[test]
    fn entry_ttl_covers_full_bucket_window() {
        assert!(ENTRY_TTL.as_secs() as i64 >= BUCKET_WIDTH_SECS);
        assert!(SWEEP_INTERVAL <= ENTRY_TTL);
    }

    #[tokio::test]
    async fn set_then_get_returns_record() {
        let cache = WeatherCache::new();
        cache
            .set("k".to_string(), record("Москва"), Duration::from_secs(60))
            .await;

        let found = cache.get("k").await.expect("entry must be present");
        assert_eq!(found.city, "Москва");
        assert!(cache.get("other").await.is_none());
    }

    #[tokio::test]
    async fn expired_entry_is_not_returned() {
        let cache = WeatherCache::new();
        cache
            .set("k".to_string(), record("Москва"), Duration::from_millis(10))
            .await;

        tokio::time::sleep(Duration::from_millis(30)).await;
        assert!(cache.get("k").await.is_none());
    }

    #[tokio::test]
    async fn sweeper_purges_expired_entries() {
        let cache = WeatherCache::new();
        let sweeper = cache.spawn_sweeper(Duration::from_millis(50));

        cache
            .set("k".to_string(), record("Москва"), Duration::from_millis(10))
            .await;
        assert_eq!(cache.len().await, 1);

        tokio::time::sleep(Duration::from_millis(150)).await;
        assert_eq!(cache.len().await, 0);

        sweeper.abort();
    }
}
