// src/cache.rs
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Local};
use metrics::gauge;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tokio::task::JoinHandle;
use tokio::time::Instant;

use crate::hot::types::HotResponse;

/// How cache keys are derived from a source flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheKeyMode {
    /// `hot_{flag}`: one entry per source, freshness bounded by the TTL alone.
    #[default]
    Source,
    /// `hot_{flag}_{YYYYMMDDHHmm}`: a new key every wall-clock minute.
    #[serde(rename = "minute")]
    MinuteBucket,
}

impl FromStr for CacheKeyMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "source" => Ok(Self::Source),
            "minute" | "minute_bucket" => Ok(Self::MinuteBucket),
            other => Err(format!("unknown cache key mode `{other}`")),
        }
    }
}

pub fn cache_key(flag: &str, mode: CacheKeyMode, now: DateTime<Local>) -> String {
    match mode {
        CacheKeyMode::Source => format!("hot_{flag}"),
        CacheKeyMode::MinuteBucket => format!("hot_{flag}_{}", now.format("%Y%m%d%H%M")),
    }
}

// ~30 years; stands in for a deadline that would overflow `Instant`.
const FAR_FUTURE: Duration = Duration::from_secs(86_400 * 365 * 30);

fn deadline(ttl: Duration) -> Instant {
    let now = Instant::now();
    now.checked_add(ttl).unwrap_or(now + FAR_FUTURE)
}

#[derive(Debug)]
struct Entry {
    value: Arc<HotResponse>,
    expires_at: Instant,
}

/// Process-wide TTL store for finished envelopes.
///
/// Expiry is absolute (set on insert, never refreshed by reads). Expired
/// entries are invisible to `get` right away and physically dropped either
/// lazily on lookup or by the periodic sweeper.
#[derive(Debug)]
pub struct HotCache {
    entries: RwLock<HashMap<String, Entry>>,
    default_ttl: Duration,
}

impl HotCache {
    pub fn new(default_ttl: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            default_ttl,
        }
    }

    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    pub fn get(&self, key: &str) -> Option<Arc<HotResponse>> {
        let now = Instant::now();
        {
            let map = self.entries.read();
            match map.get(key) {
                Some(e) if e.expires_at > now => return Some(Arc::clone(&e.value)),
                Some(_) => {}
                None => return None,
            }
        }
        // expired: drop it unless a writer replaced it in between
        let mut map = self.entries.write();
        if map.get(key).is_some_and(|e| e.expires_at <= now) {
            map.remove(key);
        }
        None
    }

    pub fn insert(&self, key: impl Into<String>, value: Arc<HotResponse>) {
        self.insert_with_ttl(key, value, self.default_ttl);
    }

    /// Store (or overwrite) `key`, restarting its expiry clock.
    pub fn insert_with_ttl(&self, key: impl Into<String>, value: Arc<HotResponse>, ttl: Duration) {
        let entry = Entry {
            value,
            expires_at: deadline(ttl),
        };
        self.entries.write().insert(key.into(), entry);
    }

    /// Drop every expired entry; returns how many went away.
    pub fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let mut map = self.entries.write();
        let before = map.len();
        map.retain(|_, e| e.expires_at > now);
        before - map.len()
    }

    /// Physical entry count, expired-but-unswept included.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

/// Background sweep every `every`; also publishes the `hot_cache_entries` gauge.
pub fn spawn_sweeper(cache: Arc<HotCache>, every: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval_at(deadline(every), every);
        loop {
            ticker.tick().await;
            let purged = cache.purge_expired();
            let left = cache.len();
            gauge!("hot_cache_entries").set(left as f64);
            if purged > 0 {
                tracing::debug!(target: "cache", purged, left, "cache sweep");
            }
        }
    })
}
