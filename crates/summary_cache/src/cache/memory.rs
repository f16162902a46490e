use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};

use crate::{Fingerprint, ResultCache, SummaryRecord};

#[derive(Debug, Clone)]
struct CacheEntry {
    record: SummaryRecord,
    created_at: DateTime<Utc>,
    ttl: Duration,
}

impl CacheEntry {
    fn is_valid(&self, now: DateTime<Utc>) -> bool {
        now - self.created_at < self.ttl
    }
}

/// Mutex-guarded map from fingerprint to cached summary.
///
/// Expiry is lazy: `get` on an expired entry returns `None` and leaves
/// the entry for a later `put` on the same key or a `sweep_expired` call
/// to remove. With `max_entries` set, `put` evicts the oldest entry once
/// the ceiling is reached.
#[derive(Debug, Default)]
pub struct InMemoryCache {
    entries: Mutex<HashMap<Fingerprint, CacheEntry>>,
    max_entries: Option<usize>,
}

/// Counters reported by [`InMemoryCache::stats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub total_entries: usize,
    pub valid_entries: usize,
    pub expired_entries: usize,
}

impl InMemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_entries(max_entries: usize) -> Self {
        InMemoryCache {
            entries: Mutex::new(HashMap::new()),
            max_entries: Some(max_entries),
        }
    }

    /// Removes every expired entry and returns how many were dropped.
    pub fn sweep_expired(&self) -> usize {
        let now = Utc::now();
        let mut entries = self.entries.lock().unwrap();
        let before = entries.len();
        entries.retain(|_, entry| entry.is_valid(now));
        let removed = before - entries.len();
        if removed > 0 {
            tracing::debug!(removed, "Swept expired cache entries");
        }
        removed
    }

    pub fn stats(&self) -> CacheStats {
        let now = Utc::now();
        let entries = self.entries.lock().unwrap();
        let valid = entries.values().filter(|e| e.is_valid(now)).count();
        CacheStats {
            total_entries: entries.len(),
            valid_entries: valid,
            expired_entries: entries.len() - valid,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ResultCache for InMemoryCache {
    fn get(&self, fingerprint: &Fingerprint) -> Option<SummaryRecord> {
        let entries = self.entries.lock().unwrap();
        let entry = entries.get(fingerprint)?;
        if entry.is_valid(Utc::now()) {
            Some(entry.record.clone())
        } else {
            None
        }
    }

    fn put(&self, fingerprint: Fingerprint, record: SummaryRecord, ttl: Duration) {
        let now = Utc::now();
        let mut entries = self.entries.lock().unwrap();

        if let Some(max) = self.max_entries {
            if entries.len() >= max && !entries.contains_key(&fingerprint) {
                // Expired entries go first; otherwise evict the oldest.
                entries.retain(|_, entry| entry.is_valid(now));
                if entries.len() >= max {
                    if let Some(oldest) = entries
                        .iter()
                        .min_by_key(|(_, entry)| entry.created_at)
                        .map(|(key, _)| key.clone())
                    {
                        entries.remove(&oldest);
                    }
                }
            }
        }

        entries.insert(
            fingerprint,
            CacheEntry {
                record,
                created_at: now,
                ttl,
            },
        );
    }
}
