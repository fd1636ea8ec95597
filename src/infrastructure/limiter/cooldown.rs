use std::{sync::Arc, time::Duration};

use dashmap::DashMap;

use crate::services::submission_limiter::SubmissionLimiter;

type Key = String;

/// Last accepted submission time per email address, in epoch millis.
///
/// Keys are the address exactly as submitted. Entries older than `ttl` can
/// no longer block anybody and are dropped by [`CooldownStore::evict_expired`];
/// `max_entries` caps the table between sweeps.
#[derive(Clone)]
pub struct CooldownStore {
    map: Arc<DashMap<Key, u64>>,
    cooldown_ms: u64,
    ttl_ms: u64,
    max_entries: usize,
}

impl CooldownStore {
    pub fn new(cooldown: Duration, ttl: Duration, max_entries: usize) -> Self {
        let cooldown_ms = cooldown.as_millis() as u64;
        Self {
            map: Arc::new(DashMap::new()),
            cooldown_ms,
            // an entry evicted before its cooldown ends would let a repeat through
            ttl_ms: (ttl.as_millis() as u64).max(cooldown_ms),
            max_entries: max_entries.max(1),
        }
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn last_accepted(&self, email: &str) -> Option<u64> {
        self.map.get(email).map(|entry| *entry.value())
    }

    /// Drops entries whose cooldown can no longer matter. Returns how many
    /// were removed.
    pub fn evict_expired(&self, now_ms: u64) -> usize {
        let before = self.map.len();
        let ttl = self.ttl_ms;
        self.map.retain(|_, last| now_ms.saturating_sub(*last) < ttl);
        before.saturating_sub(self.map.len())
    }

    fn evict_oldest(&self) {
        let oldest = self
            .map
            .iter()
            .min_by_key(|entry| *entry.value())
            .map(|entry| entry.key().clone());

        if let Some(key) = oldest {
            self.map.remove(&key);
        }
    }

    fn make_room(&self, now_ms: u64) {
        if self.map.len() < self.max_entries {
            return;
        }
        let evicted = self.evict_expired(now_ms);
        if self.map.len() >= self.max_entries {
            tracing::warn!(
                "Cooldown table full ({} entries, {} expired evicted); dropping oldest",
                self.map.len(),
                evicted
            );
            self.evict_oldest();
        }
    }
}

impl SubmissionLimiter for CooldownStore {
    fn is_limited(&self, email: &str, now_ms: u64) -> bool {
        self.map
            .get(email)
            .map(|last| now_ms.saturating_sub(*last) < self.cooldown_ms)
            .unwrap_or(false)
    }

    fn record(&self, email: &str, now_ms: u64) {
        if !self.map.contains_key(email) {
            self.make_room(now_ms);
        }
        self.map.insert(email.to_string(), now_ms);
    }
}
