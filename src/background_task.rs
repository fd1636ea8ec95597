use tokio::time::{interval, Duration};

use crate::{limiter::cooldown::CooldownStore, utils::clock::now_ms};

/// Periodically drops cooldown entries that can no longer block anyone.
pub async fn start_eviction_task(store: CooldownStore, every: Duration) {
    let mut interval = interval(every);

    loop {
        interval.tick().await;

        let evicted = store.evict_expired(now_ms());
        if evicted > 0 {
            tracing::debug!("Evicted {} expired cooldown entries ({} remain)", evicted, store.len());
        }
    }
}
