use std::time::Duration;

use common::log;

use crate::session_store::SessionStore;

pub struct CleanupTask {
    store: SessionStore,
    check_interval: Duration,
    inactivity_timeout: Duration,
}

impl CleanupTask {
    pub fn new(
        store: SessionStore,
        check_interval: Duration,
        inactivity_timeout: Duration,
    ) -> Self {
        Self {
            store,
            check_interval,
            inactivity_timeout,
        }
    }

    pub async fn run(&self) {
        let mut interval = tokio::time::interval(self.check_interval);

        loop {
            interval.tick().await;
            self.cleanup_inactive().await;
        }
    }

    async fn cleanup_inactive(&self) -> usize {
        let removed = self.store.remove_inactive(self.inactivity_timeout).await;
        for game_id in &removed {
            log!("Cleaning up inactive game: {}", game_id);
        }
        removed.len()
    }
}
