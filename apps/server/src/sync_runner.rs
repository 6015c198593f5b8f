//! Background catalog sync loop.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};
use tracing::{error, info, warn};

use verdant_core::plants::SyncOutcome;

use crate::state::AppState;

/// Spawn the periodic sync task. A zero interval disables the loop.
pub fn spawn(state: Arc<AppState>, interval: Duration) -> Option<JoinHandle<()>> {
    if interval.is_zero() {
        info!("background catalog sync disabled");
        return None;
    }

    info!(
        "background catalog sync every {}s",
        interval.as_secs()
    );

    Some(tokio::spawn(async move {
        let mut ticker = time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick fires immediately; wait a full interval instead.
        ticker.tick().await;

        loop {
            ticker.tick().await;
            run_once(&state).await;
        }
    }))
}

async fn run_once(state: &AppState) {
    // A manual run may already hold the gate; skip this tick instead of queuing.
    let Ok(_guard) = state.sync_gate.try_lock() else {
        warn!("skipping scheduled catalog sync: a run is already in flight");
        return;
    };

    match state.plant_service.sync_catalog().await {
        Ok(SyncOutcome::Completed(stats)) => {
            info!(
                "scheduled catalog sync done: {} created, {} updated, {} errors, {} processed",
                stats.created, stats.updated, stats.errors, stats.total_processed
            );
        }
        Ok(SyncOutcome::NoData) => {
            warn!("scheduled catalog sync retrieved no data");
        }
        Err(err) => {
            error!("scheduled catalog sync failed: {}", err);
        }
    }
}
