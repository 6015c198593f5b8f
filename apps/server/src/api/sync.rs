//! Manual trigger for the species catalog sync.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use tracing::info;

use verdant_core::plants::SyncOutcome;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

use super::extract::CurrentUser;

async fn trigger_sync(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
) -> ApiResult<Json<Value>> {
    let Ok(_guard) = state.sync_gate.try_lock() else {
        return Err(ApiError::Conflict(
            "a catalog sync is already running".to_string(),
        ));
    };

    info!("catalog sync triggered by user {}", user.id);
    match state.plant_service.sync_catalog().await? {
        SyncOutcome::Completed(stats) => Ok(Json(json!(stats))),
        SyncOutcome::NoData => Ok(Json(json!({
            "error": "no data retrieved from the plant API"
        }))),
    }
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/plant/sync", post(trigger_sync))
}
