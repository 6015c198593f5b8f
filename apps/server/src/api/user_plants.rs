//! Per-user plant list endpoints. All routes require a bearer token.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde::Deserialize;

use verdant_core::plants::UserPlant;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

use super::extract::CurrentUser;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachPlantRequest {
    pub common_name: String,
    pub city: String,
}

async fn attach_plant(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Json(body): Json<AttachPlantRequest>,
) -> ApiResult<(StatusCode, Json<UserPlant>)> {
    let attached = state
        .plant_service
        .attach_user_plant(&user.id, &body.common_name, &body.city)
        .await?;
    Ok((StatusCode::CREATED, Json(attached)))
}

async fn list_user_plants(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
) -> ApiResult<Json<Vec<UserPlant>>> {
    let plants = state.plant_service.list_user_plants(&user.id)?;
    Ok(Json(plants))
}

async fn detach_plant(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let detached = state.plant_service.detach_user_plant(&user.id, &id).await?;
    if detached == 0 {
        return Err(ApiError::NotFound(format!("user plant '{}'", id)));
    }
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/user/plant", post(attach_plant))
        .route("/user/plants", get(list_user_plants))
        .route("/user/plant/{id}", delete(detach_plant))
}
