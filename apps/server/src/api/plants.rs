//! Plant catalog endpoints.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use verdant_core::plants::{NewPlant, Plant, WateringBenchmark};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlantRequest {
    pub common_name: String,
    pub watering_benchmark: WateringBenchmark,
}

async fn list_plants(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Plant>>> {
    let plants = state.plant_service.list_plants()?;
    Ok(Json(plants))
}

async fn create_plant(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreatePlantRequest>,
) -> ApiResult<(StatusCode, Json<Plant>)> {
    let plant = state
        .plant_service
        .create_plant(NewPlant {
            common_name: body.common_name,
            watering_benchmark: body.watering_benchmark,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(plant)))
}

async fn show_plant(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> ApiResult<Json<Plant>> {
    let plant = state
        .plant_service
        .get_plant(&name)?
        .ok_or_else(|| ApiError::NotFound(format!("plant '{}'", name)))?;
    Ok(Json(plant))
}

async fn delete_plant(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let deleted = state.plant_service.delete_plant(id.clone()).await?;
    if deleted == 0 {
        return Err(ApiError::NotFound(format!("plant '{}'", id)));
    }
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/plant", get(list_plants).post(create_plant))
        .route("/plant/{key}", get(show_plant).delete(delete_plant))
}
