//! REST API surface, mounted under `/api`.

use std::sync::Arc;

use axum::Router;

use crate::state::AppState;

mod auth;
mod extract;
mod plants;
mod sync;
mod user_plants;

pub fn router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .merge(auth::router())
        .merge(plants::router())
        .merge(sync::router())
        .merge(user_plants::router());

    Router::new().nest("/api", api).with_state(state)
}
