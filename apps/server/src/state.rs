//! Shared application state for the HTTP layer.

use std::sync::Arc;

use tokio::sync::Mutex;

use verdant_core::plants::PlantService;
use verdant_core::users::AuthService;

pub struct AppState {
    pub plant_service: Arc<PlantService>,
    pub auth_service: Arc<AuthService>,
    /// Held for the duration of a catalog sync run so runs never overlap.
    pub sync_gate: Mutex<()>,
}

impl AppState {
    pub fn new(plant_service: Arc<PlantService>, auth_service: Arc<AuthService>) -> Self {
        Self {
            plant_service,
            auth_service,
            sync_gate: Mutex::new(()),
        }
    }
}
