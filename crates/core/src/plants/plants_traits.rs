//! Repository contracts for the plant catalog and per-user plant lists.

use async_trait::async_trait;

use crate::errors::Result;

use super::plants_model::{NewPlant, NewUserPlant, Plant, UpsertOutcome, UserPlant};

/// Catalog persistence keyed by `common_name`.
#[async_trait]
pub trait PlantRepositoryTrait: Send + Sync {
    fn load_plants(&self) -> Result<Vec<Plant>>;

    fn find_by_common_name(&self, name: &str) -> Result<Option<Plant>>;

    /// Insert-or-overwrite by `common_name`, reporting which one happened.
    async fn upsert_plant(&self, plant: NewPlant) -> Result<UpsertOutcome>;

    async fn insert_plant(&self, plant: NewPlant) -> Result<Plant>;

    /// Returns the number of rows removed (0 when the id is unknown).
    async fn delete_plant(&self, plant_id: String) -> Result<usize>;
}

/// Per-user plant list persistence (the user/plant pivot).
#[async_trait]
pub trait UserPlantRepositoryTrait: Send + Sync {
    fn load_user_plants(&self, user_id: &str) -> Result<Vec<UserPlant>>;

    async fn attach_plant(&self, new_user_plant: NewUserPlant) -> Result<UserPlant>;

    /// Returns the number of rows removed (0 when the id is unknown or
    /// belongs to another user).
    async fn detach_plant(&self, user_id: String, user_plant_id: String) -> Result<usize>;
}
