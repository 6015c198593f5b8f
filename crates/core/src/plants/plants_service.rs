//! Plant catalog service: catalog access, per-user lists, and the species
//! sync coordinator.

use std::sync::Arc;

use log::{debug, error, info};

use verdant_plant_data::{fetch_all, PlantApiConfig, SpeciesProvider};

use crate::errors::{Error, Result, ValidationError};

use super::plants_model::{
    normalize_species, NewPlant, NewUserPlant, Plant, SyncOutcome, SyncStats, UpsertOutcome,
    UserPlant,
};
use super::plants_traits::{PlantRepositoryTrait, UserPlantRepositoryTrait};

/// Log a progress line every this many upserted records.
const PROGRESS_LOG_EVERY: usize = 100;

pub struct PlantService {
    repository: Arc<dyn PlantRepositoryTrait>,
    user_plants: Arc<dyn UserPlantRepositoryTrait>,
    provider: Arc<dyn SpeciesProvider>,
    api_config: PlantApiConfig,
}

impl PlantService {
    pub fn new(
        repository: Arc<dyn PlantRepositoryTrait>,
        user_plants: Arc<dyn UserPlantRepositoryTrait>,
        provider: Arc<dyn SpeciesProvider>,
        api_config: PlantApiConfig,
    ) -> Self {
        Self {
            repository,
            user_plants,
            provider,
            api_config,
        }
    }

    pub fn list_plants(&self) -> Result<Vec<Plant>> {
        self.repository.load_plants()
    }

    pub fn get_plant(&self, common_name: &str) -> Result<Option<Plant>> {
        self.repository.find_by_common_name(common_name)
    }

    pub async fn create_plant(&self, new_plant: NewPlant) -> Result<Plant> {
        if new_plant.common_name.trim().is_empty() {
            return Err(ValidationError::MissingField("common_name".to_string()).into());
        }
        self.repository.insert_plant(new_plant).await
    }

    pub async fn delete_plant(&self, plant_id: String) -> Result<usize> {
        self.repository.delete_plant(plant_id).await
    }

    pub fn list_user_plants(&self, user_id: &str) -> Result<Vec<UserPlant>> {
        self.user_plants.load_user_plants(user_id)
    }

    /// Attach a catalog plant to a user's list by its common name.
    pub async fn attach_user_plant(
        &self,
        user_id: &str,
        common_name: &str,
        city: &str,
    ) -> Result<UserPlant> {
        let plant = self
            .repository
            .find_by_common_name(common_name)?
            .ok_or_else(|| Error::NotFound(format!("plant '{}'", common_name)))?;

        self.user_plants
            .attach_plant(NewUserPlant {
                user_id: user_id.to_string(),
                plant_id: plant.id,
                city: city.to_string(),
            })
            .await
    }

    pub async fn detach_user_plant(&self, user_id: &str, user_plant_id: &str) -> Result<usize> {
        self.user_plants
            .detach_plant(user_id.to_string(), user_plant_id.to_string())
            .await
    }

    /// Run a full catalog sync against the external species API.
    ///
    /// Fetch failures truncate the input rather than failing the run; a run
    /// that retrieved nothing at all is reported as [`SyncOutcome::NoData`]
    /// so operators can tell "upstream unreachable" apart from "nothing
    /// changed".
    pub async fn sync_catalog(&self) -> Result<SyncOutcome> {
        info!("starting full species sync");

        let raw = fetch_all(self.provider.as_ref(), &self.api_config).await;
        if raw.is_empty() {
            return Ok(SyncOutcome::NoData);
        }

        let plants: Vec<NewPlant> = raw.iter().filter_map(normalize_species).collect();
        let dropped = raw.len() - plants.len();
        if dropped > 0 {
            debug!("{} records dropped during normalization", dropped);
        }

        let stats = self.apply_species(plants).await;
        info!(
            "species sync finished: {} created, {} updated, {} errors",
            stats.created, stats.updated, stats.errors
        );
        Ok(SyncOutcome::Completed(stats))
    }

    /// Upsert a batch of normalized records, tolerating per-record failures.
    ///
    /// One bad record must not fail the whole batch: failures are counted
    /// and the loop keeps going.
    pub async fn apply_species(&self, plants: Vec<NewPlant>) -> SyncStats {
        let mut stats = SyncStats {
            total_processed: plants.len(),
            ..Default::default()
        };

        for (index, plant) in plants.into_iter().enumerate() {
            match self.repository.upsert_plant(plant).await {
                Ok(UpsertOutcome::Created) => stats.created += 1,
                Ok(UpsertOutcome::Updated) => stats.updated += 1,
                Err(e) => {
                    stats.errors += 1;
                    error!("failed to save plant: {}", e);
                }
            }

            if (index + 1) % PROGRESS_LOG_EVERY == 0 {
                debug!("upsert progress: {}/{}", index + 1, stats.total_processed);
            }
        }

        stats
    }
}
