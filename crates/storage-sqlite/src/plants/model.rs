//! Database models for the plant catalog.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use verdant_core::errors::Result;
use verdant_core::plants::{Plant, WateringBenchmark};

/// Catalog row. The benchmark is stored as a JSON text column so the
/// display pair survives upstream format drift without a schema change.
#[derive(
    Queryable,
    Identifiable,
    Insertable,
    AsChangeset,
    Selectable,
    Debug,
    Clone,
    Serialize,
    Deserialize,
)]
#[diesel(table_name = crate::schema::plants)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PlantDB {
    pub id: String,
    pub common_name: String,
    pub watering_benchmark: String,
    pub created_at: String,
    pub updated_at: String,
}

impl PlantDB {
    pub fn into_domain(self) -> Result<Plant> {
        let watering_benchmark: WateringBenchmark = serde_json::from_str(&self.watering_benchmark)?;
        Ok(Plant {
            id: self.id,
            common_name: self.common_name,
            watering_benchmark,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
