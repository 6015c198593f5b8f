use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

use verdant_core::errors::Result;
use verdant_core::plants::{NewPlant, Plant, PlantRepositoryTrait, UpsertOutcome};

use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::plants;
use crate::schema::plants::dsl::*;

use super::model::PlantDB;

pub struct PlantRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl PlantRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        PlantRepository { pool, writer }
    }

    fn load_plants_impl(&self) -> Result<Vec<Plant>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = plants
            .order(common_name.asc())
            .load::<PlantDB>(&mut conn)
            .map_err(StorageError::from)?;
        rows.into_iter().map(PlantDB::into_domain).collect()
    }

    fn find_by_common_name_impl(&self, name: &str) -> Result<Option<Plant>> {
        let mut conn = get_connection(&self.pool)?;
        let row = plants
            .filter(common_name.eq(name))
            .first::<PlantDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        row.map(PlantDB::into_domain).transpose()
    }
}

#[async_trait]
impl PlantRepositoryTrait for PlantRepository {
    fn load_plants(&self) -> Result<Vec<Plant>> {
        self.load_plants_impl()
    }

    fn find_by_common_name(&self, name: &str) -> Result<Option<Plant>> {
        self.find_by_common_name_impl(name)
    }

    async fn upsert_plant(&self, plant: NewPlant) -> Result<UpsertOutcome> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<UpsertOutcome> {
                let benchmark_json = serde_json::to_string(&plant.watering_benchmark)?;
                let now = Utc::now().to_rfc3339();

                // Find-then-write instead of ON CONFLICT: callers need to
                // know whether the row existed before.
                let existing = plants
                    .filter(common_name.eq(&plant.common_name))
                    .first::<PlantDB>(conn)
                    .optional()
                    .map_err(StorageError::from)?;

                match existing {
                    Some(row) => {
                        diesel::update(plants.find(row.id))
                            .set((watering_benchmark.eq(benchmark_json), updated_at.eq(now)))
                            .execute(conn)
                            .map_err(StorageError::from)?;
                        Ok(UpsertOutcome::Updated)
                    }
                    None => {
                        let row = PlantDB {
                            id: Uuid::new_v4().to_string(),
                            common_name: plant.common_name,
                            watering_benchmark: benchmark_json,
                            created_at: now.clone(),
                            updated_at: now,
                        };
                        diesel::insert_into(plants::table)
                            .values(&row)
                            .execute(conn)
                            .map_err(StorageError::from)?;
                        Ok(UpsertOutcome::Created)
                    }
                }
            })
            .await
    }

    async fn insert_plant(&self, plant: NewPlant) -> Result<Plant> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Plant> {
                let benchmark_json = serde_json::to_string(&plant.watering_benchmark)?;
                let now = Utc::now().to_rfc3339();
                let row = PlantDB {
                    id: Uuid::new_v4().to_string(),
                    common_name: plant.common_name,
                    watering_benchmark: benchmark_json,
                    created_at: now.clone(),
                    updated_at: now,
                };

                let inserted = diesel::insert_into(plants::table)
                    .values(&row)
                    .returning(PlantDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                inserted.into_domain()
            })
            .await
    }

    async fn delete_plant(&self, plant_id: String) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                let affected = diesel::delete(plants.find(plant_id))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(affected)
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support::test_pool;
    use verdant_core::plants::WateringBenchmark;

    fn repository() -> PlantRepository {
        let pool = test_pool();
        let writer = WriteHandle::new(Arc::clone(&pool));
        PlantRepository::new(pool, writer)
    }

    fn ficus(value: &str) -> NewPlant {
        NewPlant {
            common_name: "Ficus".to_string(),
            watering_benchmark: WateringBenchmark {
                value: value.to_string(),
                unit: "days".to_string(),
            },
        }
    }

    #[tokio::test]
    async fn upsert_creates_then_updates() {
        let repo = repository();

        let first = repo.upsert_plant(ficus("5-7")).await.unwrap();
        assert_eq!(first, UpsertOutcome::Created);

        let second = repo.upsert_plant(ficus("2-3")).await.unwrap();
        assert_eq!(second, UpsertOutcome::Updated);

        let stored = repo.find_by_common_name("Ficus").unwrap().unwrap();
        assert_eq!(stored.watering_benchmark.value, "2-3");
        assert_eq!(repo.load_plants().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn find_is_case_sensitive() {
        let repo = repository();
        repo.upsert_plant(ficus("5-7")).await.unwrap();

        assert!(repo.find_by_common_name("Ficus").unwrap().is_some());
        assert!(repo.find_by_common_name("ficus").unwrap().is_none());
    }

    #[tokio::test]
    async fn insert_duplicate_name_is_a_validation_error() {
        let repo = repository();
        repo.insert_plant(ficus("5-7")).await.unwrap();

        let err = repo.insert_plant(ficus("5-7")).await.unwrap_err();
        assert!(matches!(
            err,
            verdant_core::errors::Error::Validation(_)
        ));
    }

    #[tokio::test]
    async fn delete_unknown_plant_affects_zero_rows() {
        let repo = repository();
        let affected = repo.delete_plant("missing-id".to_string()).await.unwrap();
        assert_eq!(affected, 0);
    }

    #[tokio::test]
    async fn delete_by_id_removes_the_row() {
        let repo = repository();
        let plant = repo.insert_plant(ficus("5-7")).await.unwrap();

        let affected = repo.delete_plant(plant.id).await.unwrap();
        assert_eq!(affected, 1);
        assert!(repo.find_by_common_name("Ficus").unwrap().is_none());
    }
}
