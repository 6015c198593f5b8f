use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

use verdant_core::errors::{Error, Result};
use verdant_core::plants::{NewUserPlant, UserPlant, UserPlantRepositoryTrait};

use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::plants::PlantDB;
use crate::schema::{plants, user_plants};

use super::model::UserPlantDB;

fn to_domain(pivot: UserPlantDB, plant: PlantDB) -> Result<UserPlant> {
    let plant = plant.into_domain()?;
    Ok(UserPlant {
        id: pivot.id,
        plant_id: pivot.plant_id,
        common_name: plant.common_name,
        watering_benchmark: plant.watering_benchmark,
        city: pivot.city,
        created_at: pivot.created_at,
    })
}

pub struct UserPlantRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl UserPlantRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        UserPlantRepository { pool, writer }
    }
}

#[async_trait]
impl UserPlantRepositoryTrait for UserPlantRepository {
    fn load_user_plants(&self, user_id: &str) -> Result<Vec<UserPlant>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = user_plants::table
            .inner_join(plants::table)
            .filter(user_plants::user_id.eq(user_id))
            .order(user_plants::created_at.asc())
            .select((UserPlantDB::as_select(), PlantDB::as_select()))
            .load::<(UserPlantDB, PlantDB)>(&mut conn)
            .map_err(StorageError::from)?;

        rows.into_iter()
            .map(|(pivot, plant)| to_domain(pivot, plant))
            .collect()
    }

    async fn attach_plant(&self, new_user_plant: NewUserPlant) -> Result<UserPlant> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<UserPlant> {
                let plant = plants::table
                    .find(&new_user_plant.plant_id)
                    .first::<PlantDB>(conn)
                    .optional()
                    .map_err(StorageError::from)?
                    .ok_or_else(|| {
                        Error::NotFound(format!("plant '{}'", new_user_plant.plant_id))
                    })?;

                let row = UserPlantDB {
                    id: Uuid::new_v4().to_string(),
                    user_id: new_user_plant.user_id,
                    plant_id: new_user_plant.plant_id,
                    city: new_user_plant.city,
                    created_at: Utc::now().to_rfc3339(),
                };

                diesel::insert_into(user_plants::table)
                    .values(&row)
                    .execute(conn)
                    .map_err(StorageError::from)?;

                to_domain(row, plant)
            })
            .await
    }

    async fn detach_plant(&self, user_id: String, user_plant_id: String) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                let affected = diesel::delete(
                    user_plants::table
                        .find(user_plant_id)
                        .filter(user_plants::user_id.eq(user_id)),
                )
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
    use crate::plants::PlantRepository;
    use crate::users::UserRepository;
    use verdant_core::plants::{NewPlant, PlantRepositoryTrait, WateringBenchmark};
    use verdant_core::users::{NewUser, UserRepositoryTrait};

    struct Fixture {
        user_plants: UserPlantRepository,
        user_id: String,
        plant_id: String,
    }

    async fn fixture() -> Fixture {
        let pool = test_pool();
        let writer = WriteHandle::new(Arc::clone(&pool));

        let users = UserRepository::new(Arc::clone(&pool), writer.clone());
        let user = users
            .insert_user(NewUser {
                name: "John".to_string(),
                email: "john@example.com".to_string(),
                password_hash: "$argon2id$stub".to_string(),
            })
            .await
            .unwrap();

        let plants_repo = PlantRepository::new(Arc::clone(&pool), writer.clone());
        let plant = plants_repo
            .insert_plant(NewPlant {
                common_name: "Ficus".to_string(),
                watering_benchmark: WateringBenchmark {
                    value: "5-7".to_string(),
                    unit: "days".to_string(),
                },
            })
            .await
            .unwrap();

        Fixture {
            user_plants: UserPlantRepository::new(pool, writer),
            user_id: user.id,
            plant_id: plant.id,
        }
    }

    fn attach_input(fx: &Fixture, city: &str) -> NewUserPlant {
        NewUserPlant {
            user_id: fx.user_id.clone(),
            plant_id: fx.plant_id.clone(),
            city: city.to_string(),
        }
    }

    #[tokio::test]
    async fn attach_then_list_includes_catalog_fields() {
        let fx = fixture().await;
        let attached = fx
            .user_plants
            .attach_plant(attach_input(&fx, "Paris"))
            .await
            .unwrap();
        assert_eq!(attached.common_name, "Ficus");
        assert_eq!(attached.city, "Paris");

        let listed = fx.user_plants.load_user_plants(&fx.user_id).unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].watering_benchmark.value, "5-7");
    }

    #[tokio::test]
    async fn attaching_the_same_plant_twice_is_a_validation_error() {
        let fx = fixture().await;
        fx.user_plants
            .attach_plant(attach_input(&fx, "Paris"))
            .await
            .unwrap();

        let err = fx
            .user_plants
            .attach_plant(attach_input(&fx, "Lyon"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[tokio::test]
    async fn detach_is_scoped_to_the_owner() {
        let fx = fixture().await;
        let attached = fx
            .user_plants
            .attach_plant(attach_input(&fx, "Paris"))
            .await
            .unwrap();

        let foreign = fx
            .user_plants
            .detach_plant("someone-else".to_string(), attached.id.clone())
            .await
            .unwrap();
        assert_eq!(foreign, 0);

        let owned = fx
            .user_plants
            .detach_plant(fx.user_id.clone(), attached.id)
            .await
            .unwrap();
        assert_eq!(owned, 1);
        assert!(fx.user_plants.load_user_plants(&fx.user_id).unwrap().is_empty());
    }

    #[tokio::test]
    async fn attach_unknown_plant_is_not_found() {
        let fx = fixture().await;
        let err = fx
            .user_plants
            .attach_plant(NewUserPlant {
                user_id: fx.user_id.clone(),
                plant_id: "missing".to_string(),
                city: "Paris".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }
}
