//! Database model for the user/plant pivot.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

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
#[diesel(table_name = crate::schema::user_plants)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct UserPlantDB {
    pub id: String,
    pub user_id: String,
    pub plant_id: String,
    pub city: String,
    pub created_at: String,
}
