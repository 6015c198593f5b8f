//! SQLite storage implementation for the verdant backend.

pub mod db;
pub mod errors;
pub mod plants;
pub mod schema;
pub mod user_plants;
pub mod users;

pub use db::{create_pool, get_connection, run_migrations, DbPool, WriteHandle, MIGRATIONS};
pub use errors::StorageError;
pub use plants::PlantRepository;
pub use user_plants::UserPlantRepository;
pub use users::{AuthTokenRepository, UserRepository};
