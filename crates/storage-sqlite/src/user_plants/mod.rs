//! SQLite storage for per-user plant lists.

mod model;
mod repository;

pub use model::UserPlantDB;
pub use repository::UserPlantRepository;
