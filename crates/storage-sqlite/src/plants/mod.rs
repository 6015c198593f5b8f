//! SQLite storage for the plant catalog.

mod model;
mod repository;

pub use model::PlantDB;
pub use repository::PlantRepository;
