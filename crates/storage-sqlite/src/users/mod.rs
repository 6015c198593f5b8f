//! SQLite storage for users and bearer tokens.

mod model;
mod repository;

pub use model::{AuthTokenDB, UserDB};
pub use repository::{AuthTokenRepository, UserRepository};
