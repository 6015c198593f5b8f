//! Verdant core domain: plant catalog, users, and the species sync
//! coordinator. Storage and HTTP stay behind traits so the services here
//! are testable without a database or a network.

pub mod errors;
pub mod plants;
pub mod users;

pub use errors::{Error, Result};
