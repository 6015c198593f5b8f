//! User domain models and authentication services.

mod auth_service;
mod users_model;
mod users_traits;

pub use auth_service::*;
pub use users_model::*;
pub use users_traits::*;
