//! Plant catalog domain models and services.

mod plants_model;
mod plants_service;
mod plants_traits;

pub use plants_model::*;
pub use plants_service::*;
pub use plants_traits::*;
