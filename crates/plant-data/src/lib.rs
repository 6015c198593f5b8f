//! External plant species API client and pagination engine.
//!
//! This crate owns everything that talks to the upstream species-listing
//! API: the page fetcher, the sequential pagination loop, and the fetch
//! error taxonomy. Normalization and persistence live elsewhere; callers
//! get back raw records exactly as the upstream returned them.

pub mod errors;
pub mod models;
pub mod pager;
pub mod provider;

pub use errors::{PlantDataError, Result};
pub use models::{RawSpecies, SpeciesPage};
pub use pager::fetch_all;
pub use provider::perenual::PerenualProvider;
pub use provider::{PlantApiConfig, SpeciesProvider, MAX_PER_PAGE};
