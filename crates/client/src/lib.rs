//! Client side of the survey schedule tracker.
//!
//! - [`api`]: typed HTTP client for the project API
//! - [`model`]: wire and in-memory project representations
//! - [`cache`]: query cache shared by every view
//! - [`views`]: list, calendar and analytics view models

pub mod api;
pub mod cache;
pub mod error;
pub mod model;
pub mod views;

pub use api::ProjectsApi;
pub use error::ClientError;
