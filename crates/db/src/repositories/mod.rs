//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod lookup_repo;
pub mod project_repo;

pub use lookup_repo::LookupRepo;
pub use project_repo::ProjectRepo;
