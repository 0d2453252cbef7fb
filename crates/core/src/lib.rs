//! Domain types and pure logic for the survey schedule tracker.
//!
//! Nothing in this crate performs I/O. The persistence, HTTP and client
//! crates all build on these types.

pub mod dates;
pub mod equipment;
pub mod error;
pub mod import;
pub mod project;
pub mod status;
pub mod types;
