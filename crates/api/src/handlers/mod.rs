pub mod import;
pub mod lookup;
pub mod project;
