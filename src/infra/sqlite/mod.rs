pub mod preferences;
pub mod repo;
pub mod schema;
