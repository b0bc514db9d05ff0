pub mod appearance;
pub mod paths;
