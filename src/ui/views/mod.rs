pub mod distribution;
pub mod manufacturers;
pub mod medicines;
pub mod overview;
pub mod prices;
