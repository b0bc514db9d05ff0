pub mod components;
pub mod hooks;
pub mod state;
pub mod style;
pub mod views;
