pub mod endpoints;
pub mod ports;
pub mod services;
