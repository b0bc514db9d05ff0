pub mod chart_service;
pub mod export_service;
pub mod fetch_service;
pub mod list_view;
pub mod sample_service;
pub mod theme_service;
