pub mod charts;
pub mod data_table;
pub mod dropdown;
pub mod list_panel;
pub mod pagination;
pub mod stat_card;
pub mod status;
