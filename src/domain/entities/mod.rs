pub mod chart;
pub mod filter;
pub mod page;
pub mod payload;
pub mod record;
pub mod search;
pub mod table;
pub mod theme;
pub mod view_state;
