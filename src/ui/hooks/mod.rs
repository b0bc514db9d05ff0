pub mod remote_view;
pub mod list_view;
