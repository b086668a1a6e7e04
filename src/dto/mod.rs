pub mod api;
pub mod categories;
