pub mod join;
pub mod list;
pub mod status;
