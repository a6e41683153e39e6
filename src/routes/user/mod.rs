pub mod admin;
pub mod edit;
pub mod get;
pub mod list;
