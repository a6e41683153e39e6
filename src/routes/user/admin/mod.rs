pub mod access;
pub mod delete;
