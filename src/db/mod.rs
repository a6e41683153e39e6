pub mod database_service;
pub mod favorite;
pub mod notification;
pub mod traveler;
pub mod trip;
pub mod user;
