pub mod error;
pub mod notification;
pub mod response;
pub mod token;
pub mod traveler;
pub mod trip;
pub mod user;
