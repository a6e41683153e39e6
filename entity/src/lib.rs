pub mod favorite;
pub mod notification;
pub mod traveler;
pub mod trip;
pub mod user;

/*
 A user hosts trips and can ask to join other people's trips.
 Every join request is a traveler row that the host approves or declines,
 and the traveler can cancel it themself. Both sides get a notification.
 Favorites are plain bookmarks, one per (trip, user).
 */
