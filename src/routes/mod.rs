use crate::types::error::json_error_handler;
use actix_web::web;

pub mod auth;
pub mod favorite;
pub mod hello;
pub mod notification;
pub mod traveler;
pub mod trip;
pub mod user;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler));

    cfg.service(hello::hello)
        .service(auth::register::register)
        .service(auth::login::login);
    cfg.service(
        web::scope("/users")
            .service(user::list::list_users)
            .service(user::edit::edit_user)
            .service(user::get::get_user)
            .service(user::admin::access::set_user_access)
            .service(user::admin::delete::delete_user)
    );
    cfg.service(
        web::scope("/trips")
            .service(trip::list::list_trips)
            .service(trip::create::create_trip)
            .service(trip::get::get_trip)
            .service(trip::edit::edit_trip)
            .service(trip::delete::delete_trip)
            .service(traveler::list::list_travelers)
            .service(traveler::join::join_trip)
            .service(traveler::status::set_traveler_status)
            .service(favorite::add::add_favorite)
            .service(favorite::remove::remove_favorite)
    );
    cfg.service(
        web::scope("/favorites").service(favorite::list::list_favorites)
    );
    cfg.service(
        web::scope("/notifications")
            .service(notification::list::list_notifications)
            .service(notification::send::send_notification)
            .service(notification::read::mark_read)
    );
}
