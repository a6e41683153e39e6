use actix_web::{middleware::Logger, web, App, HttpServer};
use std::io;
use std::sync::Arc;
use tracing::info;
use trip_share::config::EnvConfig;
use trip_share::db::database_service::DatabaseService;
use trip_share::routes::configure_routes;
use trip_share::utils::token::TokenKeys;

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = EnvConfig::from_env().map_err(io::Error::other)?;
    let addr = format!("0.0.0.0:{}", config.port);

    let database_service = Arc::new(
        DatabaseService::new(&config.db_url)
            .await
            .map_err(|e| io::Error::other(format!("failed to initialize database: {e}")))?,
    );
    let token_keys = TokenKeys::new(&config.jwt);

    info!("Starting server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(Arc::clone(&database_service)))
            .app_data(web::Data::new(token_keys.clone()))
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
