use crate::db::database_service::DatabaseService;
use crate::types::response::{ApiResponse, ApiResult, ResultsRes};
use actix_web::{get, web};
use entity::trip::Model as TripModel;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct Query {
    pub host_id: Option<i32>,
}

/// `?host_id=` narrows the list to one host's trips.
#[get("")]
pub async fn list_trips(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DatabaseService>>,
    query: web::Query<Query>,
) -> ApiResult<ResultsRes<Vec<TripModel>>> {
    let trips = match query.host_id {
        Some(host_id) => db.list_trips_for_host(host_id).await?,
        None => db.list_trips().await?,
    };
    Ok(ApiResponse::Ok(ResultsRes::new("Trips fetched successfully", trips)))
}
