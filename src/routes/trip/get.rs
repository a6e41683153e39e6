use crate::db::database_service::DatabaseService;
use crate::types::response::{ApiResponse, ApiResult, ResultsRes};
use actix_web::{get, web};
use entity::trip::Model as TripModel;
use std::sync::Arc;

#[get("/{id}")]
pub async fn get_trip(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DatabaseService>>,
    path: web::Path<i32>,
) -> ApiResult<ResultsRes<TripModel>> {
    let trip = db.get_trip(path.into_inner()).await?;
    Ok(ApiResponse::Ok(ResultsRes::new("Trip fetched successfully", trip)))
}
