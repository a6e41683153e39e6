use crate::db::database_service::DatabaseService;
use crate::types::response::{ApiResponse, ApiResult, ResultsRes};
use actix_web::{get, web};
use entity::traveler::Model as TravelerModel;
use std::sync::Arc;

#[get("/{id}/travelers")]
pub async fn list_travelers(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DatabaseService>>,
    path: web::Path<i32>,
) -> ApiResult<ResultsRes<Vec<TravelerModel>>> {
    let travelers = db.list_travelers_for_trip(path.into_inner()).await?;
    Ok(ApiResponse::Ok(ResultsRes::new("Travelers fetched successfully", travelers)))
}
