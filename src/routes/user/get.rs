use crate::db::database_service::DatabaseService;
use crate::types::response::{ApiResponse, ApiResult, ResultsRes};
use actix_web::{get, web};
use entity::user::Model as UserModel;
use std::sync::Arc;

#[get("/{id}")]
pub async fn get_user(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DatabaseService>>,
    path: web::Path<i32>,
) -> ApiResult<ResultsRes<UserModel>> {
    let user = db.get_user_by_id(path.into_inner()).await?;
    Ok(ApiResponse::Ok(ResultsRes::new("User fetched successfully", user)))
}
