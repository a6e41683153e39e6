use crate::db::database_service::DatabaseService;
use crate::types::response::{ApiResponse, ApiResult, ResultsRes};
use actix_web::{get, web};
use entity::user::Model as UserModel;
use std::sync::Arc;

#[get("")]
pub async fn list_users(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DatabaseService>>,
) -> ApiResult<ResultsRes<Vec<UserModel>>> {
    let users = db.list_users().await?;
    Ok(ApiResponse::Ok(ResultsRes::new("Users fetched successfully", users)))
}
