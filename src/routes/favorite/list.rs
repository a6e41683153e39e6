use crate::db::database_service::DatabaseService;
use crate::types::response::{ApiResponse, ApiResult, ResultsRes};
use crate::utils::token::TokenKeys;
use actix_web::{get, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use entity::favorite::Model as FavoriteModel;
use std::sync::Arc;

#[get("")]
pub async fn list_favorites(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DatabaseService>>,
    keys: web::Data<TokenKeys>,
    auth: BearerAuth,
) -> ApiResult<ResultsRes<Vec<FavoriteModel>>> {
    let claims = keys.validate(auth.token())?;
    let favorites = db.list_favorites_for_user(claims.user_id).await?;
    Ok(ApiResponse::Ok(ResultsRes::new("Favorites fetched successfully", favorites)))
}
