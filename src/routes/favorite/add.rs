use crate::db::database_service::DatabaseService;
use crate::types::response::{ApiResponse, ApiResult, ResultsRes};
use crate::utils::token::TokenKeys;
use actix_web::{post, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use entity::favorite::Model as FavoriteModel;
use std::sync::Arc;

#[post("/{id}/favorite")]
pub async fn add_favorite(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DatabaseService>>,
    keys: web::Data<TokenKeys>,
    auth: BearerAuth,
    path: web::Path<i32>,
) -> ApiResult<ResultsRes<FavoriteModel>> {
    let claims = keys.validate(auth.token())?;
    let favorite = db.add_favorite(claims.user_id, path.into_inner()).await?;
    Ok(ApiResponse::Created(ResultsRes::new("Trip added to favorites", favorite)))
}
