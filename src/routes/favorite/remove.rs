use crate::db::database_service::DatabaseService;
use crate::types::response::{ApiResponse, ApiResult, MessageRes};
use crate::utils::token::TokenKeys;
use actix_web::{delete, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;

#[delete("/{id}/favorite")]
pub async fn remove_favorite(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DatabaseService>>,
    keys: web::Data<TokenKeys>,
    auth: BearerAuth,
    path: web::Path<i32>,
) -> ApiResult<MessageRes> {
    let claims = keys.validate(auth.token())?;
    db.remove_favorite(claims.user_id, path.into_inner()).await?;
    Ok(ApiResponse::Ok(MessageRes {
        message: "Trip removed from favorites".to_string(),
    }))
}
