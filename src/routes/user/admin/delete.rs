use crate::db::database_service::DatabaseService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult, MessageRes};
use crate::utils::token::TokenKeys;
use actix_web::{delete, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;

/// Users may close their own account; admins may remove anyone's.
#[delete("/{id}")]
pub async fn delete_user(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DatabaseService>>,
    keys: web::Data<TokenKeys>,
    auth: BearerAuth,
    path: web::Path<i32>,
) -> ApiResult<MessageRes> {
    let claims = keys.validate(auth.token())?;
    let target = path.into_inner();

    if target != claims.user_id && !claims.is_admin {
        return Err(AppError::Forbidden);
    }

    db.delete_user(target).await?;

    Ok(ApiResponse::Ok(MessageRes {
        message: "User deleted successfully".to_string(),
    }))
}
