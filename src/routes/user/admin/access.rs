use crate::db::database_service::DatabaseService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult, ResultsRes};
use crate::types::user::RUserAccess;
use crate::utils::token::TokenKeys;
use actix_web::{put, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use entity::user::Model as UserModel;
use std::sync::Arc;
use tracing::{info, warn};

/// Deactivates, reactivates, promotes or demotes an account.
#[put("/{id}/access")]
pub async fn set_user_access(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DatabaseService>>,
    keys: web::Data<TokenKeys>,
    auth: BearerAuth,
    path: web::Path<i32>,
    body: web::Json<RUserAccess>,
) -> ApiResult<ResultsRes<UserModel>> {
    let claims = keys.validate(auth.token())?;
    if !claims.is_admin {
        warn!(caller = claims.user_id, "non-admin tried to change account access");
        return Err(AppError::Forbidden);
    }

    let user_id = path.into_inner();
    let mut user = db.get_user_by_id(user_id).await?;
    if let Some(active) = body.is_active {
        user = db.set_user_active(user_id, active).await?;
    }
    if let Some(admin) = body.is_admin {
        user = db.set_user_admin(user_id, admin).await?;
    }

    info!(user_id, by = claims.user_id, active = user.is_active, admin = user.is_admin, "account access changed");
    Ok(ApiResponse::Ok(ResultsRes::new("User access updated", user)))
}
