use crate::db::database_service::DatabaseService;
use crate::types::response::{ApiResponse, ApiResult, ResultsRes};
use crate::utils::token::TokenKeys;
use actix_web::{put, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use entity::notification::Model as NotificationModel;
use std::sync::Arc;

#[put("/{id}/read")]
pub async fn mark_read(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DatabaseService>>,
    keys: web::Data<TokenKeys>,
    auth: BearerAuth,
    path: web::Path<i32>,
) -> ApiResult<ResultsRes<NotificationModel>> {
    let claims = keys.validate(auth.token())?;
    let notification = db
        .mark_notification_read(claims.user_id, path.into_inner())
        .await?;
    Ok(ApiResponse::Ok(ResultsRes::new("Notification marked as read", notification)))
}
