use crate::db::database_service::DatabaseService;
use crate::types::error::AppError;
use crate::types::notification::RNotificationCreate;
use crate::types::response::{ApiResponse, ApiResult, ResultsRes};
use crate::utils::token::TokenKeys;
use actix_web::{post, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use entity::notification::Model as NotificationModel;
use std::sync::Arc;

#[post("")]
pub async fn send_notification(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DatabaseService>>,
    keys: web::Data<TokenKeys>,
    auth: BearerAuth,
    body: web::Json<RNotificationCreate>,
) -> ApiResult<ResultsRes<NotificationModel>> {
    let claims = keys.validate(auth.token())?;
    if !claims.is_admin {
        return Err(AppError::Forbidden);
    }

    let body = body.into_inner();
    body.validate()?;
    let notification = db.create_notification(body.user_id, body.message).await?;

    Ok(ApiResponse::Created(ResultsRes::new("Notification sent", notification)))
}
