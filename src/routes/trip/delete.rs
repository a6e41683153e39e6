use crate::db::database_service::DatabaseService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult, MessageRes};
use crate::utils::token::TokenKeys;
use actix_web::{delete, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;
use tracing::warn;

/// Only the host (or an admin) may delete a trip.
#[delete("/{id}")]
pub async fn delete_trip(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DatabaseService>>,
    keys: web::Data<TokenKeys>,
    auth: BearerAuth,
    path: web::Path<i32>,
) -> ApiResult<MessageRes> {
    let claims = keys.validate(auth.token())?;
    let trip = db.get_trip(path.into_inner()).await?;

    if trip.host_id != claims.user_id && !claims.is_admin {
        warn!(trip_id = trip.id, caller = claims.user_id, "non-host tried to delete trip");
        return Err(AppError::Forbidden);
    }

    db.delete_trip(trip.id).await?;

    Ok(ApiResponse::Ok(MessageRes {
        message: "Trip deleted successfully".to_string(),
    }))
}
