use crate::db::database_service::DatabaseService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult, ResultsRes};
use crate::types::trip::RTripUpdate;
use crate::utils::token::TokenKeys;
use actix_web::{put, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use entity::trip::Model as TripModel;
use std::sync::Arc;

#[put("/{id}")]
pub async fn edit_trip(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DatabaseService>>,
    keys: web::Data<TokenKeys>,
    auth: BearerAuth,
    path: web::Path<i32>,
    body: web::Json<RTripUpdate>,
) -> ApiResult<ResultsRes<TripModel>> {
    let claims = keys.validate(auth.token())?;
    let trip = db.get_trip(path.into_inner()).await?;

    if trip.host_id != claims.user_id && !claims.is_admin {
        return Err(AppError::Forbidden);
    }

    let patch = body.into_inner().into_update(&trip)?;
    let trip = db.update_trip(trip, patch).await?;

    Ok(ApiResponse::Ok(ResultsRes::new("Trip updated successfully", trip)))
}
