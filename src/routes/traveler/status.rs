use crate::db::database_service::DatabaseService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult, ResultsRes};
use crate::types::traveler::RTravelerStatus;
use crate::utils::{token::TokenKeys, validation::parse_enum};
use actix_web::{put, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use entity::traveler::{Model as TravelerModel, TravelerStatus};
use std::sync::Arc;

/// Host approves or declines; the traveler can only cancel their own request.
#[put("/{id}/travelers/{request_id}")]
pub async fn set_traveler_status(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DatabaseService>>,
    keys: web::Data<TokenKeys>,
    auth: BearerAuth,
    path: web::Path<(i32, i32)>,
    body: web::Json<RTravelerStatus>,
) -> ApiResult<ResultsRes<TravelerModel>> {
    let claims = keys.validate(auth.token())?;
    let (trip_id, request_id) = path.into_inner();

    let trip = db.get_trip(trip_id).await?;
    let traveler = db.get_traveler(request_id).await?;
    if traveler.trip_id != trip.id {
        return Err(AppError::NotFound);
    }

    let status = parse_enum::<TravelerStatus>("status", &body.status)?;

    let is_host = trip.host_id == claims.user_id || claims.is_admin;
    let is_self = traveler.traveler_id == claims.user_id;
    let allowed = match status {
        TravelerStatus::Approved | TravelerStatus::Declined => is_host,
        TravelerStatus::Cancelled => is_self,
        TravelerStatus::Pending => false,
    };
    if !allowed {
        return Err(AppError::Forbidden);
    }

    let traveler = db.set_traveler_status(&trip, traveler, status).await?;

    Ok(ApiResponse::Ok(ResultsRes::new("Traveler status updated", traveler)))
}
