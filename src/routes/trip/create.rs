use crate::db::database_service::DatabaseService;
use crate::types::response::{ApiResponse, ApiResult, ResultsRes};
use crate::types::trip::{DBTripCreate, RTripCreate};
use crate::utils::token::TokenKeys;
use actix_web::{post, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use entity::trip::Model as TripModel;
use std::sync::Arc;

/// The caller becomes the host.
#[post("")]
pub async fn create_trip(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DatabaseService>>,
    keys: web::Data<TokenKeys>,
    auth: BearerAuth,
    body: web::Json<RTripCreate>,
) -> ApiResult<ResultsRes<TripModel>> {
    let claims = keys.validate(auth.token())?;
    let payload = DBTripCreate::try_from(body.into_inner())?;

    let trip = db.create_trip(claims.user_id, payload).await?;

    Ok(ApiResponse::Ok(ResultsRes::new("Trip created successfully", trip)))
}
