use crate::db::database_service::DatabaseService;
use crate::types::response::{ApiResponse, ApiResult, ResultsRes};
use crate::utils::token::TokenKeys;
use actix_web::{post, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use entity::traveler::Model as TravelerModel;
use std::sync::Arc;

#[post("/{id}/travelers")]
pub async fn join_trip(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DatabaseService>>,
    keys: web::Data<TokenKeys>,
    auth: BearerAuth,
    path: web::Path<i32>,
) -> ApiResult<ResultsRes<TravelerModel>> {
    let claims = keys.validate(auth.token())?;
    let trip = db.get_trip(path.into_inner()).await?;

    let traveler = db.request_to_join(&trip, claims.user_id).await?;

    Ok(ApiResponse::Created(ResultsRes::new("Join request sent", traveler)))
}
